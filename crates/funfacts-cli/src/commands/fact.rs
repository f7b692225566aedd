//! Fact command implementation.

use crate::cli::FactArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use funfacts_domain::GameFact;
use funfacts_providers::uselessfacts::{UselessFactsProvider, DEFAULT_BASE_URL};
use funfacts_source::FactSource;

/// Execute the fact command.
pub async fn execute_fact(args: FactArgs, source: &FactSource, formatter: &Formatter) -> Result<()> {
    let facts = collect_facts(&args, source).await?;
    println!("{}", formatter.format_facts(&facts, args.reveal)?);
    Ok(())
}

/// Facts for the given arguments, without printing.
pub async fn collect_facts(args: &FactArgs, source: &FactSource) -> Result<Vec<GameFact>> {
    if args.count == 0 {
        return Err(CliError::InvalidInput(
            "Count must be at least 1".to_string(),
        ));
    }

    if let Some(id) = &args.id {
        let config = source.config();
        if !config.remote_providers {
            return Err(CliError::InvalidInput(
                "Looking up a fact by id needs remote providers".to_string(),
            ));
        }
        let provider = UselessFactsProvider::new(DEFAULT_BASE_URL, config.request_timeout());
        let fact = provider.fact_by_id(id).await?;
        return Ok(vec![fact.into_game_fact()]);
    }

    if let Some(category) = &args.category {
        let pool = source.static_pool();
        let facts: Vec<GameFact> = pool
            .by_category(category)
            .into_iter()
            .take(args.count)
            .collect();
        if facts.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "Unknown category '{}'. Available: {}",
                category,
                pool.categories().join(", ")
            )));
        }
        return Ok(facts);
    }

    let mut facts = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        facts.push(source.next_fact().await);
    }
    tracing::debug!(count = facts.len(), "Facts collected");
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use funfacts_source::FactSourceConfig;

    fn args(count: usize, category: Option<&str>) -> FactArgs {
        FactArgs {
            count,
            reveal: false,
            category: category.map(str::to_string),
            id: None,
        }
    }

    fn offline_source() -> FactSource {
        FactSource::from_config(FactSourceConfig::offline()).unwrap()
    }

    #[tokio::test]
    async fn test_collects_requested_count() {
        let facts = collect_facts(&args(3, None), &offline_source()).await.unwrap();
        assert_eq!(facts.len(), 3);
        assert!(facts.iter().all(|f| !f.is_answered));
    }

    #[tokio::test]
    async fn test_zero_count_rejected() {
        let result = collect_facts(&args(0, None), &offline_source()).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_category_filter() {
        let source = offline_source();
        let category = source.static_pool().categories()[0].to_string();

        let facts = collect_facts(&args(2, Some(&category.to_uppercase())), &source)
            .await
            .unwrap();
        assert!(!facts.is_empty() && facts.len() <= 2);
        assert!(facts
            .iter()
            .all(|f| f.category.as_deref() == Some(category.as_str())));
    }

    #[tokio::test]
    async fn test_lookup_by_id_needs_remote_providers() {
        let mut lookup = args(1, None);
        lookup.id = Some("4f7b6a".to_string());

        let result = collect_facts(&lookup, &offline_source()).await;
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_lookup_by_malformed_id() {
        let mut config = FactSourceConfig::offline();
        config.remote_providers = true;
        let source = FactSource::from_config(config).unwrap();

        let mut lookup = args(1, None);
        lookup.id = Some("../random".to_string());

        let result = collect_facts(&lookup, &source).await;
        assert!(matches!(result, Err(CliError::Provider(_))));
    }

    #[tokio::test]
    async fn test_unknown_category() {
        let result = collect_facts(&args(1, Some("No Such Topic")), &offline_source()).await;
        match result {
            Err(CliError::InvalidInput(msg)) => assert!(msg.contains("Available")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
