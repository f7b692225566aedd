//! FunFacts CLI library.
//!
//! This library provides the terminal front-end for FunFacts: configuration
//! management, the interactive play loop, score commands, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod play;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
