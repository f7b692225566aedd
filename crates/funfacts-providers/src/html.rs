//! HTML entity decoding for trivia question text
//!
//! Open Trivia DB returns questions with HTML entities (`&quot;`, `&#039;`).
//! The text is run through `html2text` and folded back onto one line, so
//! named and numeric entities decode while bare ampersands survive.

/// Render width handed to `html2text`; wrapped lines are rejoined afterwards
const RENDER_WIDTH: usize = 200;

/// Replace HTML entities in `text` with the characters they stand for
///
/// Falls back to the input when it cannot be rendered.
///
/// # Examples
///
/// ```
/// use funfacts_providers::html::decode_entities;
///
/// assert_eq!(decode_entities("&quot;Hi&quot; &amp; bye"), "\"Hi\" & bye");
/// assert_eq!(decode_entities("It&#039;s"), "It's");
/// ```
pub fn decode_entities(text: &str) -> String {
    match html2text::from_read(text.as_bytes(), RENDER_WIDTH) {
        Ok(rendered) => rendered.split_whitespace().collect::<Vec<_>>().join(" "),
        Err(e) => {
            tracing::debug!("Could not decode entities: {}", e);
            text.to_string()
        }
    }
}
