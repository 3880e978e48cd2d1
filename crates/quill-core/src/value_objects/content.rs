//! Pure content measurements - reading time and excerpt derivation
//!
//! Both are functions of content alone, recomputed at publish time rather
//! than maintained incrementally.

/// Assumed reading speed in words per minute
pub const WORDS_PER_MINUTE: usize = 200;

/// Character budget for a derived excerpt
pub const EXCERPT_BUDGET: usize = 200;

/// Count whitespace-separated words
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Estimated reading time in minutes: ceil(words / 200), minimum 1
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = word_count(content);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    minutes as i32
}

/// Derive an excerpt by truncating content at [`EXCERPT_BUDGET`] characters
/// on a word boundary, with a trailing ellipsis when truncated.
pub fn derive_excerpt(content: &str) -> String {
    let text = content.trim();
    if text.chars().count() <= EXCERPT_BUDGET {
        return text.to_string();
    }

    let mut cut = text.len();
    for (count, (idx, _)) in text.char_indices().enumerate() {
        if count == EXCERPT_BUDGET {
            cut = idx;
            break;
        }
    }

    let truncated = &text[..cut];
    match truncated.rfind(char::is_whitespace) {
        Some(space) => format!("{}...", truncated[..space].trim_end()),
        None => format!("{truncated}..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_reading_time_minimum_one_minute() {
        assert_eq!(reading_time_minutes(""), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(50)), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(200)), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(&"word ".repeat(201)), 2);
        assert_eq!(reading_time_minutes(&"word ".repeat(1000)), 5);
    }

    #[test]
    fn test_excerpt_short_content_untouched() {
        assert_eq!(derive_excerpt("A short body."), "A short body.");
    }

    #[test]
    fn test_excerpt_truncates_on_word_boundary() {
        let content = "word ".repeat(100);
        let excerpt = derive_excerpt(&content);
        assert!(excerpt.ends_with("word..."));
        assert!(excerpt.chars().count() <= EXCERPT_BUDGET + 3);
        // No half-words before the ellipsis
        let body = &excerpt[..excerpt.len() - 3];
        assert!(body.split_whitespace().all(|w| w == "word"));
    }

    #[test]
    fn test_excerpt_handles_unbroken_text() {
        let content = "x".repeat(500);
        let excerpt = derive_excerpt(&content);
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), EXCERPT_BUDGET + 3);
    }
}
