//! Slug derivation - pure functions from title to a per-author-unique slug
//!
//! Kept deterministic and side-effect-free: the caller supplies the author's
//! existing slugs, collision resolution appends the first free numeric
//! suffix starting at 2.

/// Maximum length of a slug before suffixing
pub const MAX_SLUG_LEN: usize = 80;

/// Fallback when a title contains no usable characters
const FALLBACK: &str = "untitled";

/// Derive a slug candidate from a title: lowercase, runs of
/// non-alphanumeric characters collapsed to single hyphens, trimmed and
/// truncated to [`MAX_SLUG_LEN`] on a hyphen boundary where possible.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return FALLBACK.to_string();
    }

    if slug.len() > MAX_SLUG_LEN {
        let mut end = MAX_SLUG_LEN;
        while !slug.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        let cut = slug[..end].rfind('-').unwrap_or(end);
        slug.truncate(cut);
        // A trailing run of hyphens can survive the cut
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Resolve a candidate slug against the author's existing slugs.
///
/// Returns the candidate unchanged when free, otherwise `candidate-2`,
/// `candidate-3`, ... for the first free suffix.
pub fn dedupe(candidate: &str, existing: &[String]) -> String {
    if !existing.iter().any(|s| s == candidate) {
        return candidate.to_string();
    }

    let mut suffix = 2u32;
    loop {
        let attempt = format!("{candidate}-{suffix}");
        if !existing.iter().any(|s| *s == attempt) {
            return attempt;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Rust: Zero -- Cost?! Abstractions"), "rust-zero-cost-abstractions");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  --Hello--  "), "hello");
    }

    #[test]
    fn test_slugify_unicode_lowercase() {
        assert_eq!(slugify("Über Straße"), "über-straße");
    }

    #[test]
    fn test_slugify_empty_title_falls_back() {
        assert_eq!(slugify("!!!"), "untitled");
        assert_eq!(slugify(""), "untitled");
    }

    #[test]
    fn test_slugify_truncates_on_hyphen_boundary() {
        let title = "word ".repeat(40);
        let slug = slugify(&title);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
        assert!(slug.starts_with("word-word"));
    }

    #[test]
    fn test_dedupe_free_candidate() {
        assert_eq!(dedupe("hello-world", &[]), "hello-world");
    }

    #[test]
    fn test_dedupe_first_collision_gets_2() {
        let existing = vec!["hello-world".to_string()];
        assert_eq!(dedupe("hello-world", &existing), "hello-world-2");
    }

    #[test]
    fn test_dedupe_skips_taken_suffixes() {
        let existing = vec![
            "hello-world".to_string(),
            "hello-world-2".to_string(),
            "hello-world-3".to_string(),
        ];
        assert_eq!(dedupe("hello-world", &existing), "hello-world-4");
    }

    #[test]
    fn test_dedupe_ignores_unrelated_slugs() {
        let existing = vec!["hello-world-2".to_string()];
        assert_eq!(dedupe("hello-world", &existing), "hello-world");
    }
}
