use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::INVALID_EMAIL_SENTINEL;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_RE.is_match(candidate)
}

/// Picks the first syntactically valid email among the candidates, which are
/// given in priority order (enrichment source first, then the primary and
/// professional fields). Falls back to the sentinel address when nothing
/// validates; never fails.
pub fn select_email<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find(|candidate| is_valid_email(candidate))
        .unwrap_or(INVALID_EMAIL_SENTINEL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_valid_candidate_wins() {
        let picked = select_email(["", "bad@", "ok@example.com"]);
        assert_eq!(picked, "ok@example.com");
    }

    #[test]
    fn higher_priority_valid_candidate_beats_later_ones() {
        let picked = select_email(["first@example.com", "second@example.com", ""]);
        assert_eq!(picked, "first@example.com");
    }

    #[test]
    fn all_invalid_falls_back_to_sentinel() {
        let picked = select_email(["nope", "@no-local.com", "missing-tld@host"]);
        assert_eq!(picked, INVALID_EMAIL_SENTINEL);
    }

    #[test]
    fn validation_requires_exact_match() {
        assert!(is_valid_email("user.name+tag@sub.example.co"));
        assert!(!is_valid_email(" padded@example.com"));
        assert!(!is_valid_email("two@at@example.com"));
        assert!(!is_valid_email("short-tld@example.c"));
    }
}
