use once_cell::sync::Lazy;
use regex::Regex;

static NON_PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d+]").unwrap());

/// Minimum digit-and-plus length for a cleaned number to be kept.
const MIN_PHONE_LEN: usize = 8;

/// Strips everything but digits and `+`. A cleaned value shorter than
/// 8 characters normalizes to the empty string (absent), otherwise it is
/// kept verbatim with no further reformatting.
pub fn clean_phone(raw: &str) -> String {
    let cleaned = NON_PHONE_RE.replace_all(raw, "");
    if cleaned.len() < MIN_PHONE_LEN {
        String::new()
    } else {
        cleaned.into_owned()
    }
}

/// First non-empty of the two cleaned candidates, primary first; empty when
/// both are absent.
pub fn combine_phones(primary: &str, secondary: &str) -> String {
    if !primary.is_empty() {
        primary.to_string()
    } else {
        secondary.to_string()
    }
}
