use once_cell::sync::Lazy;
use regex::Regex;

/// Known UTF-8-as-Latin-1 artifacts and their intended characters.
/// Longer sequences first so compound artifacts are repaired whole.
const MOJIBAKE_TABLE: &[(&str, &str)] = &[
    ("â€™", "'"),
    ("â€œ", "\""),
    ("â€“", "-"),
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã­", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("Ã¼", "ü"),
    ("Ã¤", "ä"),
    ("Ã¶", "ö"),
    ("Ã§", "ç"),
    ("Ã£", "ã"),
    ("Ãµ", "õ"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã‘", "Ñ"),
    ("Ã‰", "É"),
];

static STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s@.\-]").unwrap());

/// Repairs known mojibake sequences, strips characters outside
/// `[word characters, whitespace, @, ., -]`, and trims the result.
///
/// Idempotent: repaired text contains no table entries and no strippable
/// characters, so a second pass is a no-op. Not applied to fields that must
/// retain exact syntax (emails, profile URLs, phone numbers) nor to the raw
/// location, whose commas the decomposer needs.
pub fn sanitize(text: &str) -> String {
    let mut repaired = text.to_string();
    for (artifact, replacement) in MOJIBAKE_TABLE {
        if repaired.contains(artifact) {
            repaired = repaired.replace(artifact, replacement);
        }
    }
    STRIP_RE.replace_all(&repaired, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repairs_accented_vowel_artifacts() {
        assert_eq!(sanitize("JosÃ© PÃ©rez"), "José Pérez");
        assert_eq!(sanitize("PeÃ±a"), "Peña");
    }

    #[test]
    fn strips_forbidden_characters_and_trims() {
        assert_eq!(sanitize("  Acme, Inc. (HQ)!  "), "Acme Inc. HQ");
    }

    #[test]
    fn keeps_email_like_characters() {
        assert_eq!(sanitize("reach me @ acme.com - sales"), "reach me @ acme.com - sales");
    }

    #[test]
    fn sanitizing_twice_is_a_fixed_point() {
        let inputs = [
            "JosÃ© â€œPepeâ€“ PÃ©rez (GerÃªncia)!",
            "plain text",
            "  Ã±andÃº  ",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn unicode_letters_survive_the_strip() {
        assert_eq!(sanitize("Müller"), "Müller");
    }
}
