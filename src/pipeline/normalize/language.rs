use whatlang::Lang;

/// Fallback language code for empty input or an unconfident detection.
const DEFAULT_LANGUAGE: &str = "en";

/// Best-effort ISO 639-1 code for a free-text description.
///
/// The trigram detector is deterministic, so the same input always yields
/// the same code. Unreliable detections and languages without a 639-1
/// mapping fall back to `"en"`.
pub fn detect_language(text: &str) -> String {
    if text.trim().is_empty() {
        return DEFAULT_LANGUAGE.to_string();
    }
    match whatlang::detect(text) {
        Some(info) if info.is_reliable() => iso639_1(info.lang())
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string(),
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

fn iso639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ell => "el",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Bul => "bg",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Ind => "id",
        Lang::Cat => "ca",
        Lang::Hrv => "hr",
        Lang::Srp => "sr",
        Lang::Slk => "sk",
        Lang::Slv => "sl",
        Lang::Lit => "lt",
        Lang::Lav => "lv",
        Lang::Est => "et",
        Lang::Afr => "af",
        _ => return None,
    };
    Some(code)
}
