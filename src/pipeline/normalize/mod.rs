pub mod email;
pub mod language;
pub mod location;
pub mod phone;
pub mod sanitize;

use crate::domain::{
    NormalizedRow, RawRow, COL_COMPANY, COL_DESCRIPTION, COL_EMAIL, COL_FIRST_NAME,
    COL_FULL_NAME, COL_JOB_TITLE, COL_LAST_NAME, COL_LOCATION, COL_MAIL_FROM_SOURCE,
    COL_PHONE, COL_PHONE_FROM_SOURCE, COL_PROFESSIONAL_EMAIL, COL_PROFILE_URL,
};
use crate::pipeline::identity::log_id;
pub use location::LocationResolver;

fn field<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Applies every per-field normalization rule to one projected raw row.
///
/// The field normalizers are independent of one another; each substitutes its
/// documented sentinel or the empty string on failure, so normalization never
/// aborts a row.
pub struct RowNormalizer {
    location: LocationResolver,
}

impl RowNormalizer {
    pub fn new(location: LocationResolver) -> Self {
        Self { location }
    }

    pub async fn normalize(&self, raw: &RawRow, nro: u64, timestamp: &str) -> NormalizedRow {
        // Exact-syntax fields bypass the sanitizer
        let mail_from_source = field(raw, COL_MAIL_FROM_SOURCE).to_string();
        let email = field(raw, COL_EMAIL).to_string();
        let professional_email = field(raw, COL_PROFESSIONAL_EMAIL).to_string();
        let valid_email = email::select_email([
            mail_from_source.as_str(),
            email.as_str(),
            professional_email.as_str(),
        ]);

        let phone = phone::clean_phone(field(raw, COL_PHONE));
        let phone_from_source = phone::clean_phone(field(raw, COL_PHONE_FROM_SOURCE));
        let combined_phone = phone::combine_phones(&phone, &phone_from_source);

        let location = field(raw, COL_LOCATION).to_string();
        let parts = self.location.resolve(&location).await;

        let description = sanitize::sanitize(field(raw, COL_DESCRIPTION));
        let language = language::detect_language(&description);

        NormalizedRow {
            nro,
            first_name: sanitize::sanitize(field(raw, COL_FIRST_NAME)),
            last_name: sanitize::sanitize(field(raw, COL_LAST_NAME)),
            full_name: sanitize::sanitize(field(raw, COL_FULL_NAME)),
            profile_url: field(raw, COL_PROFILE_URL).to_string(),
            mail_from_source,
            email,
            professional_email,
            valid_email,
            phone,
            phone_from_source,
            combined_phone,
            location,
            city: parts.city,
            state: parts.state,
            country: parts.country,
            postal_code: parts.postal_code,
            company: sanitize::sanitize(field(raw, COL_COMPANY)),
            job_title: sanitize::sanitize(field(raw, COL_JOB_TITLE)),
            description,
            log: log_id(timestamp, nro),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{INVALID_EMAIL_SENTINEL, UNKNOWN};

    fn raw(entries: &[(&str, &str)]) -> RawRow {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn normalizes_a_full_row() {
        let normalizer = RowNormalizer::new(LocationResolver::Offline);
        let row = raw(&[
            (COL_FIRST_NAME, "JosÃ©"),
            (COL_LAST_NAME, "Pérez"),
            (COL_MAIL_FROM_SOURCE, "bad@"),
            (COL_EMAIL, "jose@example.com"),
            (COL_PHONE, "+51 (1) 555-0134"),
            (COL_PHONE_FROM_SOURCE, "999"),
            (COL_LOCATION, "Lima, Lima, Peru"),
            (COL_DESCRIPTION, "Gerente de ventas con experiencia en tecnología y mercados."),
        ]);

        let out = normalizer.normalize(&row, 7, "20250101120000").await;
        assert_eq!(out.nro, 7);
        assert_eq!(out.first_name, "José");
        assert_eq!(out.valid_email, "jose@example.com");
        assert_eq!(out.phone, "+5115550134");
        assert_eq!(out.phone_from_source, "");
        assert_eq!(out.combined_phone, "+5115550134");
        assert_eq!(out.city, "Lima");
        assert_eq!(out.country, "Peru");
        assert_eq!(out.postal_code, UNKNOWN);
        assert_eq!(out.log, "20250101120000-7");
        assert_eq!(out.language, "es");
    }

    #[tokio::test]
    async fn empty_row_gets_sentinels_everywhere() {
        let normalizer = RowNormalizer::new(LocationResolver::Offline);
        let out = normalizer.normalize(&RawRow::new(), 1, "20250101120000").await;
        assert_eq!(out.valid_email, INVALID_EMAIL_SENTINEL);
        assert_eq!(out.combined_phone, "");
        assert_eq!(out.city, UNKNOWN);
        assert_eq!(out.language, "en");
        assert_eq!(out.log, "20250101120000-1");
    }

    #[tokio::test]
    async fn profile_url_is_never_sanitized() {
        let normalizer = RowNormalizer::new(LocationResolver::Offline);
        let row = raw(&[(COL_PROFILE_URL, "https://example.com/in/jose?ref=1")]);
        let out = normalizer.normalize(&row, 1, "t").await;
        assert_eq!(out.profile_url, "https://example.com/in/jose?ref=1");
    }
}
