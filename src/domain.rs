use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A raw row as read from the source: reconciled column name -> cell value.
pub type RawRow = HashMap<String, String>;

/// Sentinel for location parts that could not be derived.
pub const UNKNOWN: &str = "Unknown";

/// Sentinel address assigned when no email candidate validates.
pub const INVALID_EMAIL_SENTINEL: &str = "invalid@loriginal.org";

pub const COL_FIRST_NAME: &str = "FirstName";
pub const COL_LAST_NAME: &str = "Last Name";
pub const COL_FULL_NAME: &str = "Full Name";
pub const COL_PROFILE_URL: &str = "Profile Url";
pub const COL_MAIL_FROM_SOURCE: &str = "Mail From Source";
pub const COL_EMAIL: &str = "Email";
pub const COL_PROFESSIONAL_EMAIL: &str = "Professional Email";
pub const COL_PHONE: &str = "Phone";
pub const COL_PHONE_FROM_SOURCE: &str = "Phone From Source";
pub const COL_LOCATION: &str = "Location";
pub const COL_COMPANY: &str = "Company";
pub const COL_JOB_TITLE: &str = "Job Title";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_NRO: &str = "Nro";

/// Input columns the pipeline understands. The column projector guarantees
/// each of these exists on every row before normalization starts.
pub const REQUIRED_INPUT_COLUMNS: &[&str] = &[
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_FULL_NAME,
    COL_PROFILE_URL,
    COL_MAIL_FROM_SOURCE,
    COL_EMAIL,
    COL_PROFESSIONAL_EMAIL,
    COL_PHONE,
    COL_PHONE_FROM_SOURCE,
    COL_LOCATION,
    COL_COMPANY,
    COL_JOB_TITLE,
    COL_DESCRIPTION,
];

/// Fixed output schema, in column order.
pub const OUTPUT_HEADERS: &[&str] = &[
    COL_NRO,
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_FULL_NAME,
    COL_PROFILE_URL,
    COL_MAIL_FROM_SOURCE,
    COL_EMAIL,
    COL_PROFESSIONAL_EMAIL,
    "Valid Email",
    COL_PHONE,
    COL_PHONE_FROM_SOURCE,
    "Combined Phone",
    "City",
    "State",
    "Country",
    "Postal Code",
    COL_COMPANY,
    COL_JOB_TITLE,
    COL_DESCRIPTION,
    "log",
    "language",
];

/// Decomposed location. Every part is always present; parts that could not
/// be derived hold the [`UNKNOWN`] sentinel, never an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationParts {
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
}

impl LocationParts {
    pub fn unknown() -> Self {
        Self {
            city: UNKNOWN.to_string(),
            state: UNKNOWN.to_string(),
            country: UNKNOWN.to_string(),
            postal_code: UNKNOWN.to_string(),
        }
    }
}

/// A fully normalized contact row. Every canonical field is always present;
/// fields that could not be derived hold their documented sentinel or the
/// empty string, never an absent value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub nro: u64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub profile_url: String,
    pub mail_from_source: String,
    pub email: String,
    pub professional_email: String,
    pub valid_email: String,
    pub phone: String,
    pub phone_from_source: String,
    pub combined_phone: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub company: String,
    pub job_title: String,
    pub description: String,
    pub log: String,
    pub language: String,
}

impl NormalizedRow {
    /// Cells in [`OUTPUT_HEADERS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.nro.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.full_name.clone(),
            self.profile_url.clone(),
            self.mail_from_source.clone(),
            self.email.clone(),
            self.professional_email.clone(),
            self.valid_email.clone(),
            self.phone.clone(),
            self.phone_from_source.clone(),
            self.combined_phone.clone(),
            self.city.clone(),
            self.state.clone(),
            self.country.clone(),
            self.postal_code.clone(),
            self.company.clone(),
            self.job_title.clone(),
            self.description.clone(),
            self.log.clone(),
            self.language.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_line_up_with_output_headers() {
        let row = NormalizedRow::default();
        assert_eq!(row.to_cells().len(), OUTPUT_HEADERS.len());
    }

    #[test]
    fn unknown_parts_use_the_sentinel() {
        let parts = LocationParts::unknown();
        assert_eq!(parts.city, UNKNOWN);
        assert_eq!(parts.postal_code, UNKNOWN);
    }
}
