// Record normalization pipeline: header reconciliation, column projection,
// identity assignment, per-field normalization, output projection.

pub mod headers;
pub mod identity;
pub mod normalize;
pub mod project;

use tracing::{info, instrument};

use crate::domain::NormalizedRow;
use identity::SequenceCounter;
use normalize::{LocationResolver, RowNormalizer};

/// Single-pass batch pipeline over an ordered set of raw rows.
///
/// The location resolver is the only collaborator with a suspension point;
/// everything else is pure per-field transformation.
pub struct Pipeline {
    normalizer: RowNormalizer,
}

impl Pipeline {
    pub fn new(location: LocationResolver) -> Self {
        Self {
            normalizer: RowNormalizer::new(location),
        }
    }

    /// Runs the full pipeline over one batch.
    ///
    /// `counter` carries the sequence baseline (already seeded from the
    /// destination) and `timestamp` is the run-scoped wall-clock string used
    /// for every log identifier. Rows are never filtered: the output has
    /// exactly one normalized row per input row, in order.
    #[instrument(skip_all, fields(rows = grid.len()))]
    pub async fn run(
        &self,
        raw_headers: &[String],
        grid: Vec<Vec<String>>,
        counter: &mut SequenceCounter,
        timestamp: &str,
    ) -> Vec<NormalizedRow> {
        let reconciled = headers::reconcile(raw_headers);
        let mut rows = project::build_rows(&reconciled, grid);
        project::project_columns(&mut rows);

        let mut normalized = Vec::with_capacity(rows.len());
        for row in &rows {
            let nro = counter.next();
            normalized.push(self.normalizer.normalize(row, nro, timestamp).await);
        }
        info!(rows = normalized.len(), "batch normalized");
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[tokio::test]
    async fn assigns_contiguous_nro_values_from_the_baseline() {
        let pipeline = Pipeline::new(LocationResolver::Offline);
        let mut counter = SequenceCounter::seeded(42);
        let out = pipeline
            .run(
                &headers(&["FirstName", "Email"]),
                grid(&[
                    &["Ana", "ana@example.com"],
                    &["Luis", "luis@example.com"],
                    &["Sol", "sol@example.com"],
                ]),
                &mut counter,
                "20250101120000",
            )
            .await;

        let nros: Vec<u64> = out.iter().map(|r| r.nro).collect();
        assert_eq!(nros, vec![43, 44, 45]);
        let logs: Vec<&str> = out.iter().map(|r| r.log.as_str()).collect();
        assert_eq!(
            logs,
            vec!["20250101120000-43", "20250101120000-44", "20250101120000-45"]
        );
    }

    #[tokio::test]
    async fn duplicate_headers_are_reconciled_before_projection() {
        let pipeline = Pipeline::new(LocationResolver::Offline);
        let mut counter = SequenceCounter::seeded(0);
        // Second "Email" column is renamed Email_1, so the first one wins
        let out = pipeline
            .run(
                &headers(&["Email", "Email"]),
                grid(&[&["first@example.com", "second@example.com"]]),
                &mut counter,
                "t",
            )
            .await;
        assert_eq!(out[0].valid_email, "first@example.com");
    }

    #[tokio::test]
    async fn missing_name_rows_are_retained_with_defaults() {
        let pipeline = Pipeline::new(LocationResolver::Offline);
        let mut counter = SequenceCounter::seeded(0);
        let out = pipeline
            .run(
                &headers(&["FirstName", "Last Name", "Location"]),
                grid(&[
                    &["Ana", "Quispe", "Lima, Lima, Peru"],
                    &["Luis", "", ""],
                    &["Sol"],
                ]),
                &mut counter,
                "t",
            )
            .await;

        assert_eq!(out.len(), 3);
        assert_eq!(out[1].last_name, "");
        assert_eq!(out[2].last_name, "");
        assert_eq!(out[0].city, "Lima");
        assert_eq!(out[1].city, UNKNOWN);
    }
}
