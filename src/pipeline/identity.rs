use std::collections::HashMap;

use crate::domain::COL_NRO;

/// The run's source of unique `Nro` values.
///
/// Seeded once at pipeline start, advanced once per row. Seeding from an
/// existing destination makes repeated runs append without colliding; the
/// counter itself is never persisted beyond the run.
#[derive(Debug, Clone)]
pub struct SequenceCounter {
    last: u64,
}

impl SequenceCounter {
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    /// Recovers the baseline from records already present in the destination:
    /// the maximum numeric `Nro`, or 0 when there are no rows or no numeric
    /// `Nro` column.
    pub fn from_existing(records: &[HashMap<String, String>]) -> Self {
        let last = records
            .iter()
            .filter_map(|record| record.get(COL_NRO))
            .filter_map(|value| value.trim().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// Derived per-row log identifier: `"<run timestamp>-<Nro>"`.
pub fn log_id(timestamp: &str, nro: u64) -> String {
    format!("{timestamp}-{nro}")
}
