use crate::domain::{NormalizedRow, RawRow, REQUIRED_INPUT_COLUMNS};

/// Zips reconciled headers with a grid of cells into raw rows.
///
/// Short rows pad with empty strings; cells beyond the header count are
/// dropped.
pub fn build_rows(headers: &[String], grid: Vec<Vec<String>>) -> Vec<RawRow> {
    grid.into_iter()
        .map(|cells| {
            let mut row = RawRow::with_capacity(headers.len());
            for (i, header) in headers.iter().enumerate() {
                let value = cells.get(i).cloned().unwrap_or_default();
                row.insert(header.clone(), value);
            }
            row
        })
        .collect()
}

/// Guarantees every required canonical input column exists on every row.
///
/// Purely additive: missing columns default to the empty string, and columns
/// outside the canonical set are left untouched. Rows are never filtered
/// here, including rows with missing names; schema narrowing happens in
/// [`project_output`].
pub fn project_columns(rows: &mut [RawRow]) {
    for row in rows.iter_mut() {
        for column in REQUIRED_INPUT_COLUMNS {
            row.entry((*column).to_string()).or_default();
        }
    }
}

/// Narrows normalized rows to the fixed output schema, in column order.
pub fn project_output(rows: &[NormalizedRow]) -> Vec<Vec<String>> {
    rows.iter().map(NormalizedRow::to_cells).collect()
}
