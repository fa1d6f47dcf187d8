use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::app::ports::{RowSinkPort, RowSourcePort};

/// Filesystem adapter for the grid ports: the opaque handle is a path to a
/// CSV file whose first record is the header row.
pub struct FsGridAdapter;

impl FsGridAdapter {
    fn read_grid(handle: &str) -> Result<Vec<Vec<String>>, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(handle)
            .map_err(|e| format!("open '{handle}': {e}"))?;
        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| format!("read '{handle}': {e}"))?;
            grid.push(record.iter().map(|cell| cell.to_string()).collect());
        }
        Ok(grid)
    }
}

#[async_trait]
impl RowSourcePort for FsGridAdapter {
    async fn read_headers(&self, handle: &str) -> Result<Vec<String>, String> {
        let grid = Self::read_grid(handle)?;
        Ok(grid.into_iter().next().unwrap_or_default())
    }

    async fn read_rows(&self, handle: &str) -> Result<Vec<Vec<String>>, String> {
        let grid = Self::read_grid(handle)?;
        Ok(grid.into_iter().skip(1).collect())
    }
}

#[async_trait]
impl RowSinkPort for FsGridAdapter {
    async fn clear(&self, handle: &str) -> Result<(), String> {
        std::fs::write(handle, b"").map_err(|e| format!("clear '{handle}': {e}"))
    }

    async fn write(
        &self,
        handle: &str,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(handle)
            .map_err(|e| format!("open '{handle}': {e}"))?;
        writer
            .write_record(headers)
            .map_err(|e| format!("write '{handle}': {e}"))?;
        for row in rows {
            writer
                .write_record(row)
                .map_err(|e| format!("write '{handle}': {e}"))?;
        }
        writer.flush().map_err(|e| format!("flush '{handle}': {e}"))
    }

    async fn read_records(&self, handle: &str) -> Result<Vec<HashMap<String, String>>, String> {
        // A sink that does not exist yet simply has no prior records
        if !Path::new(handle).exists() {
            return Ok(Vec::new());
        }
        let mut grid = Self::read_grid(handle)?.into_iter();
        let headers = match grid.next() {
            Some(headers) => headers,
            None => return Ok(Vec::new()),
        };
        Ok(grid
            .map(|cells| {
                headers
                    .iter()
                    .cloned()
                    .zip(cells.into_iter().chain(std::iter::repeat(String::new())))
                    .collect()
            })
            .collect())
    }
}
