use std::collections::HashMap;

use async_trait::async_trait;

/// Reads a 2-D grid of strings addressed by an opaque handle.
#[async_trait]
pub trait RowSourcePort: Send + Sync {
    async fn read_headers(&self, handle: &str) -> Result<Vec<String>, String>;
    async fn read_rows(&self, handle: &str) -> Result<Vec<Vec<String>>, String>;
}

/// Writes a 2-D grid of strings addressed by an opaque handle.
#[async_trait]
pub trait RowSinkPort: Send + Sync {
    async fn clear(&self, handle: &str) -> Result<(), String>;
    async fn write(
        &self,
        handle: &str,
        headers: &[String],
        rows: &[Vec<String>],
    ) -> Result<(), String>;
    /// Existing rows as header->value records, used to recover the prior
    /// maximum sequence number.
    async fn read_records(&self, handle: &str) -> Result<Vec<HashMap<String, String>>, String>;
}

/// Accepts a file for archival and returns an opaque file identifier.
#[async_trait]
pub trait ArchivePort: Send + Sync {
    async fn upload(&self, name: &str, bytes: Vec<u8>, folder: &str) -> Result<String, String>;
}

/// Structured address returned by a geocoding lookup.
#[derive(Clone, Debug, Default)]
pub struct StructuredAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
}

/// Free-text geocoding lookup. Implementations bound each call with a
/// timeout; a timeout surfaces as an `Err`, which the caller absorbs.
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Option<StructuredAddress>, String>;
}
