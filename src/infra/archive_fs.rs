use std::path::PathBuf;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::app::ports::ArchivePort;

/// Filesystem archive: the folder identifier is a directory path, the file
/// identifier is the sha256 of the uploaded bytes.
pub struct FsArchiveAdapter;

#[async_trait]
impl ArchivePort for FsArchiveAdapter {
    async fn upload(&self, name: &str, bytes: Vec<u8>, folder: &str) -> Result<String, String> {
        let dir = PathBuf::from(folder);
        std::fs::create_dir_all(&dir).map_err(|e| format!("create '{folder}': {e}"))?;

        let digest = hex::encode(Sha256::digest(&bytes));
        let path = dir.join(name);
        std::fs::write(&path, &bytes).map_err(|e| format!("write '{}': {e}", path.display()))?;
        info!(file = %path.display(), id = %digest, "archived export");
        Ok(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn upload_writes_the_file_and_returns_a_content_id() {
        let dir = tempdir().unwrap();
        let folder = dir.path().to_str().unwrap();
        let id = FsArchiveAdapter
            .upload("cleaned_data_x.csv", b"Nro,Email\n".to_vec(), folder)
            .await
            .unwrap();

        assert_eq!(id.len(), 64);
        let stored = std::fs::read(dir.path().join("cleaned_data_x.csv")).unwrap();
        assert_eq!(stored, b"Nro,Email\n");
    }

    #[tokio::test]
    async fn identical_bytes_get_identical_ids() {
        let dir = tempdir().unwrap();
        let folder = dir.path().to_str().unwrap();
        let a = FsArchiveAdapter
            .upload("a.csv", b"same".to_vec(), folder)
            .await
            .unwrap();
        let b = FsArchiveAdapter
            .upload("b.csv", b"same".to_vec(), folder)
            .await
            .unwrap();
        assert_eq!(a, b);
    }
}
