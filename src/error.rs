use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubberError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Row source error: {0}")]
    Source(String),

    #[error("Row sink error: {0}")]
    Sink(String),

    #[error("Archive error: {0}")]
    Archive(String),
}

pub type Result<T> = std::result::Result<T, ScrubberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_errors_name_their_seam() {
        let source = ScrubberError::Source("unreachable".to_string());
        assert_eq!(source.to_string(), "Row source error: unreachable");

        let sink = ScrubberError::Sink("write denied".to_string());
        assert_eq!(sink.to_string(), "Row sink error: write denied");

        let archive = ScrubberError::Archive("folder missing".to_string());
        assert_eq!(archive.to_string(), "Archive error: folder missing");

        let config = ScrubberError::Config("missing required environment variable: PORT".to_string());
        assert!(config.to_string().starts_with("Configuration error:"));
    }
}
