//! Local file taxonomy source
//!
//! Reads a taxonomy CSV from disk. Useful offline, for pinning a known
//! taxonomy version, and in tests.

use async_trait::async_trait;
use prospie_application::{TaxonomyFetchError, TaxonomySourcePort};
use std::path::PathBuf;
use tracing::debug;

/// Taxonomy source backed by a local CSV file
pub struct FileTaxonomySource {
    path: PathBuf,
}

impl FileTaxonomySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TaxonomySourcePort for FileTaxonomySource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_document(&self) -> Result<String, TaxonomyFetchError> {
        debug!("Reading taxonomy file {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TaxonomyFetchError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospie_application::TaxonomyService;
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ukcat.csv");
        fs::write(&path, "tag,Regular expression\nArts,arts\n").unwrap();

        let source = FileTaxonomySource::new(&path);
        let text = source.fetch_document().await.unwrap();
        assert!(text.starts_with("tag,"));
        assert_eq!(source.location(), path.display().to_string());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = FileTaxonomySource::new(dir.path().join("absent.csv"));
        let err = source.fetch_document().await.unwrap_err();
        assert!(matches!(err, TaxonomyFetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_service_over_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ukcat.csv");
        fs::write(
            &path,
            "tag,Regular expression,Exclude regular expression\n\
             Education,school,pre-school\n\
             short row\n\
             Arts,\"theatre|dance, music\",\n",
        )
        .unwrap();

        let service = TaxonomyService::new(Arc::new(FileTaxonomySource::new(&path)));
        let rules = service.load().await;
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[1].include_pattern, "theatre|dance, music");
    }
}
