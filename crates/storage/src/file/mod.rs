use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::repository::{ExportLocation, ExportRepository, StorageError};

/// Writes exports to one plain-text file, truncating it each time.
#[derive(Clone, Debug)]
pub struct FileExportRepository {
    path: PathBuf,
}

impl FileExportRepository {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExportRepository for FileExportRepository {
    async fn write_export(&self, contents: &str) -> Result<ExportLocation, StorageError> {
        // `File::create` truncates; the handle closes on drop on every path.
        let mut file = File::create(&self.path).await?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "export written");
        Ok(ExportLocation::File(self.path.clone()))
    }
}
