use bytes::Bytes;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Extensions the picker suggests. Files outside this list are still sent.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mp3", "wav", "txt"];

#[derive(Error, Debug)]
pub enum FileSelectionError {
    #[error("Unable to find {}", path.display())]
    NotFound { path: PathBuf },
    #[error("{} is not a file", path.display())]
    NotAFile { path: PathBuf },
    #[error("Unable to read {}. {error:?}", path.display())]
    IoError {
        path: PathBuf,
        error: std::io::Error,
    },
}

/// A file chosen for upload, read fully into memory. Clones share the
/// buffer, so handing the file to a request does not copy its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub async fn read(path: &Path) -> Result<Self, FileSelectionError> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileSelectionError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(error) => {
                return Err(FileSelectionError::IoError {
                    path: path.to_path_buf(),
                    error,
                });
            }
        };
        if !metadata.is_file() {
            return Err(FileSelectionError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|error| FileSelectionError::IoError {
                path: path.to_path_buf(),
                error,
            })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());

        let file = Self {
            name,
            bytes: Bytes::from(bytes),
        };
        if !file.matches_accept_hint() {
            warn!(target: "user", "{} is not one of .{}; uploading anyway", file.name, ACCEPTED_EXTENSIONS.join(", ."));
        }
        Ok(file)
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }

    pub fn matches_accept_hint(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }

    pub fn mime_type(&self) -> String {
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .to_string()
    }
}
