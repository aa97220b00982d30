use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{
    fs,
    io::{AsyncReadExt, AsyncWriteExt},
};
use tracing::{debug, warn};

use crate::{
    application::{error::ApplicationError, services::StorageService},
    domain::models::file::{FileData, FileMetadata, StoredEntry},
    services::error::StorageError,
};

/// Stores every upload as a plain file directly under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorageService {
    base_path: PathBuf,
}

impl LocalStorageService {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve a storage name to a path inside the base directory. Names that
    /// could escape the directory are refused.
    fn path_for(&self, storage_name: &str) -> Result<PathBuf, StorageError> {
        if !is_bare_name(storage_name) {
            return Err(StorageError::InvalidName(storage_name.to_string()));
        }
        Ok(self.base_path.join(storage_name))
    }

    async fn write_new(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;
        file.write_all(content).await?;
        file.flush().await?;
        Ok(())
    }
}

/// A single path component: no separators, not `.` or `..`, no NUL.
pub fn is_bare_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn ensure_directory(&self) -> Result<(), ApplicationError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::Unavailable(format!(
                "failed to create {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let metadata = fs::metadata(&self.base_path)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if !metadata.is_dir() {
            return Err(StorageError::Unavailable(format!(
                "{} is not a directory",
                self.base_path.display()
            ))
            .into());
        }
        if metadata.permissions().readonly() {
            return Err(StorageError::Unavailable(format!(
                "{} is read-only",
                self.base_path.display()
            ))
            .into());
        }

        Ok(())
    }

    async fn upload(
        &self,
        storage_name: &str,
        file_data: &FileData,
    ) -> Result<FileMetadata, ApplicationError> {
        let path = self.path_for(storage_name)?;

        if let Err(e) = self.write_new(&path, &file_data.content).await {
            // Leave nothing half-written behind, but never touch a file that
            // already existed under this name.
            if e.kind() != std::io::ErrorKind::AlreadyExists {
                if let Err(cleanup) = fs::remove_file(&path).await {
                    debug!("No partial file to clean up at {}: {}", path.display(), cleanup);
                }
            }
            return Err(StorageError::from_io(storage_name, e).into());
        }

        Ok(FileMetadata {
            original_filename: file_data.filename.clone(),
            storage_name: storage_name.to_string(),
            size: file_data.size(),
            mime_type: file_data.mime_type.clone(),
            path,
        })
    }

    async fn download(&self, storage_name: &str) -> Result<Vec<u8>, ApplicationError> {
        let path = self.path_for(storage_name)?;

        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| StorageError::from_io(storage_name, e))?;
        if !metadata.is_file() {
            return Err(StorageError::NotFound(storage_name.to_string()).into());
        }

        let content = fs::read(&path)
            .await
            .map_err(|e| StorageError::from_io(storage_name, e))?;
        Ok(content)
    }

    async fn read_prefix(
        &self,
        storage_name: &str,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ApplicationError> {
        let path = self.path_for(storage_name)?;
        let file = fs::File::open(&path)
            .await
            .map_err(|e| StorageError::from_io(storage_name, e))?;

        let mut buffer = Vec::with_capacity(max_bytes);
        file.take(max_bytes as u64)
            .read_to_end(&mut buffer)
            .await
            .map_err(|e| StorageError::from_io(storage_name, e))?;
        Ok(buffer)
    }

    async fn delete(&self, storage_name: &str) -> Result<(), ApplicationError> {
        let path = self.path_for(storage_name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| StorageError::from_io(storage_name, e))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<StoredEntry>, ApplicationError> {
        let mut dir = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(StorageError::from)? {
            // Files can disappear between enumeration and stat.
            let metadata = match entry.metadata().await {
                Ok(m) => m,
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                warn!("Skipping non UTF-8 file name in {}", self.base_path.display());
                continue;
            };

            entries.push(StoredEntry {
                name,
                size: metadata.len(),
            });
        }

        Ok(entries)
    }
}
