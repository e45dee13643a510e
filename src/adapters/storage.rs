use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads saved images from the local disk. Relative event paths resolve
/// against `base_path`; absolute ones are used as-is.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(Path::new(path))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    type Reader = std::fs::File;

    async fn open_file(&self, path: &str) -> Result<std::fs::File> {
        let full_path = self.resolve(path);
        let file = tokio::fs::File::open(&full_path).await?;
        Ok(file.into_std().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::UploadError;
    use std::io::Read;
    use tempfile::TempDir;

    fn read_all(mut file: std::fs::File) -> Vec<u8> {
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).unwrap();
        buf
    }

    #[tokio::test]
    async fn test_reads_relative_and_absolute_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("out")).unwrap();
        let image = dir.path().join("out/00001.png");
        std::fs::write(&image, b"\x89PNG").unwrap();

        let storage = LocalStorage::new(dir.path());
        let file = storage.open_file("out/00001.png").await.unwrap();
        assert_eq!(read_all(file), b"\x89PNG");

        let absolute = image.to_str().unwrap();
        let storage = LocalStorage::default();
        let file = storage.open_file(absolute).await.unwrap();
        assert_eq!(read_all(file), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_missing_file_is_file_error() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.open_file("nope.png").await.unwrap_err();
        assert!(matches!(err, UploadError::FileError(_)));
    }
}
