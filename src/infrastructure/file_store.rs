// Image store backed by the configured destination directory
use crate::application::image_store::ImageStore;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileImageStore {
    dest: PathBuf,
}

impl FileImageStore {
    pub fn new(dest: PathBuf) -> Self {
        Self { dest }
    }

    /// Resolves a file name inside `dest`. Anything other than a single
    /// plain segment is refused.
    fn path_for(&self, file_name: &str) -> Result<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dest.join(file_name)),
            _ => bail!(
                "Refusing file name {:?} outside {}",
                file_name,
                self.dest.display()
            ),
        }
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> Result<PathBuf> {
        let path = self.path_for(file_name)?;
        tokio::fs::create_dir_all(&self.dest)
            .await
            .with_context(|| format!("Failed to create {}", self.dest.display()))?;

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    async fn delete(&self, file_name: &str) -> Result<()> {
        let path = self.path_for(file_name)?;
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("Failed to delete {}", path.display()))
    }
}
