// Storage trait for finished dashboard images
use async_trait::async_trait;
use std::path::PathBuf;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write an encoded image, replacing any previous one of the same name.
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<PathBuf>;

    /// Remove a previously written image. Fails if it does not exist.
    async fn delete(&self, file_name: &str) -> anyhow::Result<()>;
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    /// In-memory store for service and handler tests.
    #[derive(Default)]
    pub struct MemoryImageStore {
        pub images: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl ImageStore for MemoryImageStore {
        async fn save(&self, file_name: &str, bytes: Vec<u8>) -> anyhow::Result<PathBuf> {
            self.images
                .lock()
                .unwrap()
                .insert(file_name.to_string(), bytes);
            Ok(PathBuf::from(file_name))
        }

        async fn delete(&self, file_name: &str) -> anyhow::Result<()> {
            match self.images.lock().unwrap().remove(file_name) {
                Some(_) => Ok(()),
                None => Err(io::Error::new(io::ErrorKind::NotFound, file_name.to_string()).into()),
            }
        }
    }
}
