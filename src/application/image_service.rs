// Dashboard image service - compose, rasterize, encode and store
use crate::application::composer::compose;
use crate::application::image_store::ImageStore;
use crate::domain::error::{InvalidModule, LayoutError};
use crate::domain::section::{module_file_name, DashboardRequest};
use crate::domain::style::RenderStyle;
use crate::infrastructure::rasterizer::{encode_jpeg, rasterize};
use chrono::Local;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashError {
    #[error(transparent)]
    InvalidModule(#[from] InvalidModule),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Storage(anyhow::Error),
}

impl DashError {
    /// Whether a storage failure was caused by a missing image.
    pub fn is_not_found(&self) -> bool {
        match self {
            DashError::Storage(e) => e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == io::ErrorKind::NotFound),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedImage {
    pub path: PathBuf,
    pub skipped: usize,
}

#[derive(Clone)]
pub struct DashImageService {
    style: Arc<RenderStyle>,
    store: Arc<dyn ImageStore>,
}

impl DashImageService {
    pub fn new(style: Arc<RenderStyle>, store: Arc<dyn ImageStore>) -> Self {
        Self { style, store }
    }

    pub async fn create(&self, request: &DashboardRequest) -> Result<CreatedImage, DashError> {
        let file_name = request.file_name()?;
        let composition = compose(request, &self.style, Local::now().naive_local())?;
        let image = rasterize(&composition.instructions, &self.style);
        let jpeg = encode_jpeg(&image, self.style.jpeg_quality)?;

        let path = self
            .store
            .save(&file_name, jpeg)
            .await
            .map_err(DashError::Storage)?;

        tracing::info!(
            module = %request.module,
            path = %path.display(),
            skipped = composition.skipped.len(),
            "wrote dashboard image"
        );
        Ok(CreatedImage {
            path,
            skipped: composition.skipped.len(),
        })
    }

    pub async fn delete(&self, module: &str) -> Result<(), DashError> {
        let file_name = module_file_name(module)?;
        self.store
            .delete(&file_name)
            .await
            .map_err(DashError::Storage)?;
        tracing::info!(module, "deleted dashboard image");
        Ok(())
    }
}
