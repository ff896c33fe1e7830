// src/application/ports/storage.rs
use crate::{application::ApplicationResult, domain::article::ImageFilename};
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Moves the uploaded contents into the image directory under `filename`.
    async fn store(&self, filename: &ImageFilename, contents: Bytes) -> ApplicationResult<()>;
    async fn remove(&self, filename: &ImageFilename) -> ApplicationResult<()>;
}
