// src/infrastructure/storage.rs
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageStorage,
    },
    domain::article::ImageFilename,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Keeps uploaded images as plain files in one directory.
///
/// Contents are written to a hidden `.part` sibling first and renamed into
/// place, so a reader never sees a half-written image.
#[derive(Clone, Debug)]
pub struct FilesystemImageStorage {
    root: PathBuf,
}

impl FilesystemImageStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, filename: &ImageFilename) -> PathBuf {
        self.root.join(filename.as_str())
    }

    pub async fn ensure_root(&self) -> ApplicationResult<()> {
        fs::create_dir_all(&self.root).await.map_err(|err| {
            ApplicationError::storage(format!(
                "cannot create image directory {}: {err}",
                self.root.display()
            ))
        })
    }
}

#[async_trait]
impl ImageStorage for FilesystemImageStorage {
    async fn store(&self, filename: &ImageFilename, contents: Bytes) -> ApplicationResult<()> {
        self.ensure_root().await?;

        let target = self.path_for(filename);
        let staging = self.root.join(format!(".{}.part", filename.as_str()));

        if let Err(err) = fs::write(&staging, &contents).await {
            let _ = fs::remove_file(&staging).await;
            return Err(ApplicationError::storage(format!(
                "cannot write {}: {err}",
                staging.display()
            )));
        }

        if let Err(err) = fs::rename(&staging, &target).await {
            let _ = fs::remove_file(&staging).await;
            return Err(ApplicationError::storage(format!(
                "cannot move image to {}: {err}",
                target.display()
            )));
        }

        Ok(())
    }

    async fn remove(&self, filename: &ImageFilename) -> ApplicationResult<()> {
        match fs::remove_file(self.path_for(filename)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::storage(format!(
                "cannot remove image {filename}: {err}"
            ))),
        }
    }
}
