// tests/support/mocks/storage.rs
use article_manager::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ImageStorage,
};
use article_manager::domain::article::ImageFilename;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps stored images in memory and remembers what was removed.
#[derive(Default)]
pub struct RecordingImageStorage {
    files: Mutex<BTreeMap<String, Bytes>>,
    removed: Mutex<Vec<String>>,
    fail_store: AtomicBool,
}

impl RecordingImageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(name: &str) -> Self {
        let storage = Self::new();
        storage
            .files
            .lock()
            .unwrap()
            .insert(name.to_string(), Bytes::from_static(b"old"));
        storage
    }

    pub fn fail_store(&self) {
        self.fail_store.store(true, Ordering::SeqCst);
    }

    pub fn stored_names(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn contents(&self, name: &str) -> Option<Bytes> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn removed(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingImageStorage {
    async fn store(&self, filename: &ImageFilename, contents: Bytes) -> ApplicationResult<()> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(ApplicationError::storage("disk full"));
        }
        self.files
            .lock()
            .unwrap()
            .insert(filename.as_str().to_string(), contents);
        Ok(())
    }

    async fn remove(&self, filename: &ImageFilename) -> ApplicationResult<()> {
        self.files.lock().unwrap().remove(filename.as_str());
        self.removed
            .lock()
            .unwrap()
            .push(filename.as_str().to_string());
        Ok(())
    }
}
