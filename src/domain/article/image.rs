// src/domain/article/image.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const FALLBACK_STEM: &str = "image";

/// Name of an image file held by the image storage.
///
/// Stored names are always a single path component, so they can be joined to
/// the storage directory without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFilename(String);

impl ImageFilename {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("image filename cannot be empty"));
        }
        if value.starts_with('.') || value.contains(['/', '\\']) || value.contains("..") {
            return Err(DomainError::validation(format!(
                "invalid image filename: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Builds `{slug}-{token}.{extension}`.
    ///
    /// `slug` is the already slugified stem of the uploaded name. An empty slug
    /// falls back to `image`, and a missing extension drops the dot.
    pub fn derive(slug: &str, token: &str, extension: Option<&str>) -> DomainResult<Self> {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::validation("upload token must be alphanumeric"));
        }

        let stem = if slug.is_empty() { FALLBACK_STEM } else { slug };
        let extension = extension
            .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        let name = match extension {
            Some(ext) => format!("{stem}-{token}.{ext}"),
            None => format!("{stem}-{token}"),
        };
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits an uploaded file name into its stem and extension.
///
/// Only the last path component is considered; browsers may send full paths.
pub fn split_original_name(original: &str) -> (&str, Option<&str>) {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);
    match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (base, None),
    }
}
