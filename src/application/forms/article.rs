// src/application/forms/article.rs
use super::ValidationErrors;
use crate::domain::article::{
    ArticleBody, ArticleTitle, image::split_original_name, value_objects::TITLE_MAX_CHARS,
};
use bytes::Bytes;

/// Content types the image field accepts, with the extension each one is
/// stored under when the uploaded name does not carry a usable one.
pub const ACCEPTED_IMAGE_TYPES: &[(&str, &[&str])] = &[
    ("image/png", &["png"]),
    ("image/jpeg", &["jpg", "jpeg"]),
    ("image/gif", &["gif"]),
    ("image/webp", &["webp"]),
];

const DEFAULT_MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Copy)]
pub struct FormRules {
    pub max_image_bytes: usize,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_name: String,
    pub content_type: Option<String>,
    pub contents: Bytes,
}

/// Raw values bound from a submitted article form.
#[derive(Debug, Clone, Default)]
pub struct ArticleFormInput {
    pub title: String,
    pub content: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone)]
pub struct AcceptedImage {
    pub original_name: String,
    pub extension: String,
    pub contents: Bytes,
}

impl AcceptedImage {
    pub fn stem(&self) -> &str {
        split_original_name(&self.original_name).0
    }
}

#[derive(Debug, Clone)]
pub struct ValidArticleForm {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image: Option<AcceptedImage>,
}

impl ArticleFormInput {
    pub fn validate(self, rules: &FormRules) -> Result<ValidArticleForm, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = if self.title.trim().is_empty() {
            errors.add("title", "Le titre est obligatoire.");
            None
        } else if self.title.trim().chars().count() > TITLE_MAX_CHARS {
            errors.add(
                "title",
                format!("Le titre ne peut pas dépasser {TITLE_MAX_CHARS} caractères."),
            );
            None
        } else {
            ArticleTitle::new(self.title).ok()
        };

        let body = if self.content.trim().is_empty() {
            errors.add("content", "Le contenu est obligatoire.");
            None
        } else {
            ArticleBody::new(self.content).ok()
        };

        let image = match self.image {
            Some(upload) if !upload.contents.is_empty() => {
                match accept_image(upload, rules) {
                    Ok(image) => Some(image),
                    Err(message) => {
                        errors.add("image", message);
                        None
                    }
                }
            }
            _ => None,
        };

        match (title, body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(ValidArticleForm { title, body, image }),
            _ => Err(errors),
        }
    }
}

fn accept_image(upload: ImageUpload, rules: &FormRules) -> Result<AcceptedImage, String> {
    if upload.contents.len() > rules.max_image_bytes {
        return Err(format!(
            "L'image ne peut pas dépasser {} Kio.",
            rules.max_image_bytes / 1024
        ));
    }

    let original_extension = split_original_name(&upload.original_name)
        .1
        .map(str::to_ascii_lowercase);

    let declared = upload
        .content_type
        .as_deref()
        .map(|ct| ct.trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    let extensions = match declared {
        Some(content_type) => ACCEPTED_IMAGE_TYPES
            .iter()
            .find(|(accepted, _)| *accepted == content_type)
            .map(|(_, extensions)| *extensions),
        None => ACCEPTED_IMAGE_TYPES
            .iter()
            .find(|(_, extensions)| {
                original_extension
                    .as_deref()
                    .is_some_and(|ext| extensions.contains(&ext))
            })
            .map(|(_, extensions)| *extensions),
    }
    .ok_or_else(|| "Le fichier doit être une image PNG, JPEG, GIF ou WebP.".to_string())?;

    let extension = match original_extension {
        Some(ext) if extensions.contains(&ext.as_str()) => ext,
        _ => extensions[0].to_string(),
    };

    Ok(AcceptedImage {
        original_name: upload.original_name,
        extension,
        contents: upload.contents,
    })
}
