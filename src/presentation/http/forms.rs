// src/presentation/http/forms.rs
use crate::application::forms::{ArticleFormInput, ImageUpload};
use crate::presentation::http::error::{HttpError, HttpResult};
use axum::extract::{
    Multipart,
    multipart::{MultipartError, MultipartRejection},
};

fn multipart_error(err: MultipartError) -> HttpError {
    HttpError::new(err.status(), err.body_text())
}

/// Maps a body that is not `multipart/form-data` once the caller has been
/// authorised.
pub fn multipart_rejection(rejection: MultipartRejection) -> HttpError {
    HttpError::new(rejection.status(), rejection.body_text())
}

/// Binds a `multipart/form-data` article form. Unknown fields are skipped and
/// an empty file input counts as no upload.
pub async fn bind_article_form(mut multipart: Multipart) -> HttpResult<ArticleFormInput> {
    let mut input = ArticleFormInput::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => input.title = field.text().await.map_err(multipart_error)?,
            "content" => input.content = field.text().await.map_err(multipart_error)?,
            "image" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let contents = field.bytes().await.map_err(multipart_error)?;
                if !contents.is_empty() {
                    input.image = Some(ImageUpload {
                        original_name,
                        content_type,
                        contents,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(input)
}
