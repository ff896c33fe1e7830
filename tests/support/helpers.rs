// tests/support/helpers.rs
use super::mocks::{
    EDITOR_PASSWORD, EDITOR_USERNAME, FixedClock, InMemoryArticleRepo, RecordingImageStorage,
    SequenceTokens, StaticCredentialVerifier,
};
use article_manager::application::{
    forms::{FormRules, ImageUpload},
    services::ApplicationServices,
};
use article_manager::infrastructure::util::DefaultSlugGenerator;
use article_manager::presentation::http::{routes::build_router, state::HttpState, views::Views};
use axum::{Router, body::Body, http::Response};
use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use std::sync::Arc;
use tempfile::TempDir;

pub const BOUNDARY: &str = "article-form-boundary";

pub fn build_services(
    repo: Arc<InMemoryArticleRepo>,
    storage: Arc<RecordingImageStorage>,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        repo.clone(),
        repo,
        storage,
        Arc::new(StaticCredentialVerifier),
        Arc::new(FixedClock),
        Arc::new(DefaultSlugGenerator),
        Arc::new(SequenceTokens::default()),
        FormRules::default(),
    ))
}

/// Router wired to in-memory fakes. The returned directory backs the static
/// image route and must outlive the router.
pub fn make_test_router(
    repo: Arc<InMemoryArticleRepo>,
    storage: Arc<RecordingImageStorage>,
) -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = HttpState {
        services: build_services(repo, storage),
        views: Arc::new(Views::new().unwrap()),
    };
    (build_router(state, dir.path()), dir)
}

pub fn editor_basic_auth() -> String {
    basic_auth(EDITOR_USERNAME, EDITOR_PASSWORD)
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

pub fn png_upload(name: &str) -> ImageUpload {
    ImageUpload {
        original_name: name.to_string(),
        content_type: Some("image/png".into()),
        contents: Bytes::from_static(b"\x89PNG\r\n\x1a\nfake"),
    }
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Encodes an article form as `multipart/form-data`.
pub fn multipart_body(title: &str, content: &str, image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in [("title", title), ("content", content)] {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn read_body(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
