// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, system};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, extract::DefaultBodyLimit, routing::get};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub const LIST_PATH: &str = "/article/liste";
pub const IMAGE_ROUTE: &str = "/uploads/images";

/// Headroom above the image limit for the text fields and multipart framing.
const FORM_OVERHEAD_BYTES: usize = 256 * 1024;

pub fn build_router(state: HttpState, image_dir: impl AsRef<Path>) -> Router {
    let body_limit = state
        .services
        .article_commands
        .rules()
        .max_image_bytes
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(system::health))
        .route("/article", get(articles::index))
        .route(
            "/article/creer",
            get(articles::create_form).post(articles::create_article),
        )
        .route(
            LIST_PATH,
            get(articles::list_articles).post(articles::list_articles),
        )
        .route(
            "/article/update/{id}",
            get(articles::update_form).post(articles::update_article),
        )
        .route(
            "/article/delete/{id}",
            get(articles::delete_article).post(articles::delete_article),
        )
        .nest_service(IMAGE_ROUTE, ServeDir::new(image_dir.as_ref()))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
