// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

use super::error::HttpError;

/// Editor resolved from HTTP Basic credentials.
///
/// Missing or wrong credentials yield `None`; the article services decide
/// whether the operation needs an editor.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

impl MaybeAuthenticated {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        let Some(header) = parts.headers.typed_get::<Authorization<Basic>>() else {
            return Ok(Self(None));
        };

        match app_state
            .services
            .authenticate(header.username(), header.password())
            .await
        {
            Ok(user) => Ok(Self(Some(user))),
            Err(ApplicationError::Unauthorized(reason)) => {
                tracing::debug!(user = header.username(), %reason, "rejected credentials");
                Ok(Self(None))
            }
            Err(err) => Err(HttpError::from_error(err)),
        }
    }
}
