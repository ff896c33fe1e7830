// tests/support/mocks/security.rs
use article_manager::application::{
    ApplicationResult, dto::AuthenticatedUser, error::ApplicationError,
    ports::security::CredentialVerifier,
};
use async_trait::async_trait;

pub const EDITOR_USERNAME: &str = "editor";
pub const EDITOR_PASSWORD: &str = "secret";

pub fn editor() -> AuthenticatedUser {
    AuthenticatedUser {
        username: EDITOR_USERNAME.into(),
        authenticated_at: super::time::fixed_now(),
    }
}

/// Accepts only `editor` / `secret`, without hashing.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentialVerifier;

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> ApplicationResult<AuthenticatedUser> {
        if username == EDITOR_USERNAME && password == EDITOR_PASSWORD {
            Ok(editor())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
