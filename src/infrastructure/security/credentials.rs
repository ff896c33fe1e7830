// src/infrastructure/security/credentials.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::{security::{CredentialVerifier, PasswordHasher}, time::Clock},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Accepts exactly one configured editor account.
pub struct ConfiguredCredentialVerifier {
    username: String,
    password_hash: String,
    hasher: Arc<dyn PasswordHasher>,
    clock: Arc<dyn Clock>,
}

impl ConfiguredCredentialVerifier {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        hasher: Arc<dyn PasswordHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            hasher,
            clock,
        }
    }
}

#[async_trait]
impl CredentialVerifier for ConfiguredCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> ApplicationResult<AuthenticatedUser> {
        // Hash verification runs for every attempt, known username or not.
        let password_ok = self.hasher.verify(password, &self.password_hash).await;
        if username != self.username {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }
        password_ok?;

        Ok(AuthenticatedUser {
            username: self.username.clone(),
            authenticated_at: self.clock.now(),
        })
    }
}
