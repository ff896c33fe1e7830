// src/application/commands/articles/access.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub(super) fn ensure_authenticated(
    actor: Option<&AuthenticatedUser>,
) -> ApplicationResult<&AuthenticatedUser> {
    actor.ok_or_else(|| ApplicationError::unauthorized("authentication required"))
}

/// Non-positive ids can never exist, so they report the same failure as a miss.
pub(super) fn parse_article_id(id: i64) -> ApplicationResult<ArticleId> {
    ArticleId::new(id).map_err(|_| ApplicationError::article_not_found(id))
}

impl ArticleCommandService {
    /// Gate run by the form pages before any lookup or body read.
    pub fn authorize(&self, actor: Option<&AuthenticatedUser>) -> ApplicationResult<()> {
        ensure_authenticated(actor).map(|_| ())
    }
}
