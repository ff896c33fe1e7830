// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::articles::ArticleCommandService,
        dto::AuthenticatedUser,
        forms::FormRules,
        ports::{
            security::CredentialVerifier,
            storage::ImageStorage,
            time::Clock,
            util::{SlugGenerator, TokenGenerator},
        },
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    credential_verifier: Arc<dyn CredentialVerifier>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        image_storage: Arc<dyn ImageStorage>,
        credential_verifier: Arc<dyn CredentialVerifier>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        tokens: Arc<dyn TokenGenerator>,
        rules: FormRules,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&image_storage),
            Arc::clone(&clock),
            Arc::clone(&slugger),
            Arc::clone(&tokens),
            rules,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        Self {
            article_commands,
            article_queries,
            credential_verifier,
        }
    }

    /// Resolves Basic credentials into the authenticated editor.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        self.credential_verifier.verify(username, password).await
    }
}
