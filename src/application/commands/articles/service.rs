// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        forms::FormRules,
        ports::{
            storage::ImageStorage,
            time::Clock,
            util::{SlugGenerator, TokenGenerator},
        },
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) images: Arc<dyn ImageStorage>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) tokens: Arc<dyn TokenGenerator>,
    pub(super) rules: FormRules,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        images: Arc<dyn ImageStorage>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        tokens: Arc<dyn TokenGenerator>,
        rules: FormRules,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            images,
            clock,
            slugger,
            tokens,
            rules,
        }
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }
}
