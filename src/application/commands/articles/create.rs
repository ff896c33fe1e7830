// src/application/commands/articles/create.rs
use super::{ArticleCommandService, access::ensure_authenticated};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        forms::{ArticleFormInput, ImageUpload},
    },
    domain::article::NewArticle,
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub image: Option<ImageUpload>,
}

impl From<ArticleFormInput> for CreateArticleCommand {
    fn from(input: ArticleFormInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            image: input.image,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = ensure_authenticated(actor)?;

        let input = ArticleFormInput {
            title: command.title,
            content: command.content,
            image: command.image,
        };
        let form = input
            .validate(&self.rules)
            .map_err(ApplicationError::InvalidForm)?;

        let now = self.clock.now();
        let image = match form.image {
            Some(upload) => Some(self.store_image(upload).await?),
            None => None,
        };

        let new_article = NewArticle {
            title: form.title,
            body: form.body,
            image: image.clone(),
            created_at: now,
            updated_at: now,
        };

        let created = match self.write_repo.insert(new_article).await {
            Ok(article) => article,
            Err(err) => {
                if let Some(image) = &image {
                    self.discard_image(image).await;
                }
                return Err(err.into());
            }
        };

        tracing::info!(
            article_id = %created.id,
            user = %actor.username,
            has_image = created.image.is_some(),
            "article created"
        );
        Ok(created.into())
    }
}
