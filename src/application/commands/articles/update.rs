// src/application/commands/articles/update.rs
use super::{
    ArticleCommandService,
    access::{ensure_authenticated, parse_article_id},
};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        forms::{ArticleFormInput, ImageUpload},
    },
    domain::article::ArticleUpdate,
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// A replacement image; `None` keeps the current one.
    pub image: Option<ImageUpload>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let actor = ensure_authenticated(actor)?;

        let UpdateArticleCommand {
            id,
            title,
            content,
            image,
        } = command;
        let article_id = parse_article_id(id)?;
        let mut article = self
            .read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(id))?;

        let form = ArticleFormInput {
            title,
            content,
            image,
        }
        .validate(&self.rules)
        .map_err(ApplicationError::InvalidForm)?;

        let now = self.clock.now();
        article.set_content(form.title, form.body, now);

        let mut stored = None;
        let mut replaced = None;
        if let Some(upload) = form.image {
            let filename = self.store_image(upload).await?;
            replaced = article.replace_image(filename.clone(), now);
            stored = Some(filename);
        }

        let updated = match self.write_repo.update(ArticleUpdate::from(&article)).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(filename) = &stored {
                    self.discard_image(filename).await;
                }
                return Err(err.into());
            }
        };

        if let Some(previous) = replaced.filter(|previous| updated.image.as_ref() != Some(previous)) {
            self.discard_image(&previous).await;
        }

        tracing::info!(
            article_id = %updated.id,
            user = %actor.username,
            image_replaced = stored.is_some(),
            "article updated"
        );
        Ok(updated.into())
    }
}
