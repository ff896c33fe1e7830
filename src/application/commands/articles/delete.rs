// src/application/commands/articles/delete.rs
use super::{
    ArticleCommandService,
    access::{ensure_authenticated, parse_article_id},
};
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let actor = ensure_authenticated(actor)?;
        let id = parse_article_id(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::article_not_found(command.id))?;

        self.write_repo.delete(article.id).await?;

        if let Some(image) = &article.image {
            self.discard_image(image).await;
        }

        tracing::info!(article_id = %article.id, user = %actor.username, "article deleted");
        Ok(())
    }
}
