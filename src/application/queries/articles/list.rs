use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    /// An empty collection is reported as `NotFound` rather than an empty page.
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_all().await?;
        if articles.is_empty() {
            return Err(ApplicationError::not_found("No article found"));
        }
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
