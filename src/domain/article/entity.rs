// src/domain/article/entity.rs
use crate::domain::article::image::ImageFilename;
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image: Option<ImageFilename>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) {
        self.title = title;
        self.body = body;
        self.updated_at = now;
    }

    /// Swaps in a new image and hands back the one it replaced.
    pub fn replace_image(
        &mut self,
        image: ImageFilename,
        now: DateTime<Utc>,
    ) -> Option<ImageFilename> {
        self.updated_at = now;
        self.image.replace(image)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image: Option<ImageFilename>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the mutable columns of an existing article.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image: Option<ImageFilename>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleUpdate {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            body: article.body.clone(),
            image: article.image.clone(),
            updated_at: article.updated_at,
        }
    }
}
