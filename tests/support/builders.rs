// tests/support/builders.rs
use super::mocks::fixed_now;
use article_manager::domain::article::{
    Article, ArticleBody, ArticleId, ArticleTitle, ImageFilename,
};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    body: String,
    image: Option<String>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            body: "Lorem ipsum".into(),
            image: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            image: self.image.map(|name| ImageFilename::new(name).unwrap()),
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}
