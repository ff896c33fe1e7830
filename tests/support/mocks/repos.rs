// tests/support/mocks/repos.rs
use article_manager::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_manager::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepoCall {
    FindById(i64),
    ListAll,
    Insert,
    Update(i64),
    Delete(i64),
}

impl RepoCall {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Insert | Self::Update(_) | Self::Delete(_))
    }
}

#[derive(Default)]
struct State {
    articles: BTreeMap<i64, Article>,
    next_id: i64,
    calls: Vec<RepoCall>,
    fail_writes: bool,
}

/// In-memory article table that records every call made against it.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    state: Mutex<State>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let repo = Self::new();
        {
            let mut state = repo.state.lock().unwrap();
            for article in articles {
                let id = i64::from(article.id);
                state.next_id = state.next_id.max(id);
                state.articles.insert(id, article);
            }
        }
        repo
    }

    /// Makes insert/update/delete fail with a persistence error.
    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<RepoCall> {
        self.calls().into_iter().filter(RepoCall::is_mutation).collect()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RepoCall::Insert);
        if state.fail_writes {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        state.next_id += 1;
        let id = state.next_id;
        let article = Article {
            id: ArticleId::new(id)?,
            title: new.title,
            body: new.body,
            image: new.image,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);
        state.calls.push(RepoCall::Update(id));
        if state.fail_writes {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        let article = state
            .articles
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.title = update.title;
        article.body = update.body;
        article.image = update.image;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(id);
        state.calls.push(RepoCall::Delete(id));
        if state.fail_writes {
            return Err(DomainError::Persistence("database unavailable".into()));
        }
        state
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(id);
        state.calls.push(RepoCall::FindById(id));
        Ok(state.articles.get(&id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(RepoCall::ListAll);
        Ok(state.articles.values().rev().cloned().collect())
    }
}
