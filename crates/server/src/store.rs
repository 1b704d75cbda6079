//! Seeded in-memory article store backing the demo endpoints.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use paginate::{PageSource, QueryError};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Full article record as stored. `review_notes` is internal and must not
/// leak through public list projections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub review_notes: String,
}

/// Public projection of an [`Article`] for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub title: String,
    pub published_at: DateTime<Utc>,
}

impl ArticleSummary {
    pub fn of(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub body: String,
}

/// Append-only store; insertion order is the pagination order, which keeps
/// the windowed reads deterministic without any sorting.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `n` predictable articles for the demo endpoints and tests.
    pub async fn seeded(n: u64) -> Self {
        let store = Self::new();
        let origin = Utc::now();
        let mut articles = store.articles.write().await;
        for i in 1..=n {
            articles.push(Article {
                id: Uuid::new_v4(),
                title: format!("Article #{i}"),
                body: format!("Body of article #{i}."),
                published_at: origin + Duration::seconds(i as i64),
                review_notes: format!("draft {i} approved"),
            });
        }
        drop(articles);
        store
    }

    pub async fn create(&self, input: ArticleInput) -> Article {
        let article = Article {
            id: Uuid::new_v4(),
            title: input.title,
            body: input.body,
            published_at: Utc::now(),
            review_notes: String::new(),
        };
        self.articles.write().await.push(article.clone());
        article
    }
}

#[async_trait]
impl PageSource for ArticleStore {
    type Item = Article;

    async fn count(&self) -> Result<u64, QueryError> {
        Ok(self.articles.read().await.len() as u64)
    }

    async fn fetch(&self, offset: u64, limit: u64) -> Result<Vec<Article>, QueryError> {
        let articles = self.articles.read().await;
        let start = (offset as usize).min(articles.len());
        let end = start.saturating_add(limit as usize).min(articles.len());
        Ok(articles[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_counts_and_windows() {
        let store = ArticleStore::seeded(25).await;
        assert_eq!(store.count().await.unwrap(), 25);
        let window = store.fetch(10, 10).await.unwrap();
        assert_eq!(window.len(), 10);
        assert_eq!(window[0].title, "Article #11");
    }

    #[tokio::test]
    async fn create_appends_at_the_end() {
        let store = ArticleStore::seeded(2).await;
        let created = store
            .create(ArticleInput { title: "New".into(), body: "text".into() })
            .await;
        let window = store.fetch(2, 10).await.unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].id, created.id);
    }
}
