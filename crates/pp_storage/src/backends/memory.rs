use async_trait::async_trait;
use chrono::Utc;
use pp_core::{Article, ArticleStore, Result};
use tokio::sync::RwLock;
use tracing::debug;

use crate::sample::sample_articles;

#[derive(Default)]
pub struct InMemoryStorage {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }

    /// Store seeded with the bundled sample stories.
    pub fn sample() -> Self {
        Self::with_articles(sample_articles(Utc::now()))
    }
}

#[async_trait]
impl ArticleStore for InMemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn get_article(&self, id: &str) -> Result<Option<Article>> {
        Ok(self.articles.read().await.iter().find(|a| a.id == id).cloned())
    }

    async fn store_article(&self, article: &Article) -> Result<()> {
        article.validate()?;
        let mut articles = self.articles.write().await;
        if let Some(existing) = articles.iter_mut().find(|a| a.id == article.id) {
            debug!("Replacing article {}", article.id);
            *existing = article.clone();
        } else {
            debug!("Adding article {}", article.id);
            articles.push(article.clone());
        }
        Ok(())
    }
}
