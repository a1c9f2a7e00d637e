use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Name of the backend, used in logs
    fn name(&self) -> &str;

    /// All articles in store order
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// Look up a single article by id
    async fn get_article(&self, id: &str) -> Result<Option<Article>>;

    /// Insert an article, or replace the one with the same id in place.
    ///
    /// Neither the HTTP API nor the CLI writes articles; this is how an
    /// embedding caller seeds a writable store. Read-only backends return
    /// [`crate::Error::Storage`].
    async fn store_article(&self, article: &Article) -> Result<()>;
}
