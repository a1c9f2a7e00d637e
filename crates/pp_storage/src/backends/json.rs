use async_trait::async_trait;
use pp_core::{Article, ArticleStore, Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-only store backed by a JSON array of articles.
pub struct JsonFileStorage {
    path: PathBuf,
    articles: Vec<Article>,
}

impl JsonFileStorage {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = tokio::fs::read_to_string(&path).await?;
        let articles = parse_articles(&raw)?;
        info!("Loaded {} articles from {}", articles.len(), path.display());
        Ok(Self { path, articles })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_articles(raw: &str) -> Result<Vec<Article>> {
    let articles: Vec<Article> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for article in &articles {
        article.validate()?;
        if !seen.insert(article.id.as_str()) {
            return Err(Error::InvalidArticle(format!("duplicate article id {}", article.id)));
        }
    }
    Ok(articles)
}

#[async_trait]
impl ArticleStore for JsonFileStorage {
    fn name(&self) -> &str {
        "json"
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }

    async fn get_article(&self, id: &str) -> Result<Option<Article>> {
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn store_article(&self, _article: &Article) -> Result<()> {
        Err(Error::Storage(format!("{} is read-only", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ARTICLES: &str = r#"[
        {
            "id": "1",
            "title": "City Council Approves New Park Renovation Plan",
            "summary": "Playground upgrades and native plant restoration.",
            "category": "Local",
            "publishedAt": "2025-09-01T09:30:00Z",
            "source": "PatchPoint Local"
        },
        {
            "id": "2",
            "title": "High School Robotics Team Advances to Finals",
            "summary": "Community mentors credited.",
            "category": "Education",
            "publishedAt": "2025-09-01T08:00:00Z",
            "source": "Community Wire",
            "image": "https://cdn.example.com/robots.jpg"
        }
    ]"#;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_open_json_storage() {
        let file = write_file(ARTICLES);
        let storage = JsonFileStorage::open(file.path()).await.unwrap();

        let articles = storage.list_articles().await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[1].image.as_deref(), Some("https://cdn.example.com/robots.jpg"));
        assert!(storage.get_article("1").await.unwrap().is_some());
        assert!(storage.get_article("3").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_json_storage_is_read_only() {
        let file = write_file(ARTICLES);
        let storage = JsonFileStorage::open(file.path()).await.unwrap();
        let article = storage.get_article("1").await.unwrap().unwrap();
        assert!(matches!(storage.store_article(&article).await, Err(Error::Storage(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let raw = ARTICLES.replace(r#""id": "2""#, r#""id": "1""#);
        assert!(matches!(parse_articles(&raw), Err(Error::InvalidArticle(_))));
    }

    #[test]
    fn test_rejects_empty_title() {
        let raw = ARTICLES.replace("High School Robotics Team Advances to Finals", "");
        assert!(matches!(parse_articles(&raw), Err(Error::InvalidArticle(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(parse_articles("{ not json"), Err(Error::Serialization(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = JsonFileStorage::open("/nonexistent/patchpoint/articles.json").await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
