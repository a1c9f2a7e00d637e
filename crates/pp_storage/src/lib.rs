use pp_core::{ArticleStore, Error, Result};
use std::sync::Arc;
use tracing::info;

pub mod backends;
pub mod sample;

pub use backends::*;

pub const DEFAULT_STORAGE: &str = "memory";

/// Build a store by backend name. `json` needs `backend_url` to point at the file.
pub async fn create_storage(kind: &str, backend_url: Option<&str>) -> Result<Arc<dyn ArticleStore>> {
    let storage: Arc<dyn ArticleStore> = match kind {
        "memory" => Arc::new(InMemoryStorage::sample()),
        "json" => {
            let path = backend_url.ok_or_else(|| {
                Error::Storage("json storage needs --backend-url pointing at an articles file".to_string())
            })?;
            Arc::new(JsonFileStorage::open(path).await?)
        }
        other => {
            return Err(Error::Storage(format!(
                "Unknown storage backend: {} (available: memory, json)",
                other
            )))
        }
    };
    info!("Using {} storage", storage.name());
    Ok(storage)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::create_storage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_memory_storage() {
        let storage = create_storage("memory", None).await.unwrap();
        assert_eq!(storage.name(), "memory");
        assert_eq!(storage.list_articles().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_create_json_storage_needs_path() {
        assert!(matches!(create_storage("json", None).await, Err(Error::Storage(_))));
    }

    #[tokio::test]
    async fn test_create_unknown_storage() {
        assert!(matches!(create_storage("qdrant", None).await, Err(Error::Storage(_))));
    }
}
