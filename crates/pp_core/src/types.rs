use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    /// Checks the fields a store must guarantee before handing the article out.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidArticle("article id must not be empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidArticle(format!("article {} has an empty title", self.id)));
        }
        Ok(())
    }
}
