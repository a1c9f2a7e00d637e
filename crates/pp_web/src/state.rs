use pp_core::ArticleStore;
use std::sync::Arc;

pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
}
