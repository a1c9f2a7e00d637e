use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use chrono::Utc;
use pp_core::{categories, Article, FeedQuery, FeedView};
use std::sync::Arc;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub async fn get_feed(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<FeedView>> {
    let Query(params) = params?;
    let query = FeedQuery::from_pairs(params);
    let articles = state.store.list_articles().await?;
    debug!("Composing feed for {:?} over {} articles", query, articles.len());
    let feed = query.compose(&articles);
    Ok(Json(FeedView::new(feed, categories(&articles), Utc::now())))
}

pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<String>>> {
    let articles = state.store.list_articles().await?;
    Ok(Json(categories(&articles)))
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Article>>> {
    Ok(Json(state.store.list_articles().await?))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Article>> {
    state
        .store
        .get_article(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::from(pp_core::Error::NotFound(id)))
}
