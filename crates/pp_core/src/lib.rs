pub mod card;
pub mod error;
pub mod feed;
pub mod storage;
pub mod types;

pub use card::{CardView, FeedView, SectionView};
pub use error::{Error, Result};
pub use feed::{
    categories, compose, compose_feed, filter, CardVariant, Feed, FeedQuery, FeedSection,
    SectionKind, ALL_CATEGORIES,
};
pub use storage::ArticleStore;
pub use types::Article;

pub mod prelude {
    pub use crate::{Article, ArticleStore, Error, Feed, FeedQuery, Result};
}
