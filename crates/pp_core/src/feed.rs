use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Article;

/// Category sentinel that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Below this many filtered articles the feed collapses into a single grid section.
pub const SECTIONED_THRESHOLD: usize = 4;

const TRENDING_END: usize = 6;
const LATEST_END: usize = 12;

const LATEST_UPDATES_LABEL: &str = "Latest Updates";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    Hero,
    Trending,
    Grid,
    List,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Hero => "hero",
            CardVariant::Trending => "trending",
            CardVariant::Grid => "grid",
            CardVariant::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Featured,
    Trending,
    Latest,
    More,
}

impl SectionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Featured => "Featured",
            SectionKind::Trending => "Trending",
            SectionKind::Latest => "Latest",
            SectionKind::More => "More",
        }
    }

    pub fn variant(&self) -> CardVariant {
        match self {
            SectionKind::Featured => CardVariant::Hero,
            SectionKind::Trending => CardVariant::Trending,
            SectionKind::Latest => CardVariant::Grid,
            SectionKind::More => CardVariant::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSection {
    pub kind: SectionKind,
    pub label: String,
    pub variant: CardVariant,
    pub articles: Vec<Article>,
}

impl FeedSection {
    fn new(kind: SectionKind, articles: Vec<Article>) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            variant: kind.variant(),
            articles,
        }
    }
}

/// Result of composing a filtered article list.
///
/// `Empty` is the empty-state marker: nothing matched. A `Sections` value
/// never carries a section without articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "sections", rename_all = "snake_case")]
pub enum Feed {
    Empty,
    Sections(Vec<FeedSection>),
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        matches!(self, Feed::Empty)
    }

    pub fn sections(&self) -> &[FeedSection] {
        match self {
            Feed::Empty => &[],
            Feed::Sections(sections) => sections,
        }
    }

    /// All articles in section order.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.sections().iter().flat_map(|section| section.articles.iter())
    }
}

/// Search text and category selection as they arrive from a caller.
///
/// Missing values are normalized: no query matches everything, no (or an
/// empty) category means [`ALL_CATEGORIES`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub query: Option<String>,
    pub category: Option<String>,
}

impl FeedQuery {
    pub fn new(query: Option<String>, category: Option<String>) -> Self {
        Self { query, category }
    }

    /// Builds a query from raw key/value pairs such as a URL query string.
    ///
    /// `q` and `query` both set the search text. Repeated keys resolve to the
    /// last value and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut feed_query = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "q" | "query" => feed_query.query = Some(value.into()),
                "category" => feed_query.category = Some(value.into()),
                _ => {}
            }
        }
        feed_query
    }

    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        match self.category.as_deref() {
            None | Some("") => ALL_CATEGORIES,
            Some(category) => category,
        }
    }

    pub fn compose(&self, articles: &[Article]) -> Feed {
        compose_feed(articles, self.query(), self.category())
    }
}

/// Keeps articles in the selected category whose title or summary contains
/// `query`, ignoring case. Input order is preserved.
pub fn filter(articles: &[Article], query: &str, category: &str) -> Vec<Article> {
    let needle = query.to_lowercase();
    let filtered: Vec<Article> = articles
        .iter()
        .filter(|article| category == ALL_CATEGORIES || article.category == category)
        .filter(|article| {
            needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article.summary.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    debug!(
        "Filtered {} of {} articles (query: {:?}, category: {})",
        filtered.len(),
        articles.len(),
        query,
        category
    );
    filtered
}

/// Partitions a filtered list into display sections.
///
/// With at least [`SECTIONED_THRESHOLD`] articles the layout is: index 0 as
/// the hero, `[1, 6)` trending, `[6, 12)` latest grid, `[12, ..)` more list.
/// Empty ranges produce no section. Smaller lists become one grid section.
pub fn compose(filtered: Vec<Article>) -> Feed {
    if filtered.is_empty() {
        return Feed::Empty;
    }

    if filtered.len() < SECTIONED_THRESHOLD {
        return Feed::Sections(vec![FeedSection {
            kind: SectionKind::Latest,
            label: LATEST_UPDATES_LABEL.to_string(),
            variant: CardVariant::Grid,
            articles: filtered,
        }]);
    }

    // Split from the back so each cut leaves the earlier ranges in `rest`.
    let mut rest = filtered;
    let more = split_at_most(&mut rest, LATEST_END);
    let latest = split_at_most(&mut rest, TRENDING_END);
    let trending = split_at_most(&mut rest, 1);

    let mut sections = Vec::with_capacity(4);
    sections.push(FeedSection::new(SectionKind::Featured, rest));
    for (kind, articles) in [
        (SectionKind::Trending, trending),
        (SectionKind::Latest, latest),
        (SectionKind::More, more),
    ] {
        if !articles.is_empty() {
            sections.push(FeedSection::new(kind, articles));
        }
    }

    debug!("Composed {} sections", sections.len());
    Feed::Sections(sections)
}

/// `compose(filter(articles, query, category))`.
pub fn compose_feed(articles: &[Article], query: &str, category: &str) -> Feed {
    compose(filter(articles, query, category))
}

/// `"All"` followed by each distinct category of `articles` in first-seen order.
/// A category literally named `"All"` folds into the sentinel.
pub fn categories(articles: &[Article]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for article in articles {
        if !categories.iter().any(|c| c == &article.category) {
            categories.push(article.category.clone());
        }
    }
    categories
}

fn split_at_most(articles: &mut Vec<Article>, at: usize) -> Vec<Article> {
    if articles.len() > at {
        articles.split_off(at)
    } else {
        Vec::new()
    }
}
