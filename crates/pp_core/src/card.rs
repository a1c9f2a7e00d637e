use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use url::Url;

use crate::feed::{CardVariant, Feed, FeedSection, SectionKind};
use crate::types::Article;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";

impl CardVariant {
    /// Placeholder image dimensions (width, height) for cards of this variant.
    pub fn image_size(&self) -> (u32, u32) {
        match self {
            CardVariant::Hero => (1200, 800),
            CardVariant::Trending => (600, 400),
            CardVariant::Grid => (400, 300),
            CardVariant::List => (300, 200),
        }
    }
}

/// Deterministic stand-in image for an article without one, keyed by id.
/// Hero images carry a `?random=1` suffix.
pub fn placeholder_image(id: &str, variant: CardVariant) -> String {
    let (width, height) = variant.image_size();
    let seed: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    let url = format!("{}/{}/{}/{}", PLACEHOLDER_BASE, seed, width, height);
    match variant {
        CardVariant::Hero => format!("{}?random=1", url),
        _ => url,
    }
}

/// The article's own image when it is an absolute http(s) URL, the placeholder otherwise.
pub fn resolve_image(article: &Article, variant: CardVariant) -> String {
    article
        .image
        .as_deref()
        .and_then(|image| Url::parse(image).ok())
        .filter(|url| url.scheme() == "http" || url.scheme() == "https")
        .map(String::from)
        .unwrap_or_else(|| placeholder_image(&article.id, variant))
}

/// Relative age label, e.g. "Just now", "45m ago", "2h ago", "3d ago".
pub fn time_ago(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(published_at);
    if age < Duration::minutes(1) {
        return "Just now".to_string();
    }

    let total_seconds = age.num_seconds();
    if total_seconds < 3600 {
        format!("{}m ago", total_seconds / 60)
    } else if total_seconds < 86400 {
        format!("{}h ago", total_seconds / 3600)
    } else {
        format!("{}d ago", total_seconds / 86400)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    #[serde(flatten)]
    pub article: Article,
    pub variant: CardVariant,
    pub image_url: String,
    pub age: String,
}

impl CardView {
    pub fn new(article: Article, variant: CardVariant, now: DateTime<Utc>) -> Self {
        let image_url = resolve_image(&article, variant);
        let age = time_ago(article.published_at, now);
        Self {
            article,
            variant,
            image_url,
            age,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub kind: SectionKind,
    pub label: String,
    pub variant: CardVariant,
    pub cards: Vec<CardView>,
}

impl SectionView {
    fn new(section: FeedSection, now: DateTime<Utc>) -> Self {
        let variant = section.variant;
        Self {
            kind: section.kind,
            label: section.label,
            variant,
            cards: section
                .articles
                .into_iter()
                .map(|article| CardView::new(article, variant, now))
                .collect(),
        }
    }
}

/// A composed feed with presentation data resolved for every card.
#[derive(Debug, Clone, Serialize)]
pub struct FeedView {
    pub empty: bool,
    pub sections: Vec<SectionView>,
    pub categories: Vec<String>,
}

impl FeedView {
    pub fn new(feed: Feed, categories: Vec<String>, now: DateTime<Utc>) -> Self {
        match feed {
            Feed::Empty => Self {
                empty: true,
                sections: Vec::new(),
                categories,
            },
            Feed::Sections(sections) => Self {
                empty: false,
                sections: sections
                    .into_iter()
                    .map(|section| SectionView::new(section, now))
                    .collect(),
                categories,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::compose;

    fn article(id: &str, image: Option<&str>, published_at: DateTime<Utc>) -> Article {
        Article {
            id: id.to_string(),
            title: "Farmers Market Extends Season".to_string(),
            summary: String::new(),
            category: "Business".to_string(),
            published_at,
            source: "AgriNews".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_placeholder_is_keyed_by_id_and_variant() {
        assert_eq!(
            placeholder_image("3", CardVariant::Hero),
            "https://picsum.photos/seed/3/1200/800?random=1"
        );
        assert_eq!(
            placeholder_image("3", CardVariant::List),
            "https://picsum.photos/seed/3/300/200"
        );
        assert_eq!(
            placeholder_image("a/b", CardVariant::Grid),
            "https://picsum.photos/seed/a%2Fb/400/300"
        );
    }

    #[test]
    fn test_resolve_image_falls_back() {
        let now = Utc::now();
        let own = article("1", Some("https://cdn.example.com/park.jpg"), now);
        assert_eq!(resolve_image(&own, CardVariant::Grid), "https://cdn.example.com/park.jpg");

        let missing = article("1", None, now);
        assert_eq!(resolve_image(&missing, CardVariant::Grid), placeholder_image("1", CardVariant::Grid));

        let broken = article("1", Some("not a url"), now);
        assert_eq!(resolve_image(&broken, CardVariant::Trending), placeholder_image("1", CardVariant::Trending));

        let local = article("1", Some("file:///etc/passwd"), now);
        assert_eq!(resolve_image(&local, CardVariant::Hero), placeholder_image("1", CardVariant::Hero));
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(20), now), "Just now");
        assert_eq!(time_ago(now + Duration::minutes(5), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(60), now), "1m ago");
        assert_eq!(time_ago(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(time_ago(now - Duration::seconds(3599), now), "59m ago");
        assert_eq!(time_ago(now - Duration::seconds(3600), now), "1h ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2h ago");
        assert_eq!(time_ago(now - Duration::seconds(86399), now), "23h ago");
        assert_eq!(time_ago(now - Duration::seconds(86400), now), "1d ago");
        assert_eq!(time_ago(now - Duration::hours(49), now), "2d ago");
    }

    #[test]
    fn test_feed_view_resolves_cards() {
        let now = Utc::now();
        let articles: Vec<Article> = (0..5)
            .map(|i| article(&i.to_string(), None, now - Duration::hours(i)))
            .collect();
        let view = FeedView::new(compose(articles), vec!["All".to_string()], now);

        assert!(!view.empty);
        assert_eq!(view.sections.len(), 2);
        let hero = &view.sections[0].cards[0];
        assert_eq!(hero.variant, CardVariant::Hero);
        assert_eq!(hero.image_url, placeholder_image("0", CardVariant::Hero));
        assert_eq!(view.sections[1].cards[1].age, "2h ago");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["sections"][0]["cards"][0]["imageUrl"], hero.image_url.as_str());
        assert_eq!(json["sections"][0]["cards"][0]["title"], "Farmers Market Extends Season");
    }

    #[test]
    fn test_feed_view_empty() {
        let view = FeedView::new(Feed::Empty, vec!["All".to_string()], Utc::now());
        assert!(view.empty);
        assert!(view.sections.is_empty());
    }
}
