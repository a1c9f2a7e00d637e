use chrono::{DateTime, Duration, Utc};
use pp_core::Article;

fn sample_article(
    id: &str,
    title: &str,
    summary: &str,
    category: &str,
    source: &str,
    published_at: DateTime<Utc>,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        category: category.to_string(),
        published_at,
        source: source.to_string(),
        image: None,
    }
}

/// The bundled PatchPoint stories, published between 30 minutes and 8 hours before `now`.
pub fn sample_articles(now: DateTime<Utc>) -> Vec<Article> {
    vec![
        sample_article(
            "1",
            "City Council Approves New Park Renovation Plan",
            "The downtown green space will receive funding for playground upgrades and native plant restoration.",
            "Local",
            "PatchPoint Local",
            now - Duration::minutes(30),
        ),
        sample_article(
            "2",
            "High School Robotics Team Advances to Finals",
            "Students credit community mentors and after-school STEM programs for their success.",
            "Education",
            "Community Wire",
            now - Duration::hours(2),
        ),
        sample_article(
            "3",
            "Farmers Market Extends Season Through November",
            "Vendors will offer late-harvest produce, baked goods, and artisan crafts on Saturdays.",
            "Business",
            "AgriNews",
            now - Duration::hours(5),
        ),
        sample_article(
            "4",
            "Library Launches Evening Homework Help Program",
            "Volunteer tutors will provide drop-in assistance for middle and high school students.",
            "Education",
            "PatchPoint Local",
            now - Duration::hours(8),
        ),
    ]
}
