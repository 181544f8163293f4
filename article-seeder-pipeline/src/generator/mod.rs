//! Sample article generator.
//!
//! Produces a fixed-size, ordered collection of articles whose fields are
//! derived from their position. Only the publication timestamps depend on
//! the wall clock.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use tracing::info;

use article_seeder_shared::{Article, Item, Tag};

/// Number of articles produced per run.
pub const ARTICLE_COUNT: u32 = 10;

const ARTICLE_BODY: &str = "Lorem ipsum dolor sit amet...";

/// Generator for the sample article collection.
#[derive(Debug, Clone, Default)]
pub struct ArticleGenerator {
    /// Publication time of article 0. `None` means "now" at generation time.
    base_time: Option<DateTime<Utc>>,
}

impl ArticleGenerator {
    /// Create a generator anchored to the current time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator anchored to a fixed time, for reproducible output.
    pub fn with_base_time(base_time: DateTime<Utc>) -> Self {
        Self {
            base_time: Some(base_time.round_subsecs(0)),
        }
    }

    /// Generate the collection into a fresh vector.
    pub fn generate(&self) -> Vec<Article> {
        let mut articles = Vec::with_capacity(ARTICLE_COUNT as usize);
        self.generate_into(&mut articles);
        articles
    }

    /// Append the collection to `articles`.
    ///
    /// Article `i` (1-based) is published `i` days after the base time.
    pub fn generate_into(&self, articles: &mut Vec<Article>) {
        let base_time = self
            .base_time
            .unwrap_or_else(|| Utc::now().round_subsecs(0));

        articles.extend((1..=ARTICLE_COUNT).map(|position| article_at(position, base_time)));

        info!(count = ARTICLE_COUNT, "Generated {} articles", ARTICLE_COUNT);
    }
}

fn article_at(position: u32, base_time: DateTime<Utc>) -> Article {
    Article {
        id: position,
        title: format!("Title {}", position),
        body: ARTICLE_BODY.to_string(),
        published: base_time + TimeDelta::days(i64::from(position)),
        tags: vec![
            Tag::new(format!("TagZ-{}", position)),
            Tag::new(format!("TagY-{}", position)),
            Tag::new(format!("TagW-{}", position)),
        ],
        items: Item {
            interactions: vec![
                format!("Interaction A{}", position),
                format!("Interaction B{}", position),
            ],
            tags: vec![
                Tag::new(format!("TagA-{}", position)),
                Tag::new(format!("TagB-{}", position)),
                Tag::new(format!("TagC-{}", position)),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tag_names(tags: &[Tag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_generates_ten_articles_in_order() {
        let articles = ArticleGenerator::new().generate();

        assert_eq!(articles.len(), 10);
        let ids: Vec<u32> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_tag_counts() {
        for article in ArticleGenerator::new().generate() {
            assert_eq!(article.tags.len(), 3);
            assert_eq!(article.items.tags.len(), 3);
        }
    }

    #[test]
    fn test_article_five() {
        let articles = ArticleGenerator::new().generate();
        let article = &articles[4];

        assert_eq!(article.id, 5);
        assert_eq!(article.title, "Title 5");
        assert_eq!(article.body, "Lorem ipsum dolor sit amet...");
        assert_eq!(tag_names(&article.tags), vec!["TagZ-5", "TagY-5", "TagW-5"]);
        assert_eq!(
            tag_names(&article.items.tags),
            vec!["TagA-5", "TagB-5", "TagC-5"]
        );
        assert_eq!(
            article.items.interactions,
            vec!["Interaction A5".to_string(), "Interaction B5".to_string()]
        );
    }

    #[test]
    fn test_published_one_day_apart() {
        let articles = ArticleGenerator::new().generate();

        for pair in articles.windows(2) {
            assert_eq!(pair[1].published - pair[0].published, TimeDelta::days(1));
        }
    }

    #[test]
    fn test_published_second_precision() {
        for article in ArticleGenerator::new().generate() {
            assert_eq!(article.published.timestamp_subsec_nanos(), 0);
        }
    }

    #[test]
    fn test_fixed_base_time() {
        let base = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();

        let articles = ArticleGenerator::with_base_time(base).generate();

        assert_eq!(
            articles[0].published,
            Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap()
        );
        assert_eq!(
            articles[9].published,
            Utc.with_ymd_and_hms(2024, 2, 10, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_generate_into_appends() {
        let generator = ArticleGenerator::new();
        let mut articles = generator.generate();

        generator.generate_into(&mut articles);

        assert_eq!(articles.len(), 20);
        assert_eq!(articles[10].id, 1);
        assert_eq!(articles[19].id, 10);
    }
}
