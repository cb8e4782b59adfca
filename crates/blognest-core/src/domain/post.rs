use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of characters of content kept in an excerpt.
pub const EXCERPT_LENGTH: usize = 150;

/// Image used when a post is created without one.
pub const DEFAULT_FEATURED_IMAGE: &str = "/blog-post-concept.png";

/// Post entity - a user-authored article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    /// Calendar day of creation, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub tags: Vec<String>,
}

impl Post {
    /// Long-form date used on the detail page, e.g. `January 15, 2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// A post that has not been stored yet: no id, no date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl NewPost {
    /// Stamp the post with its identity and creation date.
    pub fn into_post(self, id: String, date: NaiveDate) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            featured_image: self.featured_image,
            author: self.author,
            date,
            tags: self.tags,
        }
    }
}

/// Derive an excerpt: the first [`EXCERPT_LENGTH`] characters followed by
/// `...`, or the whole content when it is not longer than that.
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_LENGTH) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
