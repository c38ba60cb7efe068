use crate::{id::Id, time::Timestamp};

/// A news article shown on the start page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    pub id: Id,
    pub title: String,
    pub body: String,
    /// Set once at creation time and never updated afterwards.
    pub published_at: Timestamp,
    pub image_url: Option<String>,
}
