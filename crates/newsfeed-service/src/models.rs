use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: i64,
    pub author: String,
    pub published_at: Timestamp,
    pub image: String,
    pub teaser: String,
    pub content: String,
    pub is_deleted: bool,
}

impl NewsItem {
    /// Not deleted and already published. An item published exactly at `now`
    /// is visible.
    pub fn is_visible_at(&self, now: Timestamp) -> bool {
        !self.is_deleted && self.published_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub user: String,
    pub news_id: i64,
    pub comment: String,
    pub published_at: Timestamp,
}

/// On-disk shape of `news.json`.
#[derive(Debug, Deserialize)]
pub struct NewsFile {
    pub news: Vec<NewsItem>,
}

/// On-disk shape of `comments.json`.
#[derive(Debug, Deserialize)]
pub struct CommentsFile {
    pub comments: Vec<Comment>,
}

/// One entry of the list view. Carries no `content`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSummary {
    pub id: i64,
    pub author: String,
    pub published_at: Timestamp,
    pub image: String,
    pub teaser: String,
    pub is_deleted: bool,
    pub last_comment: Option<Timestamp>,
    pub comments_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsList {
    pub news: Vec<NewsSummary>,
    pub total_results: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetail {
    pub id: i64,
    pub author: String,
    pub published_at: Timestamp,
    pub image: String,
    pub teaser: String,
    pub content: String,
    pub is_deleted: bool,
    /// Most recent first.
    pub comments: Vec<Comment>,
}
