//! Comment aggregation and the two read views over a loaded corpus.
//!
//! Everything here is a pure function of its arguments. Source records are
//! borrowed and never modified; output records are built fresh.

use std::collections::HashMap;

use crate::models::{Comment, NewsDetail, NewsItem, NewsList, NewsSummary};
use crate::timestamp::Timestamp;

/// Per-news comment statistics. A missing entry means no comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentStats {
    pub comments_count: usize,
    pub last_comment: Option<Timestamp>,
}

impl CommentStats {
    fn record(&mut self, published_at: Timestamp) {
        self.comments_count += 1;
        self.last_comment = Some(match self.last_comment {
            Some(current) => current.max(published_at),
            None => published_at,
        });
    }
}

/// Groups comments by `news_id` in a single pass.
pub fn aggregate_comments(comments: &[Comment]) -> HashMap<i64, CommentStats> {
    let mut stats: HashMap<i64, CommentStats> = HashMap::new();
    for comment in comments {
        stats
            .entry(comment.news_id)
            .or_default()
            .record(comment.published_at);
    }
    stats
}

/// Visible news in source order, each decorated with its comment stats.
pub fn list_view(
    news: &[NewsItem],
    stats: &HashMap<i64, CommentStats>,
    now: Timestamp,
) -> NewsList {
    let items: Vec<NewsSummary> = news
        .iter()
        .filter(|item| item.is_visible_at(now))
        .map(|item| {
            let item_stats = stats.get(&item.id).copied().unwrap_or_default();
            NewsSummary {
                id: item.id,
                author: item.author.clone(),
                published_at: item.published_at,
                image: item.image.clone(),
                teaser: item.teaser.clone(),
                is_deleted: item.is_deleted,
                last_comment: item_stats.last_comment,
                comments_count: item_stats.comments_count,
            }
        })
        .collect();

    NewsList {
        total_results: items.len(),
        news: items,
    }
}

/// The first item with `news_id` and its comments, newest first.
///
/// Returns `None` when the id is unknown, the item is deleted, or it is not
/// yet published.
pub fn detail_view(
    news: &[NewsItem],
    comments: &[Comment],
    news_id: i64,
    now: Timestamp,
) -> Option<NewsDetail> {
    let item = news.iter().find(|item| item.id == news_id)?;
    if !item.is_visible_at(now) {
        return None;
    }

    let mut item_comments: Vec<Comment> = comments
        .iter()
        .filter(|comment| comment.news_id == news_id)
        .cloned()
        .collect();
    // stable: equal timestamps keep source order
    item_comments.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    Some(NewsDetail {
        id: item.id,
        author: item.author.clone(),
        published_at: item.published_at,
        image: item.image.clone(),
        teaser: item.teaser.clone(),
        content: item.content.clone(),
        is_deleted: item.is_deleted,
        comments: item_comments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> Timestamp {
        Timestamp::parse(value).unwrap()
    }

    fn news_item(id: i64, published_at: &str, is_deleted: bool) -> NewsItem {
        NewsItem {
            id,
            author: format!("author-{id}"),
            published_at: ts(published_at),
            image: format!("/img/{id}.png"),
            teaser: format!("teaser-{id}"),
            content: format!("content-{id}"),
            is_deleted,
        }
    }

    fn comment(news_id: i64, user: &str, published_at: &str) -> Comment {
        Comment {
            user: user.to_string(),
            news_id,
            comment: format!("{user} on {news_id}"),
            published_at: ts(published_at),
        }
    }

    fn now() -> Timestamp {
        ts("2022-06-15T12:00:00")
    }

    #[test]
    fn test_aggregate_counts_and_latest() {
        let comments = vec![
            comment(1, "a", "2020-01-03T00:00:00"),
            comment(2, "b", "2020-05-01T00:00:00"),
            comment(1, "c", "2020-01-02T00:00:00"),
            comment(1, "d", "2020-01-01T00:00:00"),
        ];

        let stats = aggregate_comments(&comments);

        assert_eq!(stats.len(), 2);
        assert_eq!(
            stats[&1],
            CommentStats {
                comments_count: 3,
                last_comment: Some(ts("2020-01-03T00:00:00")),
            }
        );
        assert_eq!(stats[&2].comments_count, 1);
        assert!(!stats.contains_key(&3));
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate_comments(&[]).is_empty());
        assert_eq!(
            CommentStats::default(),
            CommentStats {
                comments_count: 0,
                last_comment: None
            }
        );
    }

    #[test]
    fn test_list_view_filters_and_keeps_order() {
        let news = vec![
            news_item(3, "2021-01-01T00:00:00", false),
            news_item(1, "2020-01-01T00:00:00", false),
            news_item(2, "2020-01-01T00:00:00", true),
            news_item(4, "2023-06-15T12:00:00", false),
            news_item(5, "2022-06-15T12:00:00", false),
        ];
        let comments = vec![
            comment(1, "a", "2020-01-02T00:00:00"),
            comment(1, "b", "2020-01-03T00:00:00"),
            comment(2, "c", "2020-01-04T00:00:00"),
        ];
        let stats = aggregate_comments(&comments);

        let list = list_view(&news, &stats, now());

        let ids: Vec<i64> = list.news.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 5]);
        assert_eq!(list.total_results, 3);

        let first = &list.news[1];
        assert_eq!(first.comments_count, 2);
        assert_eq!(first.last_comment, Some(ts("2020-01-03T00:00:00")));

        let uncommented = &list.news[0];
        assert_eq!(uncommented.comments_count, 0);
        assert_eq!(uncommented.last_comment, None);
    }

    #[test]
    fn test_list_view_empty_corpus() {
        let list = list_view(&[], &HashMap::new(), now());
        assert!(list.news.is_empty());
        assert_eq!(list.total_results, 0);
    }

    #[test]
    fn test_detail_view_orders_comments_newest_first() {
        let news = vec![news_item(5, "2020-01-01T00:00:00", false)];
        let comments = vec![
            comment(5, "first-tie", "2021-01-01T00:00:00"),
            comment(6, "other", "2021-03-01T00:00:00"),
            comment(5, "second-tie", "2021-01-01T00:00:00"),
            comment(5, "newest", "2021-02-01T00:00:00"),
        ];

        let detail = detail_view(&news, &comments, 5, now()).unwrap();

        let users: Vec<&str> = detail.comments.iter().map(|c| c.user.as_str()).collect();
        assert_eq!(users, vec!["newest", "first-tie", "second-tie"]);
        assert_eq!(detail.content, "content-5");
    }

    #[test]
    fn test_detail_view_without_comments() {
        let news = vec![news_item(4, "2020-01-01T00:00:00", false)];

        let detail = detail_view(&news, &[], 4, now()).unwrap();

        assert!(detail.comments.is_empty());
    }

    #[test]
    fn test_detail_view_not_found_cases() {
        let news = vec![
            news_item(2, "2020-01-01T00:00:00", true),
            news_item(3, "2023-06-15T12:00:00", false),
        ];

        assert_eq!(detail_view(&news, &[], 2, now()), None);
        assert_eq!(detail_view(&news, &[], 3, now()), None);
        assert_eq!(detail_view(&news, &[], 9999, now()), None);
    }

    #[test]
    fn test_detail_view_uses_first_match() {
        let mut duplicate = news_item(8, "2020-01-01T00:00:00", false);
        duplicate.content = "second".to_string();
        let news = vec![news_item(8, "2020-01-01T00:00:00", false), duplicate];

        let detail = detail_view(&news, &[], 8, now()).unwrap();
        assert_eq!(detail.content, "content-8");

        // a deleted first match hides later duplicates
        let mut hidden = news.clone();
        hidden[0].is_deleted = true;
        assert_eq!(detail_view(&hidden, &[], 8, now()), None);
    }

    #[test]
    fn test_views_leave_inputs_untouched() {
        let news = vec![news_item(1, "2020-01-01T00:00:00", false)];
        let comments = vec![
            comment(1, "old", "2020-01-02T00:00:00"),
            comment(1, "new", "2020-01-03T00:00:00"),
        ];
        let before = (news.clone(), comments.clone());

        let first = detail_view(&news, &comments, 1, now());
        let second = detail_view(&news, &comments, 1, now());

        assert_eq!(first, second);
        assert_eq!((news, comments), before);
    }
}
