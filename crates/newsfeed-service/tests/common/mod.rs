#![allow(dead_code)]

use newsfeed_service::models::{Comment, NewsItem};
use newsfeed_service::timestamp::Timestamp;

pub fn ts(value: &str) -> Timestamp {
    Timestamp::parse(value).expect("fixture timestamp should parse")
}

pub fn news_item(id: i64, published_at: &str, is_deleted: bool) -> NewsItem {
    NewsItem {
        id,
        author: format!("Author {id}"),
        published_at: ts(published_at),
        image: format!("/images/{id}.jpg"),
        teaser: format!("Teaser {id}"),
        content: format!("Full content of news {id}"),
        is_deleted,
    }
}

pub fn comment(news_id: i64, user: &str, published_at: &str) -> Comment {
    Comment {
        user: user.to_string(),
        news_id,
        comment: format!("{user} says hello"),
        published_at: ts(published_at),
    }
}

pub mod server_utils {
    use super::*;
    use axum_test::TestServer;
    use newsfeed_service::{FeedState, clock::FixedClock, routes, source::InMemorySource};

    pub fn create_test_server(
        news: Vec<NewsItem>,
        comments: Vec<Comment>,
        now: &str,
    ) -> TestServer {
        let state = FeedState::new(InMemorySource::new(news, comments), FixedClock(ts(now)));
        let app = routes::create_router().with_state(state);

        TestServer::new(app).unwrap()
    }
}
