use axum::{Router, routing::get};

use crate::AppState;

pub mod news;

async fn health() -> &'static str {
    "OK"
}

pub fn create_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/health", get(health))
        .merge(news::create_news_router())
}
