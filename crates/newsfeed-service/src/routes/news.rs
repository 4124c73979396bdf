use axum::{
    Router,
    extract::{Path, State},
    response::Json as ResponseJson,
    routing::get,
};
use tracing::{debug, info, instrument};

use crate::AppState;
use crate::clock::Clock;
use crate::errors::ApiError;
use crate::feed;
use crate::models::{NewsDetail, NewsList};
use crate::source::NewsSource;

#[instrument(skip_all)]
async fn list_news<S: AppState>(
    State(state): State<S>,
) -> Result<ResponseJson<NewsList>, ApiError> {
    debug!("Processing news list request");

    let source = state.source();
    let news = source.load_news().await?;
    let comments = source.load_comments().await?;
    let now = state.clock().now();

    let stats = feed::aggregate_comments(&comments);
    let response = feed::list_view(&news, &stats, now);

    info!(
        total = response.total_results,
        loaded = news.len(),
        now = %now,
        "Successfully built news list"
    );

    Ok(ResponseJson(response))
}

#[instrument(skip_all, fields(news_id = %news_id))]
async fn get_news_item<S: AppState>(
    State(state): State<S>,
    Path(news_id): Path<i64>,
) -> Result<ResponseJson<NewsDetail>, ApiError> {
    debug!("Processing news item request");

    let source = state.source();
    let news = source.load_news().await?;
    let comments = source.load_comments().await?;
    let now = state.clock().now();

    match feed::detail_view(&news, &comments, news_id, now) {
        Some(detail) => {
            info!(
                comments = detail.comments.len(),
                "Successfully retrieved news item"
            );
            Ok(ResponseJson(detail))
        }
        None => {
            debug!(now = %now, "News item missing, deleted or not yet published");
            Err(ApiError::NotFound)
        }
    }
}

pub fn create_news_router<S: AppState>() -> Router<S> {
    Router::new()
        .route("/", get(list_news::<S>))
        .route("/news/{id}", get(get_news_item::<S>))
}
