use std::sync::Arc;

use axum::Router;

pub mod clock;
pub mod config;
pub mod errors;
pub mod feed;
pub mod models;
pub mod routes;
pub mod shutdown;
pub mod source;
pub mod timestamp;

use clock::{Clock, SystemClock};
use source::{JsonFileSource, NewsSource};

pub trait AppState: Clone + Send + Sync + 'static {
    type Source: NewsSource;
    type Clock: Clock;

    fn source(&self) -> &Self::Source;
    fn clock(&self) -> &Self::Clock;
}

/// Application state over any data source and clock.
pub struct FeedState<S, C> {
    source: S,
    clock: Arc<C>,
}

impl<S, C> FeedState<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            clock: Arc::new(clock),
        }
    }
}

// Manual impl: `C` itself need not be `Clone`.
impl<S: Clone, C> Clone for FeedState<S, C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: NewsSource, C: Clock> AppState for FeedState<S, C> {
    type Source = S;
    type Clock = C;

    fn source(&self) -> &S {
        &self.source
    }

    fn clock(&self) -> &C {
        &self.clock
    }
}

pub type DefaultAppState = FeedState<JsonFileSource, SystemClock>;

pub fn create_app<S: AppState>(state: S) -> Router {
    routes::create_router().with_state(state)
}
