use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::models::{Comment, CommentsFile, NewsFile, NewsItem};

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the news and comment collections for one request.
#[async_trait]
pub trait NewsSource: Clone + Send + Sync + 'static {
    async fn load_news(&self) -> Result<Vec<NewsItem>, SourceError>;
    async fn load_comments(&self) -> Result<Vec<Comment>, SourceError>;
}

/// Reads `news.json` and `comments.json` from disk on every call, so edits to
/// the files show up on the next request.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    news_path: PathBuf,
    comments_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(news_path: impl Into<PathBuf>, comments_path: impl Into<PathBuf>) -> Self {
        Self {
            news_path: news_path.into(),
            comments_path: comments_path.into(),
        }
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read data file");

        serde_json::from_slice(&bytes).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait]
impl NewsSource for JsonFileSource {
    async fn load_news(&self) -> Result<Vec<NewsItem>, SourceError> {
        let file: NewsFile = Self::read_json(&self.news_path).await?;
        Ok(file.news)
    }

    async fn load_comments(&self) -> Result<Vec<Comment>, SourceError> {
        let file: CommentsFile = Self::read_json(&self.comments_path).await?;
        Ok(file.comments)
    }
}

/// A fixed corpus held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    news: Arc<[NewsItem]>,
    comments: Arc<[Comment]>,
}

impl InMemorySource {
    pub fn new(news: Vec<NewsItem>, comments: Vec<Comment>) -> Self {
        Self {
            news: news.into(),
            comments: comments.into(),
        }
    }
}

#[async_trait]
impl NewsSource for InMemorySource {
    async fn load_news(&self) -> Result<Vec<NewsItem>, SourceError> {
        Ok(self.news.to_vec())
    }

    async fn load_comments(&self) -> Result<Vec<Comment>, SourceError> {
        Ok(self.comments.to_vec())
    }
}
