//! Load state for one independently fetched collection.

use std::future::Future;

use serde::Serialize;

use crate::store::{Collection, ContentError};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Resource<T> {
    Idle,
    Loading,
    Ready { data: T },
    /// Visitor-facing message; details go to the log
    Failed { error: String },
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Resource::Idle
    }
}

impl<T> Resource<T> {
    /// Run `fetch` to completion and record the outcome.
    pub async fn load<F>(collection: Collection, fetch: F) -> Self
    where
        F: Future<Output = Result<T, ContentError>>,
    {
        let mut resource = Resource::Idle;
        resource.begin();
        resource.finish(collection, fetch.await);
        resource
    }

    pub fn begin(&mut self) {
        *self = Resource::Loading;
    }

    pub fn finish(&mut self, collection: Collection, outcome: Result<T, ContentError>) {
        *self = match outcome {
            Ok(data) => Resource::Ready { data },
            Err(err) => {
                tracing::error!("Error fetching {}: {}", collection.file_stem(), err);
                Resource::Failed {
                    error: collection.failure_message().to_string(),
                }
            }
        };
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Idle => Resource::Idle,
            Resource::Loading => Resource::Loading,
            Resource::Ready { data } => Resource::Ready { data: f(data) },
            Resource::Failed { error } => Resource::Failed { error },
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Resource::Ready { data } => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failed { error } => Some(error),
            _ => None,
        }
    }
}
