//! File-backed site store.
//!
//! The site root holds the hub configuration under `config/` and the four
//! content collections under `data/`. Every read goes to disk; caching is the
//! caller's concern.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::de::DeserializeOwned;

/// Location of the hub configuration relative to the site root.
pub const CONFIG_PATH: &str = "config/hub-config.json";

/// One of the independent JSON arrays under `data/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Members,
    Projects,
    Events,
    ImpactPoints,
}

impl Collection {
    /// File stem under `data/`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Collection::Members => "members",
            Collection::Projects => "projects",
            Collection::Events => "events",
            Collection::ImpactPoints => "impact_points",
        }
    }

    pub fn relative_path(&self) -> String {
        format!("data/{}.json", self.file_stem())
    }

    /// Message shown to visitors when the collection cannot be loaded.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Collection::Members => "Failed to load members data.",
            Collection::Projects => "Failed to load projects.",
            Collection::Events => "Failed to load events.",
            Collection::ImpactPoints => "Failed to load impact points.",
        }
    }
}

/// Reading the configuration document failed before parsing.
#[derive(Debug)]
pub enum FetchError {
    NotFound(PathBuf),
    Io(std::io::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(path) => write!(f, "{} not found", path.display()),
            FetchError::Io(err) => write!(f, "read failed: {}", err),
        }
    }
}

impl std::error::Error for FetchError {}

/// A collection could not be fetched or parsed.
#[derive(Debug)]
pub enum ContentError {
    Fetch {
        collection: Collection,
        source: FetchError,
    },
    Parse {
        collection: Collection,
        source: serde_json::Error,
    },
}

impl ContentError {
    pub fn collection(&self) -> Collection {
        match self {
            ContentError::Fetch { collection, .. } | ContentError::Parse { collection, .. } => {
                *collection
            }
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Fetch { collection, source } => {
                write!(f, "failed to fetch {}: {}", collection.file_stem(), source)
            }
            ContentError::Parse { collection, source } => {
                write!(f, "failed to parse {}: {}", collection.file_stem(), source)
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Reads site documents from a root directory.
#[derive(Debug)]
pub struct SiteStore {
    root: PathBuf,
    config_fetches: AtomicUsize,
}

impl SiteStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config_fetches: AtomicUsize::new(0),
        }
    }

    /// Number of times the configuration document has been read.
    pub fn config_fetch_count(&self) -> usize {
        self.config_fetches.load(Ordering::SeqCst)
    }

    /// Read the raw configuration document.
    pub async fn fetch_config_document(&self) -> Result<String, FetchError> {
        self.config_fetches.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Fetching hub configuration...");
        self.read(CONFIG_PATH).await
    }

    /// Fetch and parse one collection, preserving file order.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ContentError> {
        let relative = collection.relative_path();
        tracing::debug!("Fetching {} from JSON file...", collection.file_stem());

        let raw = self.read(&relative).await.map_err(|source| {
            tracing::error!("Error fetching {}: {}", relative, source);
            ContentError::Fetch { collection, source }
        })?;

        let records: Vec<T> = serde_json::from_str(&raw).map_err(|source| {
            tracing::error!("Error parsing {}: {}", relative, source);
            ContentError::Parse { collection, source }
        })?;

        tracing::debug!(
            "Successfully fetched {} records from local JSON ({})",
            records.len(),
            collection.file_stem()
        );
        Ok(records)
    }

    async fn read(&self, relative: &str) -> Result<String, FetchError> {
        let path = self.root.join(relative);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(FetchError::NotFound(path))
            }
            Err(err) => Err(FetchError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_collection_preserves_order() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(
            dir.path().join("data/events.json"),
            r#"[{"id": 2, "title": "B"}, {"id": 1, "title": "A"}]"#,
        )
        .unwrap();

        let store = SiteStore::new(dir.path());
        let events: Vec<Event> = store.fetch_collection(Collection::Events).await.unwrap();

        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["B", "A"]);
    }

    #[tokio::test]
    async fn test_missing_collection_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let store = SiteStore::new(dir.path());

        let err = store
            .fetch_collection::<Event>(Collection::Events)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ContentError::Fetch {
                source: FetchError::NotFound(_),
                ..
            }
        ));
        assert_eq!(err.collection(), Collection::Events);
    }

    #[tokio::test]
    async fn test_malformed_collection_is_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::write(dir.path().join("data/events.json"), "{ not json").unwrap();

        let store = SiteStore::new(dir.path());
        let err = store
            .fetch_collection::<Event>(Collection::Events)
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_config_fetch_counter() {
        let dir = TempDir::new().unwrap();
        let store = SiteStore::new(dir.path());

        assert_eq!(store.config_fetch_count(), 0);
        assert!(store.fetch_config_document().await.is_err());
        assert_eq!(store.config_fetch_count(), 1);
    }
}
