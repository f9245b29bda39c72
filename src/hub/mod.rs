//! Hub configuration service.
//!
//! Fetches `config/hub-config.json` once, validates it, substitutes
//! `{fieldName}` placeholders and keeps the result for the life of the
//! process. Failed loads are not cached.

mod report;
pub mod template;
pub mod validate;

pub use report::*;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::errors::codes;
use crate::models::HubConfig;
use crate::store::SiteStore;

/// How serious a configuration issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// The document itself is missing or unreadable
    File,
    Required,
    Recommended,
}

/// A single problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            severity: Severity::Required,
            message: format!("{} is required in hub-config.json", field),
        }
    }

    pub fn required_object(field: &str) -> Self {
        Self {
            field: field.to_string(),
            severity: Severity::Required,
            message: format!("{} object is required in hub-config.json", field),
        }
    }

    pub fn recommended_object(field: &str, hint: Option<&str>) -> Self {
        let mut message = format!("{} object is recommended in hub-config.json", field);
        if let Some(hint) = hint {
            message.push_str(&format!(" ({})", hint));
        }
        Self {
            field: field.to_string(),
            severity: Severity::Recommended,
            message,
        }
    }

    pub fn file(message: String) -> Self {
        Self {
            field: crate::store::CONFIG_PATH.to_string(),
            severity: Severity::File,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    Missing,
    Malformed,
    Invalid,
}

impl FailureKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            FailureKind::Missing => codes::CONFIG_MISSING,
            FailureKind::Malformed => codes::CONFIG_MALFORMED,
            FailureKind::Invalid => codes::CONFIG_INVALID,
        }
    }
}

/// Why the configuration could not be used.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigFailure {
    pub kind: FailureKind,
    pub issues: Vec<ConfigIssue>,
}

impl ConfigFailure {
    pub fn missing() -> Self {
        Self {
            kind: FailureKind::Missing,
            issues: vec![ConfigIssue::file(
                "Configuration file not found at /config/hub-config.json. Please copy hub-config.template.json to hub-config.json and customize it for your hub.".to_string(),
            )],
        }
    }

    pub fn malformed(detail: &str) -> Self {
        Self {
            kind: FailureKind::Malformed,
            issues: vec![ConfigIssue::file(format!(
                "Failed to parse hub-config.json: {}. Please check that the file contains valid JSON.",
                detail
            ))],
        }
    }

    pub fn invalid(issues: Vec<ConfigIssue>) -> Self {
        Self {
            kind: FailureKind::Invalid,
            issues,
        }
    }

    pub fn summary(&self) -> String {
        match self.kind {
            FailureKind::Missing | FailureKind::Malformed => self
                .issues
                .first()
                .map(|i| i.message.clone())
                .unwrap_or_default(),
            FailureKind::Invalid => format!(
                "hub-config.json has {} configuration issue(s)",
                self.issues.len()
            ),
        }
    }
}

impl std::fmt::Display for ConfigFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

impl std::error::Error for ConfigFailure {}

/// Whether recommended-field gaps block the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationPolicy {
    pub strict_recommended: bool,
}

impl ValidationPolicy {
    fn blocks(&self, issue: &ConfigIssue) -> bool {
        match issue.severity {
            Severity::Recommended => self.strict_recommended,
            Severity::File | Severity::Required => true,
        }
    }
}

/// A validated, substituted configuration.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedConfig {
    /// Substituted document exactly as served, unknown fields included
    pub document: Value,
    #[serde(skip)]
    pub config: HubConfig,
    /// Non-blocking recommended-field gaps
    pub warnings: Vec<ConfigIssue>,
}

/// Owns the one configuration instance shared by every handler.
#[derive(Debug)]
pub struct HubConfigService {
    store: Arc<SiteStore>,
    policy: ValidationPolicy,
    cell: OnceCell<Arc<LoadedConfig>>,
}

impl HubConfigService {
    pub fn new(store: Arc<SiteStore>, policy: ValidationPolicy) -> Self {
        Self {
            store,
            policy,
            cell: OnceCell::new(),
        }
    }

    /// Return the cached configuration, loading it on first use.
    ///
    /// Concurrent first calls share a single fetch.
    pub async fn load(&self) -> Result<Arc<LoadedConfig>, ConfigFailure> {
        self.cell
            .get_or_try_init(|| self.fetch_and_validate())
            .await
            .map(Arc::clone)
    }

    pub fn cached(&self) -> Option<Arc<LoadedConfig>> {
        self.cell.get().cloned()
    }

    /// Drop the cached configuration so the next `load` fetches again.
    pub fn reset(&mut self) {
        self.cell.take();
    }

    async fn fetch_and_validate(&self) -> Result<Arc<LoadedConfig>, ConfigFailure> {
        let raw = match self.store.fetch_config_document().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("Hub configuration unavailable: {}", err);
                return Err(ConfigFailure::missing());
            }
        };

        let document: Value = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Hub configuration is not valid JSON: {}", e);
            ConfigFailure::malformed(&e.to_string())
        })?;

        if document.is_null() {
            return Err(ConfigFailure::malformed("the document is null"));
        }

        let issues = validate::validate(&document);
        if issues.iter().any(|i| self.policy.blocks(i)) {
            tracing::error!("Hub configuration has {} issue(s)", issues.len());
            return Err(ConfigFailure::invalid(issues));
        }
        for warning in &issues {
            tracing::warn!("{}", warning.message);
        }

        // Every required top-level field was present, so this is an object.
        let empty = serde_json::Map::new();
        let context = document.as_object().unwrap_or(&empty);
        let substituted = template::substitute(&document, context);
        let config: HubConfig = serde_json::from_value(substituted.clone()).map_err(|e| {
            ConfigFailure::invalid(vec![ConfigIssue::file(format!(
                "hub-config.json has an unexpected shape: {}",
                e
            ))])
        })?;

        tracing::info!("Successfully loaded configuration for: {}", config.hub_name);

        Ok(Arc::new(LoadedConfig {
            document: substituted,
            config,
            warnings: issues,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn valid_document() -> Value {
        json!({
            "hubName": "Berlin",
            "hubShortName": "BER",
            "region": "Europe",
            "country": "Germany",
            "heroTitle": "Global Shapers {hubName}",
            "heroSubtitle": "Young leaders in {region}",
            "contact": {
                "email": "hub@example.org",
                "address": {"line1": "Street 1", "line2": "", "line3": "10115 {hubName}"}
            },
            "social": {"instagram": "https://instagram.com/{hubShortName}"},
            "recruitmentText": {"title": "Join {hubName}", "subtitle": "", "additionalInfo": ""},
            "branding": {"logo": "/logo.svg"},
            "extras": ["{hubName}", {"note": "{unknown}"}]
        })
    }

    fn site(document: Option<&str>) -> (TempDir, Arc<SiteStore>) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        if let Some(doc) = document {
            std::fs::write(dir.path().join(crate::store::CONFIG_PATH), doc).unwrap();
        }
        let store = Arc::new(SiteStore::new(dir.path()));
        (dir, store)
    }

    fn service(store: &Arc<SiteStore>) -> HubConfigService {
        HubConfigService::new(store.clone(), ValidationPolicy::default())
    }

    #[tokio::test]
    async fn test_load_substitutes_placeholders() {
        let (_dir, store) = site(Some(&valid_document().to_string()));
        let loaded = service(&store).load().await.unwrap();

        assert_eq!(loaded.config.hero_title, "Global Shapers Berlin");
        assert_eq!(loaded.config.hero_subtitle, "Young leaders in Europe");
        assert_eq!(loaded.config.contact.address.line3, "10115 Berlin");
        assert_eq!(loaded.document["extras"][0], "Berlin");
        assert_eq!(loaded.document["extras"][1]["note"], "{unknown}");
        assert!(loaded.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_loads_hit_cache() {
        let (_dir, store) = site(Some(&valid_document().to_string()));
        let service = service(&store);

        let first = service.load().await.unwrap();
        let second = service.load().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.config_fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_fetch() {
        let (_dir, store) = site(Some(&valid_document().to_string()));
        let service = Arc::new(service(&store));

        let (a, b) = tokio::join!(service.load(), service.load());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(store.config_fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let (_dir, store) = site(None);
        let failure = service(&store).load().await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Missing);
        assert_eq!(failure.issues.len(), 1);
        assert!(failure.issues[0].message.contains("hub-config.template.json"));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let (_dir, store) = site(Some("{ \"hubName\": "));
        let failure = service(&store).load().await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Malformed);
        assert_eq!(failure.issues.len(), 1);
        assert!(failure.issues[0].message.starts_with("Failed to parse hub-config.json"));
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (dir, store) = site(None);
        let service = service(&store);
        assert!(service.load().await.is_err());

        std::fs::write(
            dir.path().join(crate::store::CONFIG_PATH),
            valid_document().to_string(),
        )
        .unwrap();
        assert!(service.load().await.is_ok());
        assert_eq!(store.config_fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_required_fields_block_and_list_everything() {
        let mut doc = valid_document();
        let obj = doc.as_object_mut().unwrap();
        obj.remove("hubName");
        obj.remove("branding");
        obj.remove("social");
        let (_dir, store) = site(Some(&doc.to_string()));

        let service = service(&store);
        let failure = service.load().await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Invalid);
        let fields: Vec<_> = failure.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["hubName", "branding", "social"]);
        assert!(service.cached().is_none());
    }

    #[tokio::test]
    async fn test_null_optional_fields_load() {
        let mut doc = valid_document();
        doc["region"] = Value::Null;
        doc["contact"]["address"]["line2"] = Value::Null;
        doc["social"]["facebook"] = Value::Null;
        let (_dir, store) = site(Some(&doc.to_string()));

        let loaded = service(&store).load().await.unwrap();
        assert_eq!(loaded.config.region, "");
        assert_eq!(loaded.config.hero_subtitle, "Young leaders in {region}");
        assert!(loaded.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_recommended_gaps_are_warnings_by_default() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("social");
        let (_dir, store) = site(Some(&doc.to_string()));

        let loaded = service(&store).load().await.unwrap();
        assert_eq!(loaded.warnings.len(), 1);
        assert_eq!(loaded.warnings[0].severity, Severity::Recommended);
    }

    #[tokio::test]
    async fn test_strict_policy_blocks_recommended_gaps() {
        let mut doc = valid_document();
        doc.as_object_mut().unwrap().remove("recruitmentText");
        let (_dir, store) = site(Some(&doc.to_string()));

        let service = HubConfigService::new(
            store,
            ValidationPolicy {
                strict_recommended: true,
            },
        );
        let failure = service.load().await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Invalid);
        assert_eq!(failure.issues[0].field, "recruitmentText");
    }

    #[tokio::test]
    async fn test_non_object_document_reports_every_required_field() {
        for raw in ["[]", "\"x\"", "5"] {
            let (_dir, store) = site(Some(raw));
            let failure = service(&store).load().await.unwrap_err();

            assert_eq!(failure.kind, FailureKind::Invalid);
            let required = failure
                .issues
                .iter()
                .filter(|i| i.severity == Severity::Required)
                .count();
            assert_eq!(required, 6, "document {}", raw);
        }
    }

    #[tokio::test]
    async fn test_null_document_is_malformed() {
        let (_dir, store) = site(Some("null"));
        let failure = service(&store).load().await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Malformed);
    }

    #[tokio::test]
    async fn test_reset_forces_refetch() {
        let (_dir, store) = site(Some(&valid_document().to_string()));
        let mut service = service(&store);

        service.load().await.unwrap();
        service.reset();
        assert!(service.cached().is_none());
        service.load().await.unwrap();
        assert_eq!(store.config_fetch_count(), 2);
    }
}
