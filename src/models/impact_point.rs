//! Impact point model matching the `data/impact_points.json` records.

use serde::{Deserialize, Serialize};

/// A headline statistic or achievement shown in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactPoint {
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image_path: String,
}
