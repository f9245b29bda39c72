//! Data models for the hub site.
//!
//! These models mirror the JSON documents under `config/` and `data/` field for field.

mod event;
mod hub_config;
mod impact_point;
mod member;
mod project;

pub use event::*;
pub use hub_config::*;
pub use impact_point::*;
pub use member::*;
pub use project::*;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
