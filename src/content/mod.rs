//! Content fetch and shaping.
//!
//! Each collection is fetched independently so a failure in one never
//! affects the others.

pub mod members;
pub mod projects;
mod resource;

pub use resource::*;

use crate::models::{Event, ImpactPoint, Member, Project};
use crate::store::{Collection, SiteStore};

/// All four collections, each in its own load state.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub members: Resource<members::MemberRoster>,
    pub projects: Resource<projects::ProjectGallery>,
    pub events: Resource<Vec<Event>>,
    pub impact_points: Resource<Vec<ImpactPoint>>,
}

impl SiteContent {
    /// Load every collection concurrently.
    pub async fn load(store: &SiteStore, category: &projects::CategoryFilter) -> Self {
        let (member_list, project_list, events, impact_points) = tokio::join!(
            Resource::load(
                Collection::Members,
                store.fetch_collection::<Member>(Collection::Members)
            ),
            Resource::load(
                Collection::Projects,
                store.fetch_collection::<Project>(Collection::Projects)
            ),
            Resource::load(
                Collection::Events,
                store.fetch_collection::<Event>(Collection::Events)
            ),
            Resource::load(
                Collection::ImpactPoints,
                store.fetch_collection::<ImpactPoint>(Collection::ImpactPoints)
            ),
        );

        Self {
            members: member_list.map(members::MemberRoster::from_unordered),
            projects: project_list.map(|all| projects::ProjectGallery::new(all, category)),
            events,
            impact_points,
        }
    }
}
