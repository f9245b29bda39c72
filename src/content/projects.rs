//! Project categories and filtering.

use serde::Serialize;

use crate::models::Project;

/// Pseudo-category selecting every project.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Absent, empty and `all` select everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => CategoryFilter::All,
            Some(name) => CategoryFilter::Named(name.to_string()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => project.category == *name,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Distinct categories in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !seen.iter().any(|c| *c == project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

pub fn filter_projects<'a>(
    projects: &'a [Project],
    filter: &'a CategoryFilter,
) -> impl Iterator<Item = &'a Project> {
    projects.iter().filter(move |p| filter.matches(p))
}

/// Projects after filtering, with the categories of the full collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGallery {
    pub categories: Vec<String>,
    pub active_category: String,
    pub projects: Vec<Project>,
}

impl ProjectGallery {
    pub fn new(all: Vec<Project>, filter: &CategoryFilter) -> Self {
        let categories = categories(&all);
        let projects = filter_projects(&all, filter).cloned().collect();
        Self {
            categories,
            active_category: filter.label().to_string(),
            projects,
        }
    }
}
