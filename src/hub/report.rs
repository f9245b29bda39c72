//! Operator-facing remediation report for an unusable configuration.

use serde::Serialize;

use super::{ConfigFailure, FailureKind, Severity};

pub const QUICK_FIX_COMMAND: &str =
    "cp public/config/hub-config.template.json public/config/hub-config.json";

pub const HELP_STEPS: [&str; 4] = [
    "Copy the template: use the quick fix command to create your config file",
    "Edit the config: open public/config/hub-config.json and customize it for your hub",
    "Check the README: see the full documentation for all available options",
    "Example files: look at the template files in public/data/ for data structure examples",
];

pub const EXPECTED_LAYOUT: &str = "public/
├── config/
│   ├── hub-config.json          <- your configuration
│   └── hub-config.template.json <- copy this template
└── data/
    ├── members.json
    ├── projects.json
    ├── impact_points.json
    └── events.json";

/// Issues grouped by severity plus manual recovery instructions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationReport {
    pub kind: FailureKind,
    pub file_issues: Vec<String>,
    pub required_missing: Vec<String>,
    pub recommended_missing: Vec<String>,
    pub quick_fix: &'static str,
    pub help: Vec<&'static str>,
    pub expected_layout: &'static str,
}

impl RemediationReport {
    pub fn from_failure(failure: &ConfigFailure) -> Self {
        let messages = |severity: Severity| {
            failure
                .issues
                .iter()
                .filter(|i| i.severity == severity)
                .map(|i| i.message.clone())
                .collect::<Vec<_>>()
        };

        Self {
            kind: failure.kind,
            file_issues: messages(Severity::File),
            required_missing: messages(Severity::Required),
            recommended_missing: messages(Severity::Recommended),
            quick_fix: QUICK_FIX_COMMAND,
            help: HELP_STEPS.to_vec(),
            expected_layout: EXPECTED_LAYOUT,
        }
    }
}
