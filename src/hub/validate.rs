//! Field checks for the raw configuration document.
//!
//! A field counts as present when it is truthy: not absent, `null`, `false`,
//! `0` or an empty string. Nested fields are only checked when their parent
//! object is present.

use serde_json::Value;

use super::ConfigIssue;

/// Collect every violation in document order.
pub fn validate(doc: &Value) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for field in ["hubName", "hubShortName", "heroTitle", "heroSubtitle"] {
        if !is_present(doc.get(field)) {
            issues.push(ConfigIssue::required(field));
        }
    }

    match doc.get("contact").filter(|v| is_truthy(v)) {
        None => issues.push(ConfigIssue::required_object("contact")),
        Some(contact) => {
            if !is_present(contact.get("email")) {
                issues.push(ConfigIssue::required("contact.email"));
            }
            match contact.get("address").filter(|v| is_truthy(v)) {
                None => issues.push(ConfigIssue::required_object("contact.address")),
                Some(address) => {
                    for line in ["line1", "line3"] {
                        if !is_present(address.get(line)) {
                            issues.push(ConfigIssue::required(&format!("contact.address.{}", line)));
                        }
                    }
                }
            }
        }
    }

    match doc.get("branding").filter(|v| is_truthy(v)) {
        None => issues.push(ConfigIssue::required_object("branding")),
        Some(branding) => {
            if !is_present(branding.get("logo")) {
                issues.push(ConfigIssue::required("branding.logo"));
            }
        }
    }

    if !is_present(doc.get("social")) {
        issues.push(ConfigIssue::recommended_object(
            "social",
            Some("instagram, linkedin, facebook"),
        ));
    }
    if !is_present(doc.get("recruitmentText")) {
        issues.push(ConfigIssue::recommended_object("recruitmentText", None));
    }

    issues
}

fn is_present(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
