//! Hub configuration model matching `config/hub-config.json`.
//!
//! Presence of required fields is checked on the raw document by
//! [`crate::hub::validate`] before this typed view is built, so the fields
//! here carry serde defaults only for the optional parts.

use serde::{Deserialize, Serialize};

/// Fallback copy for the projects blurb.
pub const DEFAULT_PROJECTS_DESCRIPTION: &str = "We drive positive change through innovative projects that address local challenges and contribute to global dialogue. Our initiatives span various sectors, always focused on creating measurable impact.";

/// Fallback copy for the recruitment pitch.
pub const DEFAULT_RECRUITMENT_TITLE: &str = "Are you a purpose-driven leader?";
pub const DEFAULT_RECRUITMENT_SUBTITLE: &str = "Apply to our Global Shapers Hub! We seek diverse young leaders passionate about making a societal impact.";
pub const DEFAULT_RECRUITMENT_INFO: &str = "Supporting one of our projects as a volunteer or participating in one of our events before your application is considered a huge plus during the recruitment process. Please check out our Calendar or reach out to our Recruitment Officer to learn more about our current projects and events.";

/// The hub's identity, contact details, branding and copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubConfig {
    pub hub_name: String,
    pub hub_short_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub country: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_text: Option<RecruitmentText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_section: Option<AboutSection>,
    pub branding: Branding,
}

impl HubConfig {
    /// Recruitment copy with fallbacks for anything left blank.
    pub fn recruitment(&self) -> RecruitmentText {
        let given = self.recruitment_text.clone().unwrap_or_default();
        RecruitmentText {
            title: or_default(given.title, DEFAULT_RECRUITMENT_TITLE),
            subtitle: or_default(given.subtitle, DEFAULT_RECRUITMENT_SUBTITLE),
            additional_info: or_default(given.additional_info, DEFAULT_RECRUITMENT_INFO),
        }
    }

    pub fn projects_description(&self) -> &str {
        self.about_section
            .as_ref()
            .map(|a| a.projects_description.as_str())
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_PROJECTS_DESCRIPTION)
    }
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub address: PostalAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donation: Option<Donation>,
}

/// Three free-text lines; `line1` and `line3` are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub line1: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub line2: String,
    pub line3: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub banking_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub instagram: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub facebook: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentText {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub additional_info: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub projects_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub logo: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub primary_color: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub secondary_color: String,
}
