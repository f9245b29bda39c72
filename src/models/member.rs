//! Member model matching the `data/members.json` records.

use serde::{Deserialize, Serialize};

/// A hub member shown in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Free-text role, e.g. "Curator" or "Treasurer"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Member of the hub's governing board
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<bool>,
}

impl Member {
    pub fn is_board(&self) -> bool {
        self.board.unwrap_or(false)
    }

    /// Role text if present and non-empty.
    pub fn role_text(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty())
    }

    /// Caption shown under the member's name.
    pub fn role_label(&self) -> Option<String> {
        let role = self.role_text()?;
        if self.is_board() {
            Some(format!("Board Member - {}", role))
        } else {
            Some(role.to_string())
        }
    }
}
