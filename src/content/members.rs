//! Member roster ordering.
//!
//! Named leadership roles come first in a fixed order, then other board
//! members, then members with a role, then everyone else. Names break ties.

use std::cmp::Ordering;

use serde::Serialize;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::Member;

const CURATOR: u32 = 1;
const VICE_CURATOR: u32 = 2;
const IMPACT_OFFICER: u32 = 3;
const BOARD: u32 = 10;
const TITLED: u32 = 30;
const UNTITLED: u32 = 100;

/// Sort tier for a member; lower sorts first.
pub fn role_priority(member: &Member) -> u32 {
    let role = member
        .role
        .as_deref()
        .map(|r| r.trim().to_lowercase())
        .unwrap_or_default();

    match role.as_str() {
        "curator" => CURATOR,
        "vice-curator" => VICE_CURATOR,
        "impact officer" => IMPACT_OFFICER,
        _ if member.is_board() => BOARD,
        _ if member.role_text().is_some() => TITLED,
        _ => UNTITLED,
    }
}

/// Base letters only: decomposed, accents dropped, lowercased.
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collation-style comparison: base letters, then accents, then case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Stable sort into roster order.
pub fn order_members(members: &mut [Member]) {
    members.sort_by(|a, b| {
        role_priority(a)
            .cmp(&role_priority(b))
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

/// A member as shown in the roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(flatten)]
    pub member: Member,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_label: Option<String>,
}

impl From<Member> for RosterEntry {
    fn from(member: Member) -> Self {
        let role_label = member.role_label();
        Self { member, role_label }
    }
}

/// Ordered roster, also split into the leading board block and everyone after it.
#[derive(Debug, Clone, Serialize)]
pub struct MemberRoster {
    pub ordered: Vec<RosterEntry>,
    pub board: Vec<RosterEntry>,
    pub members: Vec<RosterEntry>,
}

impl MemberRoster {
    pub fn from_unordered(mut all: Vec<Member>) -> Self {
        order_members(&mut all);
        let ordered: Vec<RosterEntry> = all.into_iter().map(RosterEntry::from).collect();

        let board_end = ordered
            .iter()
            .position(|e| !e.member.is_board())
            .unwrap_or(ordered.len());
        let board = ordered[..board_end].to_vec();
        let members = ordered[board_end..].to_vec();

        Self {
            ordered,
            board,
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, role: Option<&str>, board: Option<bool>) -> Member {
        Member {
            id: 0,
            name: name.to_string(),
            photo: String::new(),
            linkedin: None,
            email: None,
            website: None,
            role: role.map(str::to_string),
            description: None,
            board,
        }
    }

    fn names(members: &[Member]) -> Vec<&str> {
        members.iter().map(|m| m.name.as_str()).collect()
    }

    fn entry_names(entries: &[RosterEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.member.name.as_str()).collect()
    }

    #[test]
    fn test_priorities() {
        assert_eq!(role_priority(&member("a", Some("  CURATOR "), None)), 1);
        assert_eq!(role_priority(&member("a", Some("Vice-Curator"), Some(true))), 2);
        assert_eq!(role_priority(&member("a", Some("impact officer"), None)), 3);
        assert_eq!(role_priority(&member("a", Some("Treasurer"), Some(true))), 10);
        assert_eq!(role_priority(&member("a", None, Some(true))), 10);
        assert_eq!(role_priority(&member("a", Some("Photographer"), None)), 30);
        assert_eq!(role_priority(&member("a", Some(""), Some(false))), 100);
        assert_eq!(role_priority(&member("a", None, None)), 100);
    }

    #[test]
    fn test_leadership_then_board_then_rest() {
        let mut members = vec![
            member("Bob", None, None),
            member("Ann", Some("Treasurer"), Some(true)),
            member("Zed", Some("Curator"), None),
        ];
        order_members(&mut members);
        assert_eq!(names(&members), ["Zed", "Ann", "Bob"]);
    }

    #[test]
    fn test_same_tier_sorts_by_name_not_role() {
        let mut members = vec![
            member("Yara", Some("Treasurer"), Some(true)),
            member("Carl", Some("Secretary"), Some(true)),
        ];
        order_members(&mut members);
        assert_eq!(names(&members), ["Carl", "Yara"]);
    }

    #[test]
    fn test_name_comparison_ignores_case_first() {
        let mut members = vec![
            member("Bob", None, None),
            member("bob", None, None),
            member("alice", None, None),
            member("Carol", None, None),
        ];
        order_members(&mut members);
        assert_eq!(names(&members), ["alice", "bob", "Bob", "Carol"]);
    }

    #[test]
    fn test_accented_names_sort_with_base_letters() {
        let mut members = vec![
            member("Mz", None, None),
            member("Müller", None, None),
            member("Zoe", None, None),
            member("Émile", None, None),
        ];
        order_members(&mut members);
        assert_eq!(names(&members), ["Émile", "Müller", "Mz", "Zoe"]);
    }

    #[test]
    fn test_accent_breaks_tie_after_base_letters() {
        assert_eq!(compare_names("Rene", "René"), Ordering::Less);
        assert_eq!(compare_names("rené", "René"), Ordering::Less);
        assert_eq!(compare_names("Ölund", "Olafsen"), Ordering::Greater);
    }

    #[test]
    fn test_roster_split_on_leading_board_block() {
        let roster = MemberRoster::from_unordered(vec![
            member("Eve", Some("Photographer"), None),
            member("Zed", Some("Curator"), Some(true)),
            member("Dan", None, Some(true)),
            member("Amy", None, None),
        ]);

        assert_eq!(entry_names(&roster.ordered), ["Zed", "Dan", "Eve", "Amy"]);
        assert_eq!(entry_names(&roster.board), ["Zed", "Dan"]);
        assert_eq!(entry_names(&roster.members), ["Eve", "Amy"]);
    }

    #[test]
    fn test_non_board_leader_keeps_roster_order() {
        let roster = MemberRoster::from_unordered(vec![
            member("Dan", None, Some(true)),
            member("Zed", Some("Curator"), None),
        ]);

        assert!(roster.board.is_empty());
        assert_eq!(entry_names(&roster.members), ["Zed", "Dan"]);
    }

    #[test]
    fn test_roster_entries_carry_role_label() {
        let roster = MemberRoster::from_unordered(vec![
            member("Ann", Some("Treasurer"), Some(true)),
            member("Eve", Some("Photographer"), None),
            member("Bob", None, None),
        ]);

        let labels: Vec<_> = roster.ordered.iter().map(|e| e.role_label.as_deref()).collect();
        assert_eq!(
            labels,
            [Some("Board Member - Treasurer"), Some("Photographer"), None]
        );

        let json = serde_json::to_value(&roster.ordered[0]).unwrap();
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["roleLabel"], "Board Member - Treasurer");
    }
}
