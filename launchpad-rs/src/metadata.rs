//! Typed view of a note's frontmatter, validated at the scan boundary.
//!
//! Every field is optional. Values of the wrong shape (a list where a string
//! belongs) or outside the known vocabulary (`domain: work`) are treated as
//! absent, so downstream filters only ever deal with explicit presence.

use crate::types::{Domain, NoteStatus, NoteType, Quadrant};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Frontmatter fields Launchpad understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteMetadata {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<NoteType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NoteStatus>,
    #[serde(rename = "eisenhower", skip_serializing_if = "Option::is_none")]
    pub quadrant: Option<Quadrant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Aliases are only consulted for link resolution.
    #[serde(skip)]
    pub aliases: Vec<String>,
}

impl NoteMetadata {
    /// Build metadata from a parsed frontmatter value.
    ///
    /// Returns `None` if the frontmatter is not a mapping.
    pub fn from_yaml(value: &Value) -> Option<Self> {
        let map = value.as_mapping()?;

        Some(Self {
            note_type: parse_field(map, "type"),
            domain: parse_field(map, "domain"),
            status: parse_field(map, "status"),
            quadrant: parse_field(map, "eisenhower"),
            due: string_field(map, "due"),
            created: string_field(map, "created"),
            tags: string_list(map, "tags"),
            store: string_field(map, "store"),
            aliases: string_list(map, "aliases"),
        })
    }
}

/// A non-empty scalar as text. Numbers are accepted so `due: 2024` survives.
fn string_field(map: &Mapping, key: &str) -> Option<String> {
    let text = match map.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn parse_field<T: std::str::FromStr>(map: &Mapping, key: &str) -> Option<T> {
    match map.get(key)? {
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A list of strings, or a single string treated as a one-element list.
fn string_list(map: &Mapping, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(yaml: &str) -> NoteMetadata {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        NoteMetadata::from_yaml(&value).unwrap()
    }

    #[test]
    fn test_full_todo() {
        let m = meta(
            "type: todo\ndomain: business\nstatus: active\neisenhower: do-first\n\
             due: 2024-01-01\ncreated: 2023-12-30\ntags: [business, todo]",
        );
        assert_eq!(m.note_type, Some(NoteType::Todo));
        assert_eq!(m.domain, Some(Domain::Business));
        assert_eq!(m.status, Some(NoteStatus::Active));
        assert_eq!(m.quadrant, Some(Quadrant::DoFirst));
        assert_eq!(m.due.as_deref(), Some("2024-01-01"));
        assert_eq!(m.created.as_deref(), Some("2023-12-30"));
        assert_eq!(m.tags, vec!["business", "todo"]);
    }

    #[test]
    fn test_unknown_values_are_absent() {
        let m = meta("type: meeting\ndomain: work\neisenhower: someday\nstatus: done");
        assert_eq!(m.note_type, None);
        assert_eq!(m.domain, None);
        assert_eq!(m.quadrant, None);
        assert_eq!(m.status, None);
    }

    #[test]
    fn test_wrong_shapes_are_absent() {
        let m = meta("domain: [business]\ndue: {when: soon}\ntags: 3");
        assert_eq!(m.domain, None);
        assert_eq!(m.due, None);
        assert!(m.tags.is_empty());
    }

    #[test]
    fn test_empty_due_is_absent() {
        let m = meta("due: \"\"");
        assert_eq!(m.due, None);
    }

    #[test]
    fn test_single_alias_string() {
        let m = meta("aliases: Roadmap");
        assert_eq!(m.aliases, vec!["Roadmap"]);
    }

    #[test]
    fn test_non_mapping_frontmatter() {
        let value: Value = serde_yaml::from_str("- just\n- a list").unwrap();
        assert!(NoteMetadata::from_yaml(&value).is_none());
    }
}
