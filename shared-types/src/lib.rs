//! Shared types between the notes frontend and any backend serving it
//!
//! These types are used by both:
//! - The REST collection resource (`/api/notes`)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned note identifier.
///
/// Opaque to the client. The server may send a JSON number or a string; both
/// decode to the same key and render back into URL paths unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for NoteId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integer ids go back out as numbers so the server sees what it issued.
        // "007" or "+5" are not canonical integers and stay strings.
        match self.0.parse::<i64>() {
            Ok(n) if n.to_string() == self.0 => serializer.serialize_i64(n),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Uint(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

// ============================================================================
// Notes
// ============================================================================

/// A persisted note as served by `GET /api/notes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/src/types/generated.ts")]
pub struct Note {
    #[ts(type = "number | string")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Raw server timestamp, see [`parse_timestamp`]
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    pub fn updated(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at)
    }

    pub fn created(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }
}

/// Request body for `POST /api/notes` and `PUT /api/notes/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../notes-ui/src/types/generated.ts")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

// ============================================================================
// Timestamps
// ============================================================================

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a server timestamp.
///
/// Accepts RFC 3339, ISO 8601 without offset and `YYYY-MM-DD HH:MM:SS`.
/// Offsets are dropped after conversion to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Most recently updated first. Unparseable timestamps sort last.
pub fn cmp_by_recency(a: &Note, b: &Note) -> Ordering {
    match (a.updated(), b.updated()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    fn note(id: i64, updated_at: &str) -> Note {
        Note {
            id: NoteId::from(id),
            title: format!("note {id}"),
            content: "body".to_string(),
            created_at: "2024-01-01 09:00:00".to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[test]
    fn test_note_id_accepts_numbers_and_strings() {
        let numeric: NoteId = serde_json::from_str("42").unwrap();
        let text: NoteId = serde_json::from_str("\"42\"").unwrap();
        let uuid: NoteId = serde_json::from_str("\"a1b2\"").unwrap();

        assert_eq!(numeric, text);
        assert_eq!(numeric.as_str(), "42");
        assert_eq!(uuid.to_string(), "a1b2");
    }

    #[test]
    fn test_note_id_serializes_back_to_issued_shape() {
        assert_eq!(serde_json::to_string(&NoteId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&NoteId::from("abc")).unwrap(),
            "\"abc\""
        );
        assert_eq!(serde_json::to_string(&NoteId::from(-3)).unwrap(), "-3");
    }

    #[test]
    fn test_note_id_keeps_non_canonical_numeric_strings() {
        for raw in ["007", "+5", "-0"] {
            let json = serde_json::to_string(&NoteId::from(raw)).unwrap();
            assert_eq!(json, format!("\"{raw}\""));
            let back: NoteId = serde_json::from_str(&json).unwrap();
            assert_eq!(back.as_str(), raw);
        }
    }

    #[test]
    fn test_note_deserialization_from_server_payload() {
        let json = r#"[{
            "id": 1,
            "title": "Groceries",
            "content": "Milk, eggs",
            "created_at": "2024-03-01 10:15:00",
            "updated_at": "2024-03-01 10:15:00"
        }]"#;

        let notes: Vec<Note> = serde_json::from_str(json).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, NoteId::from(1));
        assert_eq!(notes[0].title, "Groceries");
        assert!(notes[0].updated().is_some());
    }

    #[test]
    fn test_draft_serialization() {
        let draft = NoteDraft::new("Title", "Content");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Title", "content": "Content"})
        );
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let server = parse_timestamp("2024-03-01 10:15:00").unwrap();
        let iso = parse_timestamp("2024-03-01T10:15:00").unwrap();
        let fractional = parse_timestamp("2024-03-01T10:15:00.250").unwrap();
        let rfc = parse_timestamp("2024-03-01T11:15:00+01:00").unwrap();

        assert_eq!(server, iso);
        assert_eq!(server, rfc);
        assert!(fractional > server);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("  "), None);
    }

    #[test]
    fn test_recency_ordering_puts_unparseable_last() {
        let mut notes = vec![
            note(1, "2024-01-01 10:00:00"),
            note(2, "not a date"),
            note(3, "2024-02-01 10:00:00"),
        ];
        notes.sort_by(cmp_by_recency);

        let ids: Vec<&str> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        Note::export(&config).unwrap();
        NoteDraft::export(&config).unwrap();
    }
}
