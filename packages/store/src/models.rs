//! # Domain models for pastes
//!
//! Defines the records handed to views by the fetching collaborator (see
//! [`crate::PasteSource`]). These types are `Serialize + Deserialize` so they can
//! be read straight from the backend's JSON responses.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PasteEntry`] | A single stored paste: the backend-assigned `hash`, a user `title`, the `body` payload, the `creation_date` instant, and the `click_count` view counter. |
//! | [`NewPaste`] | The request body for creating a paste: `title` and `body`. The backend assigns everything else. |
//! | [`PasteListing`] | The envelope returned by the listing endpoint: `{ "pastes": [...] }`, ordered by creation date. |
//!
//! ## Boundary validation
//!
//! All five fields of a [`PasteEntry`] are mandatory. Deserialisation goes
//! through an intermediate wire struct so an incomplete backend response is
//! rejected with [`PasteError::MissingField`] naming the first absent (or
//! `null`) field, rather than producing a half-filled entry.
//!
//! ## Identity
//!
//! Two entries with the same `hash` are the same paste. `PartialEq`, `Eq` and
//! `Hash` only look at `hash`, so a refetched entry with a newer `click_count`
//! still compares equal to the stale one. [`PasteListing::dedup_latest`] follows
//! the same rule to collapse repeated entries, keeping the later fields.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PasteError;

/// Bodies longer than this many characters are cut in [`PasteEntry::summary`].
const SUMMARY_BODY_CHARS: usize = 60;

/// A single paste as supplied by the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "PasteEntryWire")]
pub struct PasteEntry {
    /// Opaque identifier assigned by the backend: "ab12Xy9"
    hash: String,
    /// User-supplied label, may be empty
    title: String,
    /// Paste payload (empty in listings)
    body: String,
    /// Creation instant as sent by the backend: "2024-01-01T00:00:00Z"
    creation_date: String,
    /// Number of times the paste has been viewed
    click_count: u64,
}

/// Shape of a paste on the wire, before the required fields are checked.
#[derive(Deserialize)]
struct PasteEntryWire {
    hash: Option<String>,
    title: Option<String>,
    body: Option<String>,
    creation_date: Option<String>,
    click_count: Option<u64>,
}

impl TryFrom<PasteEntryWire> for PasteEntry {
    type Error = PasteError;

    fn try_from(wire: PasteEntryWire) -> Result<Self, Self::Error> {
        PasteEntry::new(
            wire.hash.ok_or(PasteError::MissingField("hash"))?,
            wire.title.ok_or(PasteError::MissingField("title"))?,
            wire.body.ok_or(PasteError::MissingField("body"))?,
            wire.creation_date
                .ok_or(PasteError::MissingField("creation_date"))?,
            wire.click_count
                .ok_or(PasteError::MissingField("click_count"))?,
        )
    }
}

impl PasteEntry {
    /// Build an entry from all five fields. Fails only on an empty `hash`.
    pub fn new(
        hash: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        creation_date: impl Into<String>,
        click_count: u64,
    ) -> Result<Self, PasteError> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(PasteError::EmptyHash);
        }
        Ok(Self {
            hash,
            title: title.into(),
            body: body.into(),
            creation_date: creation_date.into(),
            click_count,
        })
    }

    /// Parse a single entry from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, PasteError> {
        let wire: PasteEntryWire =
            serde_json::from_str(json).map_err(|e| PasteError::Malformed(e.to_string()))?;
        Self::try_from(wire)
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn creation_date(&self) -> &str {
        &self.creation_date
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    /// Parse `creation_date` as an RFC 3339 instant.
    pub fn created_at(&self) -> Result<DateTime<Utc>, PasteError> {
        DateTime::parse_from_rfc3339(&self.creation_date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| PasteError::InvalidDate(self.creation_date.clone()))
    }

    /// One-line description for logs and list rows.
    pub fn summary(&self) -> String {
        let body = if self.body.chars().count() > SUMMARY_BODY_CHARS {
            let head: String = self.body.chars().take(SUMMARY_BODY_CHARS).collect();
            format!("{head}...")
        } else {
            self.body.clone()
        };
        format!("title: {}, hash: {}, body: {}", self.title, self.hash, body)
    }

    /// Fresh copy carrying a new view count. Only the owner of persistence
    /// hands these out.
    pub(crate) fn with_click_count(&self, click_count: u64) -> Self {
        Self {
            click_count,
            ..self.clone()
        }
    }

    /// Copy without the payload, as the listing endpoint sends it.
    pub(crate) fn without_body(&self) -> Self {
        Self {
            body: String::new(),
            ..self.clone()
        }
    }
}

impl PartialEq for PasteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for PasteEntry {}

impl Hash for PasteEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

/// Request body of the create endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPaste {
    pub title: String,
    pub body: String,
}

impl NewPaste {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, PasteError> {
        serde_json::to_string(self).map_err(|e| PasteError::Malformed(e.to_string()))
    }
}

/// Response body of the listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PasteListing {
    pub pastes: Vec<PasteEntry>,
}

impl PasteListing {
    pub fn new(pastes: Vec<PasteEntry>) -> Self {
        Self { pastes }
    }

    /// Parse a listing; any incomplete entry fails the whole listing.
    pub fn from_json(json: &str) -> Result<Self, PasteError> {
        serde_json::from_str(json).map_err(|e| PasteError::Malformed(e.to_string()))
    }

    /// Collapse entries sharing a `hash`. The first occurrence keeps its
    /// position, the last occurrence supplies the fields.
    pub fn dedup_latest(self) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut pastes: Vec<PasteEntry> = Vec::with_capacity(self.pastes.len());
        for entry in self.pastes {
            match positions.get(entry.hash()) {
                Some(&idx) => pastes[idx] = entry,
                None => {
                    positions.insert(entry.hash.clone(), pastes.len());
                    pastes.push(entry);
                }
            }
        }
        Self { pastes }
    }

    pub fn len(&self) -> usize {
        self.pastes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pastes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PasteEntry> {
        self.pastes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> PasteEntry {
        PasteEntry::new("ab12", "note", "hello", "2024-01-01T00:00:00Z", 0).unwrap()
    }

    #[test]
    fn test_new_reads_back_fields() {
        let entry = sample();
        assert_eq!(entry.hash(), "ab12");
        assert_eq!(entry.title(), "note");
        assert_eq!(entry.body(), "hello");
        assert_eq!(entry.creation_date(), "2024-01-01T00:00:00Z");
        assert_eq!(entry.click_count(), 0);
    }

    #[test]
    fn test_new_rejects_empty_hash() {
        let err = PasteEntry::new("", "note", "hello", "2024-01-01T00:00:00Z", 0).unwrap_err();
        assert_eq!(err, PasteError::EmptyHash);
    }

    #[test]
    fn test_empty_title_is_allowed() {
        let entry = PasteEntry::new("ab12", "", "hello", "2024-01-01T00:00:00Z", 3).unwrap();
        assert_eq!(entry.title(), "");
    }

    #[test]
    fn test_from_json_complete() {
        let json = r#"{
            "hash": "ab12",
            "title": "note",
            "body": "hello",
            "creation_date": "2024-01-01T00:00:00Z",
            "click_count": 0
        }"#;
        let entry = PasteEntry::from_json(json).unwrap();
        assert_eq!(entry.hash(), "ab12");
        assert_eq!(entry.body(), "hello");
        assert_eq!(entry.click_count(), 0);
    }

    #[test]
    fn test_from_json_rejects_each_missing_field() {
        let fields = [
            ("hash", r#""hash": "ab12""#),
            ("title", r#""title": "note""#),
            ("body", r#""body": "hello""#),
            ("creation_date", r#""creation_date": "2024-01-01T00:00:00Z""#),
            ("click_count", r#""click_count": 0"#),
        ];
        for (missing, _) in &fields {
            let present: Vec<&str> = fields
                .iter()
                .filter(|(name, _)| name != missing)
                .map(|(_, json)| *json)
                .collect();
            let json = format!("{{{}}}", present.join(","));
            let err = PasteEntry::from_json(&json).unwrap_err();
            assert_eq!(err, PasteError::MissingField(*missing));
        }
    }

    #[test]
    fn test_from_json_null_date_is_missing() {
        // The backend column is nullable; a null date is not a valid entry.
        let json = r#"{"hash":"ab12","title":"t","body":"","creation_date":null,"click_count":2}"#;
        let err = PasteEntry::from_json(json).unwrap_err();
        assert_eq!(err, PasteError::MissingField("creation_date"));
    }

    #[test]
    fn test_from_json_negative_click_count_is_malformed() {
        let json = r#"{"hash":"ab12","title":"t","body":"","creation_date":"2024-01-01T00:00:00Z","click_count":-1}"#;
        assert!(matches!(
            PasteEntry::from_json(json),
            Err(PasteError::Malformed(_))
        ));
    }

    #[test]
    fn test_identity_is_hash_only() {
        let a = sample();
        let b = PasteEntry::new("ab12", "renamed", "hello", "2024-01-01T00:00:00Z", 41).unwrap();
        let c = PasteEntry::new("zz99", "note", "hello", "2024-01-01T00:00:00Z", 0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<PasteEntry> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_created_at() {
        let entry = sample();
        let created = entry.created_at().unwrap();
        assert_eq!(created.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let bad = PasteEntry::new("ab12", "t", "b", "yesterday", 0).unwrap();
        assert_eq!(
            bad.created_at().unwrap_err(),
            PasteError::InvalidDate("yesterday".to_string())
        );
    }

    #[test]
    fn test_summary_truncates_long_body() {
        let body = "x".repeat(80);
        let entry = PasteEntry::new("ab12", "long", body, "2024-01-01T00:00:00Z", 0).unwrap();
        let summary = entry.summary();
        assert!(summary.starts_with("title: long, hash: ab12, body: "));
        assert!(summary.ends_with(&format!("{}...", "x".repeat(60))));

        assert_eq!(sample().summary(), "title: note, hash: ab12, body: hello");
    }

    #[test]
    fn test_listing_from_json() {
        let json = r#"{"pastes":[
            {"hash":"a1","title":"first","body":"","creation_date":"2024-01-01T00:00:00Z","click_count":1},
            {"hash":"b2","title":"second","body":"","creation_date":"2024-01-02T00:00:00Z","click_count":0}
        ]}"#;
        let listing = PasteListing::from_json(json).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.pastes[1].title(), "second");
    }

    #[test]
    fn test_listing_rejects_incomplete_entry() {
        let json = r#"{"pastes":[{"hash":"a1","title":"first","body":""}]}"#;
        assert!(matches!(
            PasteListing::from_json(json),
            Err(PasteError::Malformed(_))
        ));
    }

    #[test]
    fn test_dedup_latest_keeps_position_and_newest_fields() {
        let listing = PasteListing::new(vec![
            PasteEntry::new("a1", "first", "", "2024-01-01T00:00:00Z", 1).unwrap(),
            PasteEntry::new("b2", "second", "", "2024-01-02T00:00:00Z", 0).unwrap(),
            PasteEntry::new("a1", "first", "", "2024-01-01T00:00:00Z", 5).unwrap(),
        ]);
        let deduped = listing.dedup_latest();
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped.pastes[0].hash(), "a1");
        assert_eq!(deduped.pastes[0].click_count(), 5);
        assert_eq!(deduped.pastes[1].hash(), "b2");
    }

    #[test]
    fn test_new_paste_wire_shape() {
        let json = NewPaste::new("notes", "hello").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({"title": "notes", "body": "hello"}));
    }
}
