use super::PackageRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Scan position within one search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCursor {
    pub term: String,
    /// Offset of the next page to request
    pub offset: u32,
    /// Pages in a row that contributed no new names
    pub consecutive_no_new: u32,
}

impl TermCursor {
    pub fn start(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            offset: 0,
            consecutive_no_new: 0,
        }
    }

    /// Moves past a fetched page that added `added` unique names.
    pub fn advance(&mut self, page_size: u32, added: usize) {
        self.offset = self.offset.saturating_add(page_size);
        if added == 0 {
            self.consecutive_no_new += 1;
        } else {
            self.consecutive_no_new = 0;
        }
    }

    pub fn is_saturated(&self, threshold: u32) -> bool {
        self.consecutive_no_new >= threshold
    }
}

/// Durable ingest progress: everything needed to resume after interruption.
///
/// Every field defaults so checkpoints written before `completed_terms` and
/// `cursor` existed still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngestState {
    #[serde(default)]
    pub packages: Vec<PackageRecord>,
    #[serde(default)]
    pub seen_names: BTreeSet<String>,
    #[serde(default)]
    pub completed_terms: Vec<String>,
    #[serde(default)]
    pub cursor: Option<TermCursor>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl IngestState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds every accumulated name into the dedup set.
    ///
    /// Loaded checkpoints pass through here so a hand-edited or legacy file
    /// can never let an already-kept package be appended twice.
    pub fn reconciled(mut self) -> Self {
        self.seen_names
            .extend(self.packages.iter().map(|record| record.name.clone()));
        self
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn is_target_reached(&self, target: usize) -> bool {
        self.packages.len() >= target
    }

    /// Appends records whose names have not been seen, stopping once `target`
    /// records are held. Returns the number appended.
    pub fn absorb(&mut self, records: Vec<PackageRecord>, target: usize) -> usize {
        let mut added = 0;
        for record in records {
            if self.is_target_reached(target) {
                break;
            }
            if record.name.is_empty() || self.seen_names.contains(&record.name) {
                continue;
            }
            self.seen_names.insert(record.name.clone());
            self.packages.push(record);
            added += 1;
        }
        added
    }

    pub fn is_term_complete(&self, term: &str) -> bool {
        self.completed_terms.iter().any(|t| t == term)
    }

    /// Cursor to continue `term` from: the saved one when it belongs to this
    /// term, otherwise a fresh scan from offset 0.
    pub fn cursor_for(&self, term: &str) -> TermCursor {
        match &self.cursor {
            Some(cursor) if cursor.term == term => cursor.clone(),
            _ => TermCursor::start(term),
        }
    }

    pub fn set_cursor(&mut self, cursor: TermCursor) {
        self.cursor = Some(cursor);
    }

    /// Records that `term` yields nothing more and drops its cursor.
    pub fn complete_term(&mut self, term: &str) {
        if !self.is_term_complete(term) {
            self.completed_terms.push(term.to_string());
        }
        if self.cursor.as_ref().is_some_and(|c| c.term == term) {
            self.cursor = None;
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> PackageRecord {
        PackageRecord::new(name).unwrap()
    }

    #[test]
    fn test_absorb_skips_seen_names() {
        let mut state = IngestState::new();
        let added = state.absorb(vec![record("a"), record("b"), record("a")], 100);
        assert_eq!(added, 2);

        let added = state.absorb(vec![record("b"), record("c")], 100);
        assert_eq!(added, 1);
        assert_eq!(state.len(), 3);
        assert_eq!(state.seen_names.len(), 3);
    }

    #[test]
    fn test_absorb_stops_at_target() {
        let mut state = IngestState::new();
        let added = state.absorb(vec![record("a"), record("b"), record("c")], 2);
        assert_eq!(added, 2);
        assert!(state.is_target_reached(2));
        assert!(!state.seen_names.contains("c"));
    }

    #[test]
    fn test_reconciled_adds_missing_seen_names() {
        let state = IngestState {
            packages: vec![record("express")],
            ..IngestState::default()
        }
        .reconciled();

        assert!(state.seen_names.contains("express"));
    }

    #[test]
    fn test_cursor_for_resumes_matching_term_only() {
        let mut state = IngestState::new();
        let mut cursor = TermCursor::start("node");
        cursor.advance(250, 10);
        state.set_cursor(cursor.clone());

        assert_eq!(state.cursor_for("node"), cursor);
        assert_eq!(state.cursor_for("npm"), TermCursor::start("npm"));
    }

    #[test]
    fn test_complete_term_clears_its_cursor() {
        let mut state = IngestState::new();
        state.set_cursor(TermCursor::start("npm"));
        state.complete_term("npm");
        state.complete_term("npm");

        assert!(state.cursor.is_none());
        assert_eq!(state.completed_terms, vec!["npm".to_string()]);
    }

    #[test]
    fn test_cursor_saturation_resets_on_new_names() {
        let mut cursor = TermCursor::start("npm");
        cursor.advance(250, 0);
        cursor.advance(250, 0);
        cursor.advance(250, 4);
        assert_eq!(cursor.consecutive_no_new, 0);

        cursor.advance(250, 0);
        cursor.advance(250, 0);
        assert!(!cursor.is_saturated(3));
        cursor.advance(250, 0);
        assert!(cursor.is_saturated(3));
        assert_eq!(cursor.offset, 1500);
    }

    #[test]
    fn test_legacy_checkpoint_loads() {
        let json = r#"{"packages": [{"name": "lodash"}], "seen_names": ["lodash"]}"#;
        let state: IngestState = serde_json::from_str(json).unwrap();
        assert_eq!(state.len(), 1);
        assert!(state.completed_terms.is_empty());
        assert!(state.cursor.is_none());
    }
}
