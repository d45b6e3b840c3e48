//! JSON backup export and import
//!
//! The backup is a pretty-printed snapshot of all five collections plus the
//! cover page. Importing the exact output of an export reconstructs an
//! equivalent state, entity for entity.

use serde::{Deserialize, Serialize};

use crate::core::state::AppState;
use crate::entities::{Chapter, CoverPage, MethodologyItem, Note, Reference, Task};
use crate::json::JsonSyntaxError;

/// Default backup file name
pub const BACKUP_FILE_NAME: &str = "thesis_backup.json";

/// The backup payload
///
/// Missing collection keys deserialize to empty lists; a missing cover page
/// deserializes to `None` and leaves the current one unchanged on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    #[serde(default)]
    pub chapters: Vec<Chapter>,

    #[serde(rename = "methodologyItems", default)]
    pub methodology_items: Vec<MethodologyItem>,

    #[serde(default)]
    pub references: Vec<Reference>,

    #[serde(default)]
    pub tasks: Vec<Task>,

    #[serde(default)]
    pub notes: Vec<Note>,

    #[serde(rename = "coverPage", default, skip_serializing_if = "Option::is_none")]
    pub cover_page: Option<CoverPage>,
}

impl Backup {
    /// Snapshot the current state
    pub fn from_state(state: &AppState) -> Self {
        Self {
            chapters: state.chapters.clone(),
            methodology_items: state.methodology.clone(),
            references: state.references.clone(),
            tasks: state.tasks.clone(),
            notes: state.notes.clone(),
            cover_page: Some(state.cover_page.clone()),
        }
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> String {
        // A snapshot of plain data cannot fail to encode
        serde_json::to_string_pretty(self).expect("backup serialization is infallible")
    }

    /// Parse a backup from raw text
    ///
    /// Any parse failure is an "invalid backup file" diagnostic; nothing is
    /// applied until [`Backup::apply`] is called.
    pub fn parse(raw: &str, filename: &str) -> Result<Self, JsonSyntaxError> {
        serde_json::from_str(raw).map_err(|e| JsonSyntaxError::from_serde_error(&e, raw, filename))
    }

    /// Replace the state's collections wholesale with this backup
    ///
    /// The cover page is replaced only when the payload carries one; the
    /// dark-mode flag is a workspace preference and is not part of backups.
    pub fn apply(self, state: &mut AppState) {
        state.chapters = self.chapters;
        state.methodology = self.methodology_items;
        state.references = self.references;
        state.tasks = self.tasks;
        state.notes = self.notes;
        if let Some(cover) = self.cover_page {
            state.cover_page = cover;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::entities::{MethodologyKind, NoteColor, ReferenceKind, TaskPriority};

    fn sample_state() -> AppState {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.add_methodology(MethodologyKind::Hypothesis, "H1".to_string());
        state.add_reference(
            "X".to_string(),
            "Smith".to_string(),
            "2020".to_string(),
            ReferenceKind::Book,
        );
        state.add_task("write".to_string(), TaskPriority::High);
        state.add_note("idea".to_string(), NoteColor::Pink, "%Y");
        state.cover_page.university = "State U".to_string();
        state
    }

    #[test]
    fn test_backup_roundtrip_reconstructs_state() {
        let state = sample_state();
        let json = Backup::from_state(&state).to_json();

        let store = MemoryStore::new();
        let mut restored = AppState::load(&store);
        Backup::parse(&json, "roundtrip.json").unwrap().apply(&mut restored);

        assert_eq!(
            serde_json::to_value(&restored.chapters).unwrap(),
            serde_json::to_value(&state.chapters).unwrap()
        );
        assert_eq!(
            serde_json::to_value(&restored.tasks).unwrap(),
            serde_json::to_value(&state.tasks).unwrap()
        );
        assert_eq!(restored.cover_page, state.cover_page);
        assert_eq!(restored.notes.len(), 1);
        assert_eq!(restored.references[0].apa_citation(), "Smith (2020). X.");
    }

    #[test]
    fn test_backup_uses_wire_keys() {
        let json = Backup::from_state(&sample_state()).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("methodologyItems").is_some());
        assert!(value.get("coverPage").is_some());
        assert!(value.get("methodology").is_none());
    }

    #[test]
    fn test_missing_collections_become_empty() {
        let backup = Backup::parse(r#"{"chapters": []}"#, "partial.json").unwrap();
        let mut state = sample_state();
        assert!(!state.tasks.is_empty());
        backup.apply(&mut state);
        assert!(state.tasks.is_empty());
        assert!(state.notes.is_empty());
    }

    #[test]
    fn test_missing_cover_page_left_unchanged() {
        let mut state = sample_state();
        let backup = Backup::parse("{}", "empty.json").unwrap();
        backup.apply(&mut state);
        assert_eq!(state.cover_page.university, "State U");
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(Backup::parse("not json", "bad.json").is_err());
        assert!(Backup::parse("", "empty").is_err());
    }

    #[test]
    fn test_malformed_entities_are_accepted_as_is() {
        // Shape is not validated on import: missing ids and unknown enum
        // tags fall back to field defaults, only broken JSON is rejected.
        let raw = r#"{
            "chapters": [{"title": "No Id", "status": "published"}],
            "tasks": [{"text": "odd", "priority": "urgent", "completed": "maybe"}],
            "references": [{"title": "Pod", "type": "podcast"}],
            "notes": [{}]
        }"#;
        let backup = Backup::parse(raw, "loose.json").unwrap();

        let mut state = sample_state();
        backup.apply(&mut state);

        assert_eq!(state.chapters[0].title, "No Id");
        assert_eq!(state.chapters[0].id, crate::core::EntityId::default());
        assert_eq!(state.chapters[0].status, crate::entities::ChapterStatus::Draft);
        assert_eq!(state.tasks[0].priority, TaskPriority::Medium);
        assert!(!state.tasks[0].completed);
        assert_eq!(state.references[0].kind, ReferenceKind::Book);
        assert_eq!(state.notes.len(), 1);
        assert!(state.notes[0].text.is_empty());
    }
}
