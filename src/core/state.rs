//! The application state container
//!
//! All seven persisted slots live here as named members. The state is loaded
//! once per command, mutated in memory, and written back with a full batch
//! re-save of every slot; there are no partial or differential writes. The
//! in-memory state remains authoritative even when a save fails.

use crate::core::identity::EntityId;
use crate::core::store::{self, SlotStore};
use crate::entities::{
    Chapter, ChapterStatus, CoverPage, MethodologyItem, MethodologyKind, Note, NoteColor,
    Reference, ReferenceKind, Task, TaskPriority,
};

/// Direction for adjacent-swap chapter reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The full workspace state: five collections, the dark-mode flag, and the
/// cover page
#[derive(Debug, Clone)]
pub struct AppState {
    pub chapters: Vec<Chapter>,
    pub methodology: Vec<MethodologyItem>,
    pub references: Vec<Reference>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub dark_mode: bool,
    pub cover_page: CoverPage,
}

impl AppState {
    /// Load all slots from the store, falling back to defaults per slot
    ///
    /// A fresh workspace starts with one seed chapter so there is always
    /// something to write into.
    pub fn load(store: &dyn SlotStore) -> Self {
        Self {
            chapters: store::load(store, "chapters", Self::seed_chapters()),
            methodology: store::load(store, "methodology", Vec::new()),
            references: store::load(store, "references", Vec::new()),
            tasks: store::load(store, "tasks", Vec::new()),
            notes: store::load(store, "notes", Vec::new()),
            dark_mode: store::load(store, "darkMode", false),
            cover_page: store::load(store, "coverPage", CoverPage::default()),
        }
    }

    fn seed_chapters() -> Vec<Chapter> {
        let mut intro = Chapter::new("Introduction");
        intro.content = "# Introduction\nThis study addresses...".to_string();
        vec![intro]
    }

    /// Write every slot back as a batch
    pub fn save_all(&self, store: &mut dyn SlotStore) {
        store::save(store, "chapters", &self.chapters);
        store::save(store, "methodology", &self.methodology);
        store::save(store, "references", &self.references);
        store::save(store, "tasks", &self.tasks);
        store::save(store, "notes", &self.notes);
        store::save(store, "darkMode", &self.dark_mode);
        store::save(store, "coverPage", &self.cover_page);
    }

    // ---- chapters -------------------------------------------------------

    /// Append a new draft chapter and return its id
    pub fn add_chapter(&mut self, title: Option<String>) -> EntityId {
        let chapter = Chapter::new(title.unwrap_or_else(|| "New Chapter".to_string()));
        let id = chapter.id;
        self.chapters.push(chapter);
        id
    }

    pub fn find_chapter(&self, id: EntityId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn find_chapter_mut(&mut self, id: EntityId) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id == id)
    }

    /// Swap a chapter with its adjacent neighbor; returns false at the edge
    pub fn move_chapter(&mut self, id: EntityId, direction: MoveDirection) -> bool {
        let Some(index) = self.chapters.iter().position(|c| c.id == id) else {
            return false;
        };
        match direction {
            MoveDirection::Up if index > 0 => {
                self.chapters.swap(index, index - 1);
                true
            }
            MoveDirection::Down if index + 1 < self.chapters.len() => {
                self.chapters.swap(index, index + 1);
                true
            }
            _ => false,
        }
    }

    pub fn set_chapter_status(&mut self, id: EntityId, status: ChapterStatus) -> bool {
        match self.find_chapter_mut(id) {
            Some(chapter) => {
                chapter.status = status;
                true
            }
            None => false,
        }
    }

    // ---- methodology ----------------------------------------------------

    pub fn add_methodology(&mut self, kind: MethodologyKind, content: String) -> EntityId {
        let item = MethodologyItem::new(kind, content);
        let id = item.id;
        self.methodology.push(item);
        id
    }

    pub fn remove_methodology(&mut self, id: EntityId) -> bool {
        let before = self.methodology.len();
        self.methodology.retain(|i| i.id != id);
        self.methodology.len() != before
    }

    // ---- references -----------------------------------------------------

    pub fn add_reference(
        &mut self,
        title: String,
        author: String,
        year: String,
        kind: ReferenceKind,
    ) -> EntityId {
        let reference = Reference::new(title, author, year, kind);
        let id = reference.id;
        self.references.push(reference);
        id
    }

    pub fn find_reference(&self, id: EntityId) -> Option<&Reference> {
        self.references.iter().find(|r| r.id == id)
    }

    pub fn remove_reference(&mut self, id: EntityId) -> bool {
        let before = self.references.len();
        self.references.retain(|r| r.id != id);
        self.references.len() != before
    }

    // ---- tasks ----------------------------------------------------------

    pub fn add_task(&mut self, text: String, priority: TaskPriority) -> EntityId {
        let task = Task::new(text, priority);
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Flip a task's completed flag; returns the new value
    pub fn toggle_task(&mut self, id: EntityId) -> Option<bool> {
        self.tasks.iter_mut().find(|t| t.id == id).map(|t| {
            t.completed = !t.completed;
            t.completed
        })
    }

    pub fn remove_task(&mut self, id: EntityId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    // ---- notes ----------------------------------------------------------

    pub fn add_note(&mut self, text: String, color: NoteColor, date_format: &str) -> EntityId {
        let note = Note::new(text, color, date_format);
        let id = note.id;
        self.notes.push(note);
        id
    }

    pub fn remove_note(&mut self, id: EntityId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn chapter_ids(state: &AppState) -> Vec<EntityId> {
        state.chapters.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_fresh_state_has_seed_chapter() {
        let store = MemoryStore::new();
        let state = AppState::load(&store);
        assert_eq!(state.chapters.len(), 1);
        assert_eq!(state.chapters[0].title, "Introduction");
        assert!(state.methodology.is_empty());
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_save_all_writes_every_slot() {
        let mut store = MemoryStore::new();
        let state = AppState::load(&store);
        state.save_all(&mut store);
        for slot in crate::core::store::SLOTS {
            assert!(store.read(slot).is_some(), "slot '{}' not written", slot);
        }
    }

    #[test]
    fn test_state_roundtrips_through_store() {
        let mut store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.add_task("write abstract".to_string(), TaskPriority::High);
        state.dark_mode = true;
        state.cover_page.student = "A. Student".to_string();
        state.save_all(&mut store);

        let reloaded = AppState::load(&store);
        assert_eq!(reloaded.tasks.len(), 1);
        assert_eq!(reloaded.tasks[0].text, "write abstract");
        assert!(reloaded.dark_mode);
        assert_eq!(reloaded.cover_page.student, "A. Student");
    }

    #[test]
    fn test_move_chapter_swaps_adjacent_only() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters.clear();
        for i in 0..5 {
            state.chapters.push(Chapter {
                id: EntityId::from_millis(i),
                ..Chapter::new(format!("ch{}", i))
            });
        }
        let before = chapter_ids(&state);

        assert!(state.move_chapter(EntityId::from_millis(2), MoveDirection::Up));
        let after = chapter_ids(&state);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[1]);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[3], before[3]);
        assert_eq!(after[4], before[4]);
    }

    #[test]
    fn test_move_chapter_at_edges_is_noop() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        let only = state.chapters[0].id;
        assert!(!state.move_chapter(only, MoveDirection::Up));
        assert!(!state.move_chapter(only, MoveDirection::Down));
    }

    #[test]
    fn test_toggle_task_flips_flag() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        let id = state.add_task("t".to_string(), TaskPriority::Low);
        assert_eq!(state.toggle_task(id), Some(true));
        assert_eq!(state.toggle_task(id), Some(false));
        assert_eq!(state.toggle_task(EntityId::from_millis(0)), None);
    }

    #[test]
    fn test_remove_is_by_id() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        let keep = state.add_methodology(MethodologyKind::Hypothesis, "H1".to_string());
        let gone = state.add_methodology(MethodologyKind::Question, "Q1".to_string());
        assert!(state.remove_methodology(gone));
        assert!(!state.remove_methodology(gone));
        assert_eq!(state.methodology.len(), 1);
        assert_eq!(state.methodology[0].id, keep);
    }

    #[test]
    fn test_corrupt_slot_falls_back_without_losing_others() {
        let mut store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.add_note("keep me".to_string(), NoteColor::Yellow, "%Y");
        state.save_all(&mut store);

        store.write("tasks", "][ corrupt").unwrap();
        let reloaded = AppState::load(&store);
        assert!(reloaded.tasks.is_empty());
        assert_eq!(reloaded.notes.len(), 1);
    }
}
