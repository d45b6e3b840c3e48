//! Workspace status dashboard figures

use serde::Serialize;

use crate::core::identity::EntityId;
use crate::core::state::AppState;
use crate::entities::ChapterStatus;

/// Threshold above which a chapter counts toward writing progress
const SUBSTANTIAL_CONTENT_CHARS: usize = 50;

/// Per-chapter line of the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ChapterStats {
    pub id: EntityId,
    pub title: String,
    pub status: ChapterStatus,
    pub words: usize,
    pub reading_minutes: usize,
}

/// Aggregate workspace figures
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceStats {
    /// Percentage of chapters with substantial content, rounded to nearest
    pub progress_pct: usize,
    pub chapter_count: usize,
    pub total_words: usize,
    pub methodology_count: usize,
    pub reference_count: usize,
    pub pending_tasks: usize,
    pub completed_tasks: usize,
    pub note_count: usize,
    pub chapters: Vec<ChapterStats>,
}

impl WorkspaceStats {
    /// Compute all figures from the current state
    pub fn compute(state: &AppState) -> Self {
        let chapters: Vec<ChapterStats> = state
            .chapters
            .iter()
            .map(|c| ChapterStats {
                id: c.id,
                title: c.title.clone(),
                status: c.status,
                words: c.word_count(),
                reading_minutes: c.reading_time_minutes(),
            })
            .collect();

        let substantial = state
            .chapters
            .iter()
            .filter(|c| c.content.chars().count() > SUBSTANTIAL_CONTENT_CHARS)
            .count();
        let progress_pct = if state.chapters.is_empty() {
            0
        } else {
            (substantial as f64 * 100.0 / state.chapters.len() as f64).round() as usize
        };

        let completed_tasks = state.tasks.iter().filter(|t| t.completed).count();

        Self {
            progress_pct,
            chapter_count: state.chapters.len(),
            total_words: chapters.iter().map(|c| c.words).sum(),
            methodology_count: state.methodology.len(),
            reference_count: state.references.len(),
            pending_tasks: state.tasks.len() - completed_tasks,
            completed_tasks,
            note_count: state.notes.len(),
            chapters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::entities::TaskPriority;

    #[test]
    fn test_progress_counts_substantial_chapters_only() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters.clear();
        state.add_chapter(Some("Short".to_string()));
        let long = state.add_chapter(Some("Long".to_string()));
        state.find_chapter_mut(long).unwrap().content = "x".repeat(51);

        let stats = WorkspaceStats::compute(&state);
        assert_eq!(stats.progress_pct, 50);
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters.clear();
        for i in 0..6 {
            state.add_chapter(Some(format!("ch{}", i)));
        }
        let first = state.chapters[0].id;
        state.find_chapter_mut(first).unwrap().content = "x".repeat(51);

        // 1 of 6 is 16.67%, shown as 17 rather than floored to 16
        assert_eq!(WorkspaceStats::compute(&state).progress_pct, 17);
    }

    #[test]
    fn test_exactly_fifty_chars_does_not_count() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters[0].content = "x".repeat(50);
        assert_eq!(WorkspaceStats::compute(&state).progress_pct, 0);
    }

    #[test]
    fn test_no_chapters_is_zero_progress() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters.clear();
        assert_eq!(WorkspaceStats::compute(&state).progress_pct, 0);
    }

    #[test]
    fn test_task_split_and_totals() {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters[0].content = "five words in this chapter".to_string();
        let done = state.add_task("a".to_string(), TaskPriority::Low);
        state.add_task("b".to_string(), TaskPriority::Low);
        state.toggle_task(done);

        let stats = WorkspaceStats::compute(&state);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.chapters[0].reading_minutes, 1);
    }
}
