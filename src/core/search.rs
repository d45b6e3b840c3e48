//! Case-insensitive search across every collection

use serde::Serialize;

use crate::core::identity::EntityId;
use crate::core::state::AppState;

/// Which collection a hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Chapter,
    Methodology,
    Reference,
    Task,
    Note,
}

impl std::fmt::Display for HitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HitKind::Chapter => "chapter",
            HitKind::Methodology => "methodology",
            HitKind::Reference => "reference",
            HitKind::Task => "task",
            HitKind::Note => "note",
        };
        write!(f, "{}", s)
    }
}

/// A single search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: EntityId,
    /// Short label for the entity (title, or leading text)
    pub title: String,
    /// The matching text, truncated around the match
    pub preview: String,
}

/// Search all collections for `query`, case-insensitively
///
/// An empty query matches nothing. Hits come out grouped by collection in
/// workspace order: chapters, methodology, references, tasks, notes.
pub fn search(state: &AppState, query: &str) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for chapter in &state.chapters {
        if contains(&chapter.title, &needle) || contains(&chapter.content, &needle) {
            hits.push(SearchHit {
                kind: HitKind::Chapter,
                id: chapter.id,
                title: chapter.title.clone(),
                preview: preview_around(&chapter.content, &needle)
                    .unwrap_or_else(|| chapter.title.clone()),
            });
        }
    }
    for item in &state.methodology {
        if contains(&item.content, &needle) {
            hits.push(SearchHit {
                kind: HitKind::Methodology,
                id: item.id,
                title: item.kind.to_string(),
                preview: preview_around(&item.content, &needle).unwrap_or_default(),
            });
        }
    }
    for reference in &state.references {
        if contains(&reference.title, &needle) || contains(&reference.author, &needle) {
            hits.push(SearchHit {
                kind: HitKind::Reference,
                id: reference.id,
                title: reference.title.clone(),
                preview: reference.apa_citation(),
            });
        }
    }
    for task in &state.tasks {
        if contains(&task.text, &needle) {
            hits.push(SearchHit {
                kind: HitKind::Task,
                id: task.id,
                title: task.text.clone(),
                preview: preview_around(&task.text, &needle).unwrap_or_default(),
            });
        }
    }
    for note in &state.notes {
        if contains(&note.text, &needle) {
            hits.push(SearchHit {
                kind: HitKind::Note,
                id: note.id,
                title: note.text.chars().take(40).collect(),
                preview: preview_around(&note.text, &needle).unwrap_or_default(),
            });
        }
    }

    hits
}

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Byte offset in `text` where the case-folded needle first matches
///
/// An offset found inside `to_lowercase()` cannot be reused to slice the
/// original string (case folding can change byte lengths, e.g. U+1E9E to
/// "ß"), so fold and compare at each char boundary of the original instead.
fn find_folded(text: &str, needle_lower: &str) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .find(|&i| text[i..].to_lowercase().starts_with(needle_lower))
}

/// Extract up to 60 characters of context around the first match
fn preview_around(text: &str, needle_lower: &str) -> Option<String> {
    let pos = find_folded(text, needle_lower)?;

    let start = text[..pos]
        .char_indices()
        .rev()
        .take(20)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(pos);
    let end = text[pos..]
        .char_indices()
        .take(40)
        .last()
        .map(|(i, c)| pos + i + c.len_utf8())
        .unwrap_or(text.len());

    let mut preview = String::new();
    if start > 0 {
        preview.push('…');
    }
    preview.push_str(text[start..end].trim());
    if end < text.len() {
        preview.push('…');
    }
    Some(preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;
    use crate::entities::{MethodologyKind, NoteColor, ReferenceKind, TaskPriority};

    fn sample_state() -> AppState {
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters[0].content = "# Introduction\nQualitative interviews were used.".to_string();
        state.add_methodology(MethodologyKind::Tool, "NVivo for coding interviews".to_string());
        state.add_reference(
            "Interview Methods".to_string(),
            "Kvale".to_string(),
            "2007".to_string(),
            ReferenceKind::Book,
        );
        state.add_task("transcribe interviews".to_string(), TaskPriority::High);
        state.add_note("ask about interview consent forms".to_string(), NoteColor::Blue, "%Y");
        state
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = sample_state();
        let hits = search(&state, "INTERVIEW");
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let state = sample_state();
        assert!(search(&state, "").is_empty());
    }

    #[test]
    fn test_hits_grouped_in_collection_order() {
        let state = sample_state();
        let kinds: Vec<HitKind> = search(&state, "interview").iter().map(|h| h.kind).collect();
        assert_eq!(
            kinds,
            vec![
                HitKind::Chapter,
                HitKind::Methodology,
                HitKind::Reference,
                HitKind::Task,
                HitKind::Note,
            ]
        );
    }

    #[test]
    fn test_reference_matches_author() {
        let state = sample_state();
        let hits = search(&state, "kvale");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].preview, "Kvale (2007). Interview Methods.");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let state = sample_state();
        assert!(search(&state, "zygote").is_empty());
    }

    #[test]
    fn test_search_survives_case_folding_length_changes() {
        // U+1E9E lowercases to "ß", which is one byte shorter; slicing the
        // original text with offsets from the lowered copy used to panic.
        let store = MemoryStore::new();
        let mut state = AppState::load(&store);
        state.chapters[0].content = "\u{1E9E}early capital sharp s".to_string();
        let hits = search(&state, "early");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].preview.contains("early"));
    }

    #[test]
    fn test_preview_folded_offsets_stay_on_char_boundaries() {
        let text = "\u{1E9E}x and some trailing words";
        let preview = preview_around(text, "x").unwrap();
        assert!(preview.contains('x'));

        // A needle that only exists inside a folded expansion has no char
        // boundary in the original; that is a miss, not a panic.
        assert!(preview_around("\u{130}", "\u{307}").is_none());
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = format!("{} interview {}", "x".repeat(100), "y".repeat(100));
        let preview = preview_around(&long, "interview").unwrap();
        assert!(preview.starts_with('…'));
        assert!(preview.ends_with('…'));
        assert!(preview.contains("interview"));
    }
}
