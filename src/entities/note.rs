//! Note entity type

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;

/// Note card color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Yellow,
    Blue,
    Pink,
}

impl std::fmt::Display for NoteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteColor::Yellow => write!(f, "yellow"),
            NoteColor::Blue => write!(f, "blue"),
            NoteColor::Pink => write!(f, "pink"),
        }
    }
}

/// A quick idea card
///
/// Notes are append-and-delete only, never edited. The date is a formatted
/// string captured once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier (creation timestamp)
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub id: EntityId,

    /// Note text
    #[serde(default)]
    pub text: String,

    /// Card color; unknown tags fall back to yellow
    #[serde(default, deserialize_with = "crate::json::lenient")]
    pub color: NoteColor,

    /// Creation date, formatted with the workspace date format
    #[serde(default)]
    pub date: String,
}

impl Note {
    /// Create a note, stamping the creation date with the given format
    pub fn new(text: impl Into<String>, color: NoteColor, date_format: &str) -> Self {
        Self {
            id: EntityId::now(),
            text: text.into(),
            color,
            date: chrono::Local::now().format(date_format).to_string(),
        }
    }
}
