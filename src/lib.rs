//! Quill: a thesis-writing workspace for the terminal
//!
//! Chapters, references, tasks, notes, and methodology items kept as plain
//! JSON slots inside a local workspace, with markdown preview and Word/backup
//! export.

pub mod cli;
pub mod core;
pub mod entities;
pub mod export;
pub mod json;
pub mod render;
