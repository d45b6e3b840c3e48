//! Entity type definitions
//!
//! Quill keeps five independent ordered collections plus one singleton:
//!
//! - [`Chapter`] - titled thesis sections with status and markdown content
//! - [`MethodologyItem`] - hypotheses, questions, variables, tools, populations
//! - [`Reference`] - bibliographic sources with APA citation builders
//! - [`Task`] - to-dos with priority and a derived display order
//! - [`Note`] - colored idea cards stamped at creation
//! - [`CoverPage`] - the singleton title-page record used by Word export

pub mod chapter;
pub mod cover;
pub mod methodology;
pub mod note;
pub mod reference;
pub mod task;

pub use chapter::{Chapter, ChapterStatus};
pub use cover::CoverPage;
pub use methodology::{MethodologyItem, MethodologyKind};
pub use note::{Note, NoteColor};
pub use reference::{Reference, ReferenceKind};
pub use task::{Task, TaskPriority};
