//! Export formats: JSON backup and Word-compatible HTML

pub mod backup;
pub mod word;

pub use backup::{Backup, BACKUP_FILE_NAME};
pub use word::{build_document, WORD_FILE_NAME};
