//! CLI command implementations

pub mod chapter;
pub mod completions;
pub mod cover;
pub mod export;
pub mod import;
pub mod init;
pub mod method;
pub mod note;
pub mod reference;
pub mod search;
pub mod status;
pub mod task;
pub mod theme;
pub mod timer;
