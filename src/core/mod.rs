//! Core workspace infrastructure

pub mod config;
pub mod dictation;
pub mod identity;
pub mod pomodoro;
pub mod project;
pub mod search;
pub mod state;
pub mod stats;
pub mod store;

pub use config::Config;
pub use identity::EntityId;
pub use project::{Project, ProjectError};
pub use state::{AppState, MoveDirection};
