//! Command-line interface modules

pub mod args;
pub mod commands;
pub mod helpers;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
