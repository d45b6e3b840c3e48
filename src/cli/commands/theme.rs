//! `quill theme` command - Workspace color theme preference
//!
//! The dark-mode flag is a workspace preference read by frontends; the CLI
//! only records it.

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::open_project;
use crate::cli::GlobalOpts;
use crate::core::state::AppState;

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,

    /// Switch to the dark theme
    Dark,

    /// Switch to the light theme
    Light,

    /// Toggle between light and dark
    Toggle,
}

pub fn run(cmd: ThemeCommands, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let dark = match cmd {
        ThemeCommands::Show => {
            println!("{}", if state.dark_mode { "dark" } else { "light" });
            return Ok(());
        }
        ThemeCommands::Dark => true,
        ThemeCommands::Light => false,
        ThemeCommands::Toggle => !state.dark_mode,
    };

    state.dark_mode = dark;
    state.save_all(&mut store);

    if !global.quiet {
        let name = if dark { "dark" } else { "light" };
        println!("{} Theme set to {}", style("✓").green(), style(name).cyan());
    }
    Ok(())
}
