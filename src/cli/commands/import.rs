//! `quill import` command - Restore collections from a JSON backup

use console::style;
use dialoguer::Confirm;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::open_project;
use crate::cli::GlobalOpts;
use crate::core::state::AppState;
use crate::export::Backup;

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Backup file to import
    pub file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;

    let raw = std::fs::read_to_string(&args.file)
        .map_err(|e| miette::miette!("cannot read {}: {}", args.file.display(), e))?;
    let filename = args.file.display().to_string();
    let backup = Backup::parse(&raw, &filename)?;

    // Import replaces every collection, so confirm before touching anything
    if !args.yes {
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Replace all collections with the contents of {}?",
                args.file.display()
            ))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !proceed {
            println!("{} Import cancelled", style("!").yellow());
            return Ok(());
        }
    }

    let mut store = project.store();
    let mut state = AppState::load(&store);
    backup.apply(&mut state);
    state.save_all(&mut store);

    if !global.quiet {
        println!(
            "{} Imported {} chapter(s), {} task(s), {} reference(s)",
            style("✓").green(),
            state.chapters.len(),
            state.tasks.len(),
            state.references.len()
        );
    }
    Ok(())
}
