//! `quill export` command - JSON backup and Word document export

use chrono::Datelike;
use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::helpers::open_project;
use crate::cli::GlobalOpts;
use crate::core::state::AppState;
use crate::export::{backup, word, Backup};

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write a JSON backup of every collection
    Backup(BackupArgs),

    /// Write a Word-compatible .doc draft
    Word(WordArgs),
}

#[derive(clap::Args, Debug)]
pub struct BackupArgs {
    /// Output file (default: thesis_backup.json in the workspace root)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Print the backup to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

#[derive(clap::Args, Debug)]
pub struct WordArgs {
    /// Output file (default: thesis_draft.doc in the workspace root)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Year printed on the cover page (default: current year)
    #[arg(long)]
    pub year: Option<i32>,
}

pub fn run(cmd: ExportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ExportCommands::Backup(args) => run_backup(args, global),
        ExportCommands::Word(args) => run_word(args, global),
    }
}

fn run_backup(args: BackupArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());
    let json = Backup::from_state(&state).to_json();

    if args.stdout {
        println!("{}", json);
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| project.root().join(backup::BACKUP_FILE_NAME));
    std::fs::write(&path, json).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Wrote backup to {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}

fn run_word(args: WordArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let doc = word::build_document(&state, year);

    let path = args
        .output
        .unwrap_or_else(|| project.root().join(word::WORD_FILE_NAME));
    std::fs::write(&path, doc).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Wrote {} chapter(s) to {}",
            style("✓").green(),
            state.chapters.len(),
            style(path.display()).cyan()
        );
    }
    Ok(())
}
