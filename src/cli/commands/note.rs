//! `quill note` command - Quick note management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{lookup, open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::EntityId;
use crate::core::state::AppState;
use crate::core::Config;
use crate::entities::NoteColor;

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// List notes
    List(ListArgs),

    /// Add a note
    Add(AddArgs),

    /// Remove a note
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by color
    #[arg(long, short = 'c')]
    pub color: Option<NoteColor>,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Note text
    pub text: String,

    /// Sticky-note color (yellow/blue/pink)
    #[arg(long, short = 'c', default_value = "yellow")]
    pub color: NoteColor,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Note ID or unambiguous prefix
    pub id: String,
}

pub fn run(cmd: NoteCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        NoteCommands::List(args) => run_list(args, global),
        NoteCommands::Add(args) => run_add(args, global),
        NoteCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let notes: Vec<_> = state
        .notes
        .iter()
        .filter(|n| args.color.map_or(true, |c| n.color == c))
        .collect();

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&notes).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for note in &notes {
                println!("{}", note.id);
            }
        }
        _ => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }
            println!(
                "{:<16} {:<8} {:<12} {:<44}",
                style("ID").bold(),
                style("COLOR").bold(),
                style("DATE").bold(),
                style("TEXT").bold()
            );
            println!("{}", "-".repeat(80));
            for note in &notes {
                println!(
                    "{:<16} {:<8} {:<12} {:<44}",
                    note.id,
                    note.color,
                    note.date,
                    truncate_str(&note.text, 42)
                );
            }
            println!();
            println!("{} note(s)", style(notes.len()).cyan());
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let config = Config::load();
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = state.add_note(args.text, args.color, &config.date_format());
    state.save_all(&mut store);

    if global.quiet {
        println!("{}", id);
    } else {
        println!(
            "{} Added {} note {}",
            style("✓").green(),
            style(args.color).cyan(),
            id
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let candidates: Vec<(EntityId, String)> = state
        .notes
        .iter()
        .map(|n| (n.id, n.text.clone()))
        .collect();
    let id = lookup(&candidates, &args.id)?;

    state.remove_note(id);
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Removed note {}", style("✓").green(), id);
    }
    Ok(())
}
