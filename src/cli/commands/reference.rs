//! `quill ref` command - Reference management with APA citations

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{lookup, open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::EntityId;
use crate::core::state::AppState;
use crate::entities::ReferenceKind;

#[derive(Subcommand, Debug)]
pub enum RefCommands {
    /// List references
    List(ListArgs),

    /// Add a reference
    Add(AddArgs),

    /// Remove a reference
    Rm(RmArgs),

    /// Print a citation for a reference
    Cite(CiteArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by kind
    #[arg(long, short = 'k')]
    pub kind: Option<ReferenceKind>,

    /// Print full APA citations instead of a table
    #[arg(long)]
    pub apa: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Work title
    #[arg(long, short = 't')]
    pub title: String,

    /// Author name as cited
    #[arg(long, short = 'a', default_value = "")]
    pub author: String,

    /// Publication year
    #[arg(long, short = 'y', default_value = "")]
    pub year: String,

    /// Reference kind (book/journal/website)
    #[arg(long, short = 'k', default_value = "book")]
    pub kind: ReferenceKind,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Reference ID or unambiguous prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct CiteArgs {
    /// Reference ID or unambiguous prefix
    pub id: String,

    /// Print the short in-text form instead of the full APA entry
    #[arg(long)]
    pub inline: bool,
}

pub fn run(cmd: RefCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        RefCommands::List(args) => run_list(args, global),
        RefCommands::Add(args) => run_add(args, global),
        RefCommands::Rm(args) => run_rm(args, global),
        RefCommands::Cite(args) => run_cite(args, global),
    }
}

fn candidates(state: &AppState) -> Vec<(EntityId, String)> {
    state
        .references
        .iter()
        .map(|r| (r.id, r.title.clone()))
        .collect()
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let refs: Vec<_> = state
        .references
        .iter()
        .filter(|r| args.kind.map_or(true, |k| r.kind == k))
        .collect();

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&refs).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&refs).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for reference in &refs {
                println!("{}", reference.id);
            }
        }
        _ => {
            if refs.is_empty() {
                println!("No references found.");
                println!();
                println!("Add one with: {}", style("quill ref add --title ...").yellow());
                return Ok(());
            }
            if args.apa {
                for reference in &refs {
                    println!("{}", reference.apa_citation());
                }
                return Ok(());
            }
            println!(
                "{:<16} {:<9} {:<34} {:<20} {:<6}",
                style("ID").bold(),
                style("KIND").bold(),
                style("TITLE").bold(),
                style("AUTHOR").bold(),
                style("YEAR").bold()
            );
            println!("{}", "-".repeat(86));
            for reference in &refs {
                println!(
                    "{:<16} {:<9} {:<34} {:<20} {:<6}",
                    reference.id,
                    reference.kind,
                    truncate_str(&reference.title, 32),
                    truncate_str(&reference.author, 18),
                    reference.year
                );
            }
            println!();
            println!("{} reference(s)", style(refs.len()).cyan());
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = state.add_reference(args.title, args.author, args.year, args.kind);
    state.save_all(&mut store);

    if global.quiet {
        println!("{}", id);
    } else {
        let citation = state
            .find_reference(id)
            .map(|r| r.apa_citation())
            .unwrap_or_default();
        println!(
            "{} Added reference {}: {}",
            style("✓").green(),
            id,
            style(&citation).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = lookup(&candidates(&state), &args.id)?;
    state.remove_reference(id);
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Removed reference {}", style("✓").green(), id);
    }
    Ok(())
}

fn run_cite(args: CiteArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let id = lookup(&candidates(&state), &args.id)?;
    let reference = state
        .find_reference(id)
        .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.id))?;

    if args.inline {
        println!("{}", reference.inline_citation());
    } else {
        println!("{}", reference.apa_citation());
    }
    Ok(())
}
