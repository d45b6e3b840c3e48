//! `quill method` command - Methodology item management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{lookup, open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::EntityId;
use crate::core::state::AppState;
use crate::entities::MethodologyKind;

#[derive(Subcommand, Debug)]
pub enum MethodCommands {
    /// List methodology items
    List(ListArgs),

    /// Add a methodology item
    Add(AddArgs),

    /// Remove a methodology item
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by kind
    #[arg(long, short = 'k')]
    pub kind: Option<MethodologyKind>,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Item kind (hypothesis/question/variable/tool/population)
    #[arg(long, short = 'k', default_value = "hypothesis")]
    pub kind: MethodologyKind,

    /// Item text
    pub content: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Item ID or unambiguous prefix
    pub id: String,
}

pub fn run(cmd: MethodCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        MethodCommands::List(args) => run_list(args, global),
        MethodCommands::Add(args) => run_add(args, global),
        MethodCommands::Rm(args) => run_rm(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let items: Vec<_> = state
        .methodology
        .iter()
        .filter(|i| args.kind.map_or(true, |k| i.kind == k))
        .collect();

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&items).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for item in &items {
                println!("{}", item.id);
            }
        }
        _ => {
            if items.is_empty() {
                println!("No methodology items found.");
                return Ok(());
            }
            println!(
                "{:<16} {:<12} {:<50}",
                style("ID").bold(),
                style("KIND").bold(),
                style("CONTENT").bold()
            );
            println!("{}", "-".repeat(78));
            for item in &items {
                println!(
                    "{:<16} {:<12} {:<50}",
                    item.id,
                    item.kind,
                    truncate_str(&item.content, 48)
                );
            }
            println!();
            println!("{} item(s)", style(items.len()).cyan());
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = state.add_methodology(args.kind, args.content);
    state.save_all(&mut store);

    if global.quiet {
        println!("{}", id);
    } else {
        println!(
            "{} Added {} {}",
            style("✓").green(),
            style(args.kind).cyan(),
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
        .methodology
        .iter()
        .map(|i| (i.id, i.content.clone()))
        .collect();
    let id = lookup(&candidates, &args.id)?;

    state.remove_methodology(id);
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Removed item {}", style("✓").green(), id);
    }
    Ok(())
}
