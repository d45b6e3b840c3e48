//! `quill task` command - Task management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{lookup, open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::EntityId;
use crate::core::state::AppState;
use crate::entities::{task::display_order, TaskPriority};

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks, pending first
    List(ListArgs),

    /// Add a task
    Add(AddArgs),

    /// Toggle a task between pending and completed
    Toggle(ToggleArgs),

    /// Remove a task
    Rm(RmArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show only pending tasks
    #[arg(long, short = 'p')]
    pub pending: bool,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Task text
    pub text: String,

    /// Priority (high/medium/low)
    #[arg(long, short = 'p', default_value = "medium")]
    pub priority: TaskPriority,
}

#[derive(clap::Args, Debug)]
pub struct ToggleArgs {
    /// Task ID or unambiguous prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Task ID or unambiguous prefix
    pub id: String,
}

pub fn run(cmd: TaskCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TaskCommands::List(args) => run_list(args, global),
        TaskCommands::Add(args) => run_add(args, global),
        TaskCommands::Toggle(args) => run_toggle(args, global),
        TaskCommands::Rm(args) => run_rm(args, global),
    }
}

fn candidates(state: &AppState) -> Vec<(EntityId, String)> {
    state.tasks.iter().map(|t| (t.id, t.text.clone())).collect()
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let tasks: Vec<_> = display_order(&state.tasks)
        .into_iter()
        .filter(|t| !args.pending || !t.completed)
        .collect();

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tasks).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&tasks).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for task in &tasks {
                println!("{}", task.id);
            }
        }
        _ => {
            if tasks.is_empty() {
                println!("No tasks found.");
                return Ok(());
            }
            println!(
                "{:<3} {:<16} {:<8} {:<50}",
                style(" ").bold(),
                style("ID").bold(),
                style("PRI").bold(),
                style("TEXT").bold()
            );
            println!("{}", "-".repeat(78));
            for task in &tasks {
                let mark = if task.completed {
                    style("x").green()
                } else {
                    style(" ").dim()
                };
                println!(
                    "[{}] {:<16} {:<8} {:<50}",
                    mark,
                    task.id,
                    task.priority,
                    truncate_str(&task.text, 48)
                );
            }
            println!();
            println!("{} task(s)", style(tasks.len()).cyan());
        }
    }
    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = state.add_task(args.text, args.priority);
    state.save_all(&mut store);

    if global.quiet {
        println!("{}", id);
    } else {
        println!("{} Added task {}", style("✓").green(), id);
    }
    Ok(())
}

fn run_toggle(args: ToggleArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = lookup(&candidates(&state), &args.id)?;
    let completed = state
        .toggle_task(id)
        .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.id))?;
    state.save_all(&mut store);

    if !global.quiet {
        let status = if completed { "completed" } else { "pending" };
        println!(
            "{} Task {} is now {}",
            style("✓").green(),
            id,
            style(status).cyan()
        );
    }
    Ok(())
}

fn run_rm(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = lookup(&candidates(&state), &args.id)?;
    state.remove_task(id);
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Removed task {}", style("✓").green(), id);
    }
    Ok(())
}
