//! `quill cover` command - Cover page fields

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_project;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::state::AppState;

#[derive(Subcommand, Debug)]
pub enum CoverCommands {
    /// Show the cover page fields
    Show,

    /// Set cover page fields
    Set(SetArgs),
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// University name
    #[arg(long)]
    pub university: Option<String>,

    /// College or faculty name
    #[arg(long)]
    pub college: Option<String>,

    /// Student name
    #[arg(long)]
    pub student: Option<String>,

    /// Supervisor name
    #[arg(long)]
    pub supervisor: Option<String>,
}

pub fn run(cmd: CoverCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CoverCommands::Show => run_show(global),
        CoverCommands::Set(args) => run_set(args, global),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());
    let cover = &state.cover_page;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(cover).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(cover).into_diagnostic()?);
        }
        _ => {
            println!("{:<12} {}", style("University").bold(), cover.university);
            println!("{:<12} {}", style("College").bold(), cover.college);
            println!("{:<12} {}", style("Student").bold(), cover.student);
            println!("{:<12} {}", style("Supervisor").bold(), cover.supervisor);
        }
    }
    Ok(())
}

fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    if let Some(university) = args.university {
        state.cover_page.university = university;
    }
    if let Some(college) = args.college {
        state.cover_page.college = college;
    }
    if let Some(student) = args.student {
        state.cover_page.student = student;
    }
    if let Some(supervisor) = args.supervisor {
        state.cover_page.supervisor = supervisor;
    }
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Updated cover page", style("✓").green());
    }
    Ok(())
}
