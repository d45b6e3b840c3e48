//! `quill init` command - Initialize a new Quill workspace

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::core::project::{Project, ProjectError};
use crate::core::state::AppState;

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: std::path::PathBuf,

    /// Force initialization even if .quill/ already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let path = if args.path.as_os_str() == "." {
        std::env::current_dir().into_diagnostic()?
    } else {
        args.path.clone()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path).into_diagnostic()?;
        println!(
            "{} Created directory {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
    }

    let project = if args.force {
        Project::init_force(&path)
    } else {
        Project::init(&path)
    };

    match project {
        Ok(project) => {
            // Write the seed state so data/ starts populated
            let mut store = project.store();
            AppState::load(&store).save_all(&mut store);

            println!(
                "{} Initialized Quill workspace at {}",
                style("✓").green(),
                style(project.root().display()).cyan()
            );
            println!();
            println!("Next steps:");
            println!(
                "  {} List the seeded chapters",
                style("quill chapter list").yellow()
            );
            println!(
                "  {} Add your first reference",
                style("quill ref add --title ... --author ...").yellow()
            );
            println!("  {} See the dashboard", style("quill status").yellow());
            Ok(())
        }
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} Quill workspace already exists at {}",
                style("!").yellow(),
                style(path.display()).cyan()
            );
            println!();
            println!("Use {} to reinitialize", style("quill init --force").yellow());
            Ok(())
        }
        Err(e) => Err(miette::miette!("{}", e)),
    }
}
