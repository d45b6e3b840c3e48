//! `quill search` command - Search across all collections

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::search::search;
use crate::core::state::AppState;

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Text to search for (case-insensitive)
    pub query: String,
}

pub fn run(args: SearchArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());
    let hits = search(&state, &args.query);

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&hits).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&hits).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for hit in &hits {
                println!("{}", hit.id);
            }
        }
        _ => {
            if hits.is_empty() {
                println!("No matches for '{}'.", args.query);
                return Ok(());
            }
            println!(
                "{:<12} {:<16} {:<26} {:<40}",
                style("KIND").bold(),
                style("ID").bold(),
                style("TITLE").bold(),
                style("MATCH").bold()
            );
            println!("{}", "-".repeat(96));
            for hit in &hits {
                println!(
                    "{:<12} {:<16} {:<26} {:<40}",
                    hit.kind,
                    hit.id,
                    truncate_str(&hit.title, 24),
                    truncate_str(&hit.preview, 38)
                );
            }
            println!();
            println!("{} match(es)", style(hits.len()).cyan());
        }
    }
    Ok(())
}
