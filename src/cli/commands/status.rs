//! `quill status` command - Workspace dashboard

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::state::AppState;
use crate::core::stats::WorkspaceStats;

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Skip the per-chapter breakdown
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());
    let stats = WorkspaceStats::compute(&state);

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).into_diagnostic()?);
            return Ok(());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&stats).into_diagnostic()?);
            return Ok(());
        }
        _ => {}
    }

    println!("{}", style("Workspace status").bold());
    println!();
    println!(
        "  Progress:    {} across {} chapter(s)",
        style(format!("{}%", stats.progress_pct)).cyan(),
        stats.chapter_count
    );
    println!("  Words:       {}", style(stats.total_words).cyan());
    println!(
        "  Tasks:       {} pending, {} completed",
        style(stats.pending_tasks).yellow(),
        style(stats.completed_tasks).green()
    );
    println!("  Methodology: {}", stats.methodology_count);
    println!("  References:  {}", stats.reference_count);
    println!("  Notes:       {}", stats.note_count);

    if !args.summary && !stats.chapters.is_empty() {
        let max_words = stats.chapters.iter().map(|c| c.words).max().unwrap_or(0);
        println!();
        println!(
            "{:<16} {:<34} {:<10} {:>7} {:>6}",
            style("ID").bold(),
            style("CHAPTER").bold(),
            style("STATUS").bold(),
            style("WORDS").bold(),
            style("READ").bold()
        );
        println!("{}", "-".repeat(100));
        for chapter in &stats.chapters {
            print!(
                "{:<16} {:<34} {:<10} {:>7} {:>5}m  ",
                chapter.id,
                truncate_str(&chapter.title, 32),
                chapter.status,
                chapter.words,
                chapter.reading_minutes
            );
            println!("{}", style(word_bar(chapter.words, max_words)).cyan());
        }
    }
    Ok(())
}

/// Scale a word count onto a 20-character bar
fn word_bar(words: usize, max_words: usize) -> String {
    if max_words == 0 {
        return String::new();
    }
    let width = (words * 20).div_ceil(max_words).min(20);
    "#".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_bar_scaling() {
        assert_eq!(word_bar(0, 0), "");
        assert_eq!(word_bar(0, 100), "");
        assert_eq!(word_bar(100, 100), "#".repeat(20));
        assert_eq!(word_bar(1, 100), "#");
    }
}
