//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    chapter::ChapterCommands,
    completions::CompletionsArgs,
    cover::CoverCommands,
    export::ExportCommands,
    import::ImportArgs,
    init::InitArgs,
    method::MethodCommands,
    note::NoteCommands,
    reference::RefCommands,
    search::SearchArgs,
    status::StatusArgs,
    task::TaskCommands,
    theme::ThemeCommands,
    timer::TimerArgs,
};

#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about = "Quill Thesis Toolkit")]
#[command(
    long_about = "A command-line workspace for writing a thesis: chapters, methodology, \
references, tasks and notes as plain JSON files, with backup and Word export."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Workspace root (default: auto-detect by finding .quill/)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new Quill workspace
    Init(InitArgs),

    /// Chapter management (write, reorder, preview)
    #[command(subcommand)]
    Chapter(ChapterCommands),

    /// Methodology item management (hypotheses, questions, variables, ...)
    #[command(subcommand)]
    Method(MethodCommands),

    /// Reference management with APA citations
    #[command(subcommand, name = "ref")]
    Ref(RefCommands),

    /// Task management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Quick note management
    #[command(subcommand)]
    Note(NoteCommands),

    /// Cover page fields
    #[command(subcommand)]
    Cover(CoverCommands),

    /// Workspace color theme preference
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show the workspace dashboard
    Status(StatusArgs),

    /// Search across all collections
    Search(SearchArgs),

    /// Export the workspace (JSON backup or Word document)
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import a JSON backup, replacing the current collections
    Import(ImportArgs),

    /// Run a Pomodoro writing timer in the terminal
    Timer(TimerArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tables for list, yaml for show)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// Tab-separated values (for piping)
    Tsv,
    /// Just IDs, one per line
    Id,
}
