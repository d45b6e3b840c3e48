//! `quill chapter` command - Chapter management

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{lookup, open_project, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::dictation::{host_recognizer, DictationSession};
use crate::core::identity::EntityId;
use crate::core::state::{AppState, MoveDirection};
use crate::core::Config;
use crate::entities::{Chapter, ChapterStatus};
use crate::render::{render, Block};

#[derive(Subcommand, Debug)]
pub enum ChapterCommands {
    /// List chapters in table-of-contents order
    List(ListArgs),

    /// Create a new chapter
    New(NewArgs),

    /// Show a chapter's content
    Show(ShowArgs),

    /// Edit a chapter's content in your editor
    Edit(EditArgs),

    /// Rename a chapter
    Rename(RenameArgs),

    /// Set a chapter's workflow status
    Status(StatusArgs),

    /// Move a chapter up or down in the table of contents
    Move(MoveArgs),

    /// Append text to a chapter
    Append(AppendArgs),

    /// Insert an inline citation into a chapter
    Cite(CiteArgs),

    /// Dictate into a chapter at a cursor position
    Dictate(DictateArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show word counts and reading time
    #[arg(long, short = 'w')]
    pub words: bool,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Chapter title (default: "New Chapter")
    pub title: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// Render markers as classified blocks instead of raw text
    #[arg(long, short = 'p')]
    pub preview: bool,
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,
}

#[derive(clap::Args, Debug)]
pub struct RenameArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// New title
    pub title: String,
}

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// New status (draft/review/completed)
    pub status: ChapterStatus,
}

#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// Direction to move
    pub direction: MoveDirection,
}

#[derive(clap::Args, Debug)]
pub struct AppendArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// Text to append (a newline is added before it)
    pub text: String,
}

#[derive(clap::Args, Debug)]
pub struct CiteArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// Reference ID or unambiguous prefix
    pub reference: String,

    /// Character position to insert at (default: end of chapter)
    #[arg(long)]
    pub at: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct DictateArgs {
    /// Chapter ID or unambiguous prefix
    pub id: String,

    /// Character position to insert at (default: end of chapter)
    #[arg(long)]
    pub cursor: Option<usize>,
}

pub fn run(cmd: ChapterCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ChapterCommands::List(args) => run_list(args, global),
        ChapterCommands::New(args) => run_new(args, global),
        ChapterCommands::Show(args) => run_show(args, global),
        ChapterCommands::Edit(args) => run_edit(args, global),
        ChapterCommands::Rename(args) => run_rename(args, global),
        ChapterCommands::Status(args) => run_status(args, global),
        ChapterCommands::Move(args) => run_move(args, global),
        ChapterCommands::Append(args) => run_append(args, global),
        ChapterCommands::Cite(args) => run_cite(args, global),
        ChapterCommands::Dictate(args) => run_dictate(args, global),
    }
}

fn candidates(state: &AppState) -> Vec<(EntityId, String)> {
    state
        .chapters
        .iter()
        .map(|c| (c.id, c.title.clone()))
        .collect()
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state.chapters).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&state.chapters).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            for chapter in &state.chapters {
                println!("{}", chapter.id);
            }
        }
        _ => {
            if state.chapters.is_empty() {
                println!("No chapters yet.");
                println!();
                println!("Create one with: {}", style("quill chapter new").yellow());
                return Ok(());
            }
            println!(
                "{:<4} {:<16} {:<40} {:<10}",
                style("#").bold(),
                style("ID").bold(),
                style("TITLE").bold(),
                style("STATUS").bold()
            );
            println!("{}", "-".repeat(72));
            for (index, chapter) in state.chapters.iter().enumerate() {
                print!(
                    "{:<4} {:<16} {:<40} {:<10}",
                    index + 1,
                    chapter.id,
                    truncate_str(&chapter.title, 38),
                    chapter.status
                );
                if args.words {
                    print!(
                        "  {} words, ~{} min",
                        chapter.word_count(),
                        chapter.reading_time_minutes()
                    );
                }
                println!();
            }
            println!();
            println!("{} chapter(s)", style(state.chapters.len()).cyan());
        }
    }
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let id = state.add_chapter(args.title);
    state.save_all(&mut store);

    if global.quiet {
        println!("{}", id);
    } else {
        let title = state.find_chapter(id).map(|c| c.title.clone()).unwrap_or_default();
        println!(
            "{} Created chapter {} ({})",
            style("✓").green(),
            style(&title).cyan(),
            id
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let state = AppState::load(&project.store());
    let id = lookup(&candidates(&state), &args.id)?;
    let chapter = state
        .find_chapter(id)
        .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.id))?;

    if args.preview {
        print_preview(chapter, global)?;
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(chapter).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(chapter).into_diagnostic()?);
        }
        OutputFormat::Id => println!("{}", chapter.id),
        _ => {
            println!(
                "{} [{}] ({})",
                style(&chapter.title).bold(),
                chapter.status,
                chapter.id
            );
            println!();
            println!("{}", chapter.content);
        }
    }
    Ok(())
}

fn print_preview(chapter: &Chapter, global: &GlobalOpts) -> Result<()> {
    let blocks = render(&chapter.content);

    if global.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&blocks).into_diagnostic()?);
        return Ok(());
    }

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                let marker = "#".repeat(level as usize);
                println!("{} {}", style(marker).dim(), style(text).bold());
            }
            Block::ListItem { text } => println!("  {} {}", style("•").dim(), text),
            Block::Paragraph { text } => println!("{}", text),
            Block::Placeholder => {
                println!("{}", style("Start writing your chapter...").dim().italic());
            }
        }
    }
    Ok(())
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;
    let config = Config::load();

    // Content lives inside a JSON slot, so edit through a scratch file
    let scratch = project.quill_dir().join(format!("edit-{}.md", id));
    {
        let chapter = state
            .find_chapter(id)
            .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.id))?;
        std::fs::write(&scratch, &chapter.content).into_diagnostic()?;
    }

    let status = config.run_editor(&scratch).into_diagnostic()?;
    if !status.success() {
        let _ = std::fs::remove_file(&scratch);
        return Err(miette::miette!("editor exited with {}", status));
    }

    let edited = std::fs::read_to_string(&scratch).into_diagnostic()?;
    let _ = std::fs::remove_file(&scratch);

    if let Some(chapter) = state.find_chapter_mut(id) {
        chapter.content = edited;
    }
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Updated chapter {}", style("✓").green(), id);
    }
    Ok(())
}

fn run_rename(args: RenameArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;

    if let Some(chapter) = state.find_chapter_mut(id) {
        chapter.title = args.title.clone();
    }
    state.save_all(&mut store);

    if !global.quiet {
        println!(
            "{} Renamed chapter {} to {}",
            style("✓").green(),
            id,
            style(&args.title).cyan()
        );
    }
    Ok(())
}

fn run_status(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;

    state.set_chapter_status(id, args.status);
    state.save_all(&mut store);

    if !global.quiet {
        println!(
            "{} Chapter {} is now {}",
            style("✓").green(),
            id,
            style(args.status).cyan()
        );
    }
    Ok(())
}

fn run_move(args: MoveArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;

    let moved = state.move_chapter(id, args.direction);
    if moved {
        state.save_all(&mut store);
        if !global.quiet {
            println!("{} Moved chapter {}", style("✓").green(), id);
        }
    } else if !global.quiet {
        println!(
            "{} Chapter {} is already at the edge; nothing moved",
            style("!").yellow(),
            id
        );
    }
    Ok(())
}

fn run_append(args: AppendArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;

    if let Some(chapter) = state.find_chapter_mut(id) {
        if !chapter.content.is_empty() {
            chapter.append("\n");
        }
        chapter.append(&args.text);
    }
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Appended to chapter {}", style("✓").green(), id);
    }
    Ok(())
}

fn run_cite(args: CiteArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);

    let chapter_id = lookup(&candidates(&state), &args.id)?;
    let ref_candidates: Vec<(EntityId, String)> = state
        .references
        .iter()
        .map(|r| (r.id, r.title.clone()))
        .collect();
    let ref_id = lookup(&ref_candidates, &args.reference)?;

    let citation = state
        .find_reference(ref_id)
        .map(|r| r.inline_citation())
        .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.reference))?;

    if let Some(chapter) = state.find_chapter_mut(chapter_id) {
        match args.at {
            Some(position) => {
                // Mid-text insertion carries its own spacing
                chapter.insert_at(position, &format!(" {} ", citation));
            }
            None => {
                if !chapter.content.is_empty() && !chapter.content.ends_with(' ') {
                    chapter.append(" ");
                }
                chapter.append(&citation);
            }
        }
    }
    state.save_all(&mut store);

    if !global.quiet {
        println!(
            "{} Inserted {} into chapter {}",
            style("✓").green(),
            style(&citation).cyan(),
            chapter_id
        );
    }
    Ok(())
}

fn run_dictate(args: DictateArgs, global: &GlobalOpts) -> Result<()> {
    let project = open_project(global)?;
    let mut store = project.store();
    let mut state = AppState::load(&store);
    let id = lookup(&candidates(&state), &args.id)?;

    let mut recognizer = host_recognizer().map_err(|e| miette::miette!("{}", e))?;

    let chapter = state
        .find_chapter_mut(id)
        .ok_or_else(|| miette::miette!("no entry found matching '{}'", args.id))?;
    let cursor = args.cursor.unwrap_or_else(|| chapter.content.chars().count());
    let mut session = DictationSession::new(cursor);
    session
        .run(chapter, recognizer.as_mut())
        .map_err(|e| miette::miette!("{}", e))?;
    state.save_all(&mut store);

    if !global.quiet {
        println!("{} Dictation saved to chapter {}", style("✓").green(), id);
    }
    Ok(())
}
