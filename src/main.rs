use clap::Parser;
use miette::Result;
use quill::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for labeled diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Init(args) => quill::cli::commands::init::run(args),
        Commands::Chapter(cmd) => quill::cli::commands::chapter::run(cmd, &global),
        Commands::Method(cmd) => quill::cli::commands::method::run(cmd, &global),
        Commands::Ref(cmd) => quill::cli::commands::reference::run(cmd, &global),
        Commands::Task(cmd) => quill::cli::commands::task::run(cmd, &global),
        Commands::Note(cmd) => quill::cli::commands::note::run(cmd, &global),
        Commands::Cover(cmd) => quill::cli::commands::cover::run(cmd, &global),
        Commands::Theme(cmd) => quill::cli::commands::theme::run(cmd, &global),
        Commands::Status(args) => quill::cli::commands::status::run(args, &global),
        Commands::Search(args) => quill::cli::commands::search::run(args, &global),
        Commands::Export(cmd) => quill::cli::commands::export::run(cmd, &global),
        Commands::Import(args) => quill::cli::commands::import::run(args, &global),
        Commands::Timer(args) => quill::cli::commands::timer::run(args, &global),
        Commands::Completions(args) => quill::cli::commands::completions::run(args),
    }
}
