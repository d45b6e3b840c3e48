//! `quill timer` command - Pomodoro writing timer

use console::style;
use miette::Result;
use std::io::Write;
use std::time::Duration;

use crate::cli::GlobalOpts;
use crate::core::pomodoro::{Phase, Pomodoro};

#[derive(clap::Args, Debug)]
pub struct TimerArgs {
    /// Number of work phases to run (default: 1)
    #[arg(long, short = 'n', default_value_t = 1)]
    pub sessions: u32,

    /// Start with a break phase instead of work
    #[arg(long)]
    pub break_first: bool,
}

pub fn run(args: TimerArgs, global: &GlobalOpts) -> Result<()> {
    let mut timer = Pomodoro::new();
    if args.break_first {
        timer.phase = Phase::Break;
        timer.reset();
    }
    timer.toggle();

    let mut work_phases_done = 0;
    while work_phases_done < args.sessions {
        let was_work = timer.phase == Phase::Work;
        if !global.quiet {
            let label = match timer.phase {
                Phase::Work => style("work").green(),
                Phase::Break => style("break").cyan(),
            };
            print!("\r{} {} ", label, timer.display());
            let _ = std::io::stdout().flush();
        }

        std::thread::sleep(Duration::from_secs(1));
        if timer.tick() {
            // Phase finished; rollover leaves the timer paused
            if was_work {
                work_phases_done += 1;
                println!();
                println!("{} Work phase complete, take a break", style("✓").green());
            } else {
                println!();
                println!("{} Break over, back to writing", style("✓").green());
            }
            if work_phases_done < args.sessions {
                timer.toggle();
            }
        }
    }
    Ok(())
}
