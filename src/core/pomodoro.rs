//! Pomodoro timer with fixed work and break phases

/// Work phase length in seconds (25 minutes)
pub const WORK_SECS: u32 = 25 * 60;

/// Break phase length in seconds (5 minutes)
pub const BREAK_SECS: u32 = 5 * 60;

/// Which phase the timer is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    fn duration(self) -> u32 {
        match self {
            Phase::Work => WORK_SECS,
            Phase::Break => BREAK_SECS,
        }
    }
}

/// Timer state, advanced one second at a time
///
/// Reaching zero rolls over into the other phase paused, so a finished work
/// phase does not start the break until the user resumes.
#[derive(Debug, Clone, Copy)]
pub struct Pomodoro {
    pub phase: Phase,
    pub remaining: u32,
    pub running: bool,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            phase: Phase::Work,
            remaining: WORK_SECS,
            running: false,
        }
    }
}

impl Pomodoro {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one second; returns true when the phase just rolled over
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        if self.remaining > 1 {
            self.remaining -= 1;
            return false;
        }
        self.phase = match self.phase {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        };
        self.remaining = self.phase.duration();
        self.running = false;
        true
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and reset the current phase to its full length
    pub fn reset(&mut self) {
        self.remaining = self.phase.duration();
        self.running = false;
    }

    /// Remaining time as mm:ss
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
