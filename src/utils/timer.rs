//! Pipeline stage timing
//!
//! Records how long each stage of a report run takes.

use std::time::{Duration, Instant};

use tracing::debug;

/// Measures consecutive pipeline stages
#[derive(Debug)]
pub struct StageTimer {
    start: Instant,
    last: Instant,
    stages: Vec<(&'static str, Duration)>,
}

impl StageTimer {
    /// Start timing the first stage
    pub fn start() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            stages: Vec::new(),
        }
    }

    /// Close the current stage under `label` and start the next one
    pub fn finish_stage(&mut self, label: &'static str) {
        let now = Instant::now();
        let elapsed = now - self.last;
        debug!("{label}: {}ms", elapsed.as_millis());
        self.stages.push((label, elapsed));
        self.last = now;
    }

    /// Durations of finished stages, in order
    pub fn stages(&self) -> &[(&'static str, Duration)] {
        &self.stages
    }

    /// Time since the timer was started
    pub fn total(&self) -> Duration {
        self.start.elapsed()
    }

    /// Format stages as one line per stage plus a total
    pub fn format(&self) -> String {
        let mut output = String::new();
        for (label, duration) in self.stages() {
            output.push_str(&format!("{}: {}ms\n", label, duration.as_millis()));
        }
        output.push_str(&format!("Total: {}ms", self.total().as_millis()));
        output
    }
}
