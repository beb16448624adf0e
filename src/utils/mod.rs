//! Shared utilities: logging, timing and clocks.

mod clock;
mod logger;
mod timer;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::FixedClock;
pub use logger::{init_logger, LogLevel};
pub use timer::StageTimer;
