mod answer;
mod controller;
mod plan;
mod progress;
mod report;
mod round;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use answer::{CharMismatch, GuessCheck, diff_chars};
pub use controller::{SessionController, SessionReport};
pub use plan::{SessionPlan, SessionPlanner};
pub use progress::{SessionStats, format_precision};
pub use report::ResultReporter;
pub use round::{RoundRunner, RoundSummary};
