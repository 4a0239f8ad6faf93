#![forbid(unsafe_code)]

pub mod console;
pub mod error;
pub mod printer;
pub mod sessions;

pub use drill_core::Clock;
pub use sessions as session;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::SessionError;
pub use printer::PhrasePrinter;

pub use sessions::{
    CharMismatch, GuessCheck, ResultReporter, RoundRunner, RoundSummary, SessionController,
    SessionPlan, SessionPlanner, SessionReport, SessionStats,
};
