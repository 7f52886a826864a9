pub mod args;
pub mod exit;

pub use args::{Cli, Command, ReportFormat};
pub use exit::Outcome;
