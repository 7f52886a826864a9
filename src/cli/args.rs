use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "span-testgen", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory receiving generated fixtures (default: tests/compile-fail/generated)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// List the trait catalog and exit
    #[arg(long)]
    pub list: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff the fixture tree against the catalog without writing
    Check {
        /// Drift report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
