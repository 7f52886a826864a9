#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod emit;
pub mod render;

use std::path::{Path, PathBuf};

/// Fixture tree consumed by the compile-fail harness, anchored to this crate
/// so generation works from any working directory.
const DEFAULT_OUTPUT_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/compile-fail/generated");

/// Run the span-testgen CLI. Returns an exit code (0, 1, or 2).
pub fn run() -> u8 {
    use clap::Parser;
    use cli::{Cli, Command};

    // Parse CLI args (handles --version and --help via clap, then exits)
    let cli = Cli::parse();

    if cli.list {
        return handle_list();
    }

    match cli.command {
        Some(Command::Check { format }) => handle_check(cli.out_dir.as_deref(), format),
        None => handle_generate(cli.out_dir.as_deref()),
    }
}

/// Handle --list flag: print the trait catalog and exit.
fn handle_list() -> u8 {
    for descriptor in catalog::builtin_traits() {
        let mut line = format!("{} ({})", descriptor.name, descriptor.shapes.describe());
        if !descriptor.supertraits.is_empty() {
            line.push_str(" requires ");
            line.push_str(&descriptor.supertraits.join(", "));
        }
        println!("{line}");
    }
    cli::Outcome::Clean.exit_code()
}

/// Handle default run mode: regenerate the whole fixture tree.
fn handle_generate(out_dir: Option<&Path>) -> u8 {
    use cli::Outcome;

    let out_dir = resolved_output_dir(out_dir);
    match generate_into(&out_dir) {
        Ok(written) => {
            println!("✓ Generated {written} fixtures in {}", out_dir.display());
            Outcome::Clean.exit_code()
        }
        Err(error) => {
            eprintln!("Error: {error}");
            Outcome::Failure.exit_code()
        }
    }
}

/// Handle the check subcommand: report drift without touching the tree.
fn handle_check(out_dir: Option<&Path>, format: cli::ReportFormat) -> u8 {
    use cli::{Outcome, ReportFormat};

    let out_dir = resolved_output_dir(out_dir);
    let report = match check_against(&out_dir) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("Error: {error}");
            return Outcome::Failure.exit_code();
        }
    };

    match format {
        ReportFormat::Text => report.print_text(),
        ReportFormat::Json => {
            if let Err(error) = report.print_json() {
                eprintln!("Error: {error}");
                return Outcome::Failure.exit_code();
            }
        }
    }

    if report.is_clean() {
        Outcome::Clean.exit_code()
    } else {
        Outcome::Drift.exit_code()
    }
}

fn generate_into(out_dir: &Path) -> Result<usize, String> {
    let traits = catalog::builtin_traits();
    catalog::validate_traits(&traits)?;
    let plans = emit::plan_fixtures(&traits);
    emit::emit_fixtures(out_dir, &plans)
}

fn check_against(out_dir: &Path) -> Result<emit::CheckReport, String> {
    let traits = catalog::builtin_traits();
    catalog::validate_traits(&traits)?;
    let plans = emit::plan_fixtures(&traits);
    emit::check_fixtures(out_dir, &plans)
}

fn resolved_output_dir(out_dir: Option<&Path>) -> PathBuf {
    out_dir.map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), Path::to_path_buf)
}
