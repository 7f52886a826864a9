use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(span_testgen::run())
}
