/// Run outcome determining exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fixtures generated, or the tree matches the catalog (exit 0).
    Clean,
    /// Drift detected: missing or stale fixtures (exit 1).
    Drift,
    /// Filesystem or invocation failure (exit 2).
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean => 0,
            Outcome::Drift => 1,
            Outcome::Failure => 2,
        }
    }
}
