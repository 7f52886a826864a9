pub mod check;
pub mod plan;
pub mod writer;

pub use check::{CheckReport, StaleFixture, check_fixtures, content_hash};
pub use plan::{PlannedFixture, fixture_file_name, plan_fixtures};
pub use writer::{emit_fixtures, ensure_output_dir, write_fixture};
