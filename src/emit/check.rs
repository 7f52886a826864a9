use crate::emit::plan::PlannedFixture;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Outcome of diffing the on-disk fixture tree against the catalog.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Fixtures whose bytes match what the catalog would emit.
    pub fresh: usize,
    /// Planned fixtures with no file on disk.
    pub missing: Vec<String>,
    /// Fixtures whose bytes have drifted from the catalog.
    pub stale: Vec<StaleFixture>,
}

/// One drifted fixture, with content hashes on both sides so reports stay
/// short even when the diff is large.
#[derive(Debug, Serialize)]
pub struct StaleFixture {
    pub file_name: String,
    pub expected_hash: String,
    pub found_hash: String,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }

    pub fn print_text(&self) {
        for file_name in &self.missing {
            println!("missing: {file_name}");
        }
        for stale in &self.stale {
            println!(
                "stale: {} (expected {}, found {})",
                stale.file_name, stale.expected_hash, stale.found_hash
            );
        }
        if self.is_clean() {
            println!("✓ {} fixtures up to date", self.fresh);
        }
    }

    pub fn print_json(&self) -> Result<(), String> {
        let rendered = serde_json::to_string_pretty(self)
            .map_err(|error| format!("failed to serialize check report: {error}"))?;
        println!("{rendered}");
        Ok(())
    }
}

/// Compare every planned fixture against `dir` without writing anything.
///
/// Unreadable files are hard errors rather than drift: a permission problem
/// on the fixture tree needs a human, not a regeneration.
pub fn check_fixtures(dir: &Path, plans: &[PlannedFixture]) -> Result<CheckReport, String> {
    let mut report = CheckReport {
        fresh: 0,
        missing: Vec::new(),
        stale: Vec::new(),
    };

    for plan in plans {
        let path = dir.join(&plan.file_name);
        if !path.exists() {
            report.missing.push(plan.file_name.clone());
            continue;
        }
        let found = fs::read_to_string(&path)
            .map_err(|error| format!("failed to read fixture '{}': {error}", path.display()))?;
        if found == plan.contents {
            report.fresh += 1;
        } else {
            report.stale.push(StaleFixture {
                file_name: plan.file_name.clone(),
                expected_hash: content_hash(&plan.contents),
                found_hash: content_hash(&found),
            });
        }
    }

    Ok(report)
}

/// Hash fixture text in the `blake3:<hex>` notation drift reports use.
pub fn content_hash(contents: &str) -> String {
    format!("blake3:{}", blake3::hash(contents.as_bytes()).to_hex())
}
