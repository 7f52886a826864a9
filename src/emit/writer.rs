use crate::emit::plan::PlannedFixture;
use std::fs;
use std::path::Path;

/// Create the fixture directory if it is missing. An existing directory is
/// success, whatever it already contains.
pub fn ensure_output_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|error| format!("failed to create output directory '{}': {error}", dir.display()))
}

/// Write one fixture and leave it read-only.
///
/// Fixtures on disk are kept read-only so nobody edits generated output by
/// hand. Overwriting therefore relaxes permissions first, and the guard
/// restores them on every exit path, including failed writes.
pub fn write_fixture(path: &Path, contents: &str) -> Result<(), String> {
    if path.exists() {
        relax_permissions(path)?;
    }
    let guard = ReadOnlyGuard::new(path);
    fs::write(path, contents)
        .map_err(|error| format!("failed to write fixture '{}': {error}", path.display()))?;
    guard.seal()
}

/// Write every planned fixture into `dir`, creating it first. Returns the
/// number of files written.
pub fn emit_fixtures(dir: &Path, plans: &[PlannedFixture]) -> Result<usize, String> {
    ensure_output_dir(dir)?;
    for plan in plans {
        write_fixture(&dir.join(&plan.file_name), &plan.contents)?;
    }
    Ok(plans.len())
}

/// Restores read-only permissions when dropped. `seal` consumes the guard so
/// the success path surfaces chmod failures instead of swallowing them.
struct ReadOnlyGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> ReadOnlyGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn seal(mut self) -> Result<(), String> {
        self.armed = false;
        restrict_permissions(self.path)
    }
}

impl Drop for ReadOnlyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            // Best-effort restore on the failure path.
            let _ = restrict_permissions(self.path);
        }
    }
}

#[cfg(unix)]
fn relax_permissions(path: &Path) -> Result<(), String> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o200))
        .map_err(|error| format!("failed to make '{}' writable: {error}", path.display()))
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), String> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o444))
        .map_err(|error| format!("failed to make '{}' read-only: {error}", path.display()))
}

#[cfg(not(unix))]
fn relax_permissions(path: &Path) -> Result<(), String> {
    set_readonly_flag(path, false)
}

#[cfg(not(unix))]
fn restrict_permissions(path: &Path) -> Result<(), String> {
    set_readonly_flag(path, true)
}

#[cfg(not(unix))]
fn set_readonly_flag(path: &Path, readonly: bool) -> Result<(), String> {
    let metadata = fs::metadata(path)
        .map_err(|error| format!("failed to read metadata for '{}': {error}", path.display()))?;
    let mut permissions = metadata.permissions();
    permissions.set_readonly(readonly);
    fs::set_permissions(path, permissions)
        .map_err(|error| format!("failed to set permissions on '{}': {error}", path.display()))
}
