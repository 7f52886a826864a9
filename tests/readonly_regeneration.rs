use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_testgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_span-testgen"))
        .args(args)
        .output()
        .expect("run span-testgen binary")
}

fn generate_into(dir: &Path) -> Output {
    run_testgen(&["--out-dir", dir.to_str().expect("out dir path")])
}

fn unlock(path: &Path) {
    let mut permissions = fs::metadata(path).expect("read metadata").permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions).expect("relax permissions");
}

#[test]
fn generated_fixtures_are_read_only() {
    let tempdir = tempfile::tempdir().expect("create tempdir");
    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));

    for entry in fs::read_dir(tempdir.path()).expect("read generated tree") {
        let path = entry.expect("dir entry").path();
        let permissions = fs::metadata(&path).expect("read metadata").permissions();
        assert!(permissions.readonly(), "{}", path.display());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = permissions.mode() & 0o777;
            assert_eq!(mode, 0o444, "{} has mode {mode:o}", path.display());
        }
    }
}

#[test]
fn regeneration_over_a_read_only_tree_succeeds() {
    let tempdir = tempfile::tempdir().expect("create tempdir");
    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));
    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));

    let sample = tempdir.path().join("derives-span-Debug-struct.rs");
    let text = fs::read_to_string(&sample).expect("read regenerated fixture");
    assert!(text.contains("#[derivative(Debug)]"), "{text}");
    assert!(fs::metadata(&sample).expect("read metadata").permissions().readonly());
}

#[test]
fn tampered_fixture_is_detected_and_then_restored() {
    let tempdir = tempfile::tempdir().expect("create tempdir");
    let dir_arg = tempdir.path().to_str().expect("out dir path");
    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));

    let victim = tempdir.path().join("derives-span-Clone-enum.rs");
    let original = fs::read_to_string(&victim).expect("read pristine fixture");
    unlock(&victim);
    fs::write(&victim, "// edited by hand\n").expect("tamper with fixture");

    let check = run_testgen(&["--out-dir", dir_arg, "check"]);
    assert_eq!(check.status.code(), Some(1));
    let stdout = String::from_utf8(check.stdout).expect("check output utf8");
    assert!(stdout.contains("stale: derives-span-Clone-enum.rs"), "{stdout}");
    assert!(stdout.contains("blake3:"), "{stdout}");

    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));
    assert_eq!(fs::read_to_string(&victim).expect("read restored fixture"), original);
    assert!(fs::metadata(&victim).expect("read metadata").permissions().readonly());

    let recheck = run_testgen(&["--out-dir", dir_arg, "check"]);
    assert_eq!(recheck.status.code(), Some(0));
}

#[test]
fn check_never_repairs_the_tree() {
    let tempdir = tempfile::tempdir().expect("create tempdir");
    let dir_arg = tempdir.path().to_str().expect("out dir path");
    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));

    let victim = tempdir.path().join("derives-span-Hash-enum.rs");
    unlock(&victim);
    fs::write(&victim, "// edited by hand\n").expect("tamper with fixture");

    let check = run_testgen(&["--out-dir", dir_arg, "check"]);
    assert_eq!(check.status.code(), Some(1));

    let text = fs::read_to_string(&victim).expect("read tampered fixture");
    assert_eq!(text, "// edited by hand\n");
}
