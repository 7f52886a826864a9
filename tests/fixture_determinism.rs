use std::collections::BTreeMap;
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

fn snapshot_tree(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .expect("read fixture tree")
        .map(|entry| {
            let entry = entry.expect("dir entry");
            let name = entry.file_name().into_string().expect("utf8 name");
            let bytes = fs::read(entry.path()).expect("read fixture bytes");
            (name, bytes)
        })
        .collect()
}

#[test]
fn regenerating_in_place_is_byte_identical() {
    let tempdir = tempfile::tempdir().expect("create tempdir");

    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));
    let first = snapshot_tree(tempdir.path());

    assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));
    let second = snapshot_tree(tempdir.path());

    assert_eq!(first.len(), 32);
    assert_eq!(first, second);
}

#[test]
fn generating_into_separate_trees_produces_identical_sets() {
    let left = tempfile::tempdir().expect("create left tempdir");
    let right = tempfile::tempdir().expect("create right tempdir");

    assert_eq!(generate_into(left.path()).status.code(), Some(0));
    assert_eq!(generate_into(right.path()).status.code(), Some(0));

    assert_eq!(snapshot_tree(left.path()), snapshot_tree(right.path()));
}

#[test]
fn check_stays_clean_across_repeated_regeneration() {
    let tempdir = tempfile::tempdir().expect("create tempdir");
    let dir_arg = tempdir.path().to_str().expect("out dir path");

    for _ in 0..3 {
        assert_eq!(generate_into(tempdir.path()).status.code(), Some(0));
        let check = run_testgen(&["--out-dir", dir_arg, "check"]);
        assert_eq!(check.status.code(), Some(0));
    }
}
