//! Shell execution and directory materialization against the real host.

mod common;

use common::ManifestFixture;

#[test]
fn run_command_returns_captured_output() {
    let m = ManifestFixture::new().build();
    assert_eq!(m.run_command("echo Hello").unwrap(), "Hello\n");
}

#[test]
fn run_command_surfaces_missing_executable() {
    let m = ManifestFixture::new().build();
    let err = m.run_command("fff_garbage").unwrap_err();
    assert!(format!("{err}").contains("fff_garbage"));
}

#[test]
fn cmakedirs_creates_every_level() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("test_dir").join("nested").join("dir");

    let m = ManifestFixture::new().build();
    m.cmakedirs(&target).unwrap();

    assert!(dir.path().join("test_dir").is_dir());
    assert!(dir.path().join("test_dir").join("nested").is_dir());
    assert!(target.is_dir());

    // Idempotent: creating an existing tree is a no-op.
    m.cmakedirs(&target).unwrap();
}
