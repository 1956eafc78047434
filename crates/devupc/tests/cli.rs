//! End-to-end tests for the devupc binary

use assert_cmd::Command;
use predicates::prelude::*;

fn devupc() -> Command {
    Command::cargo_bin("devupc").expect("binary should build")
}

fn write_mak(dir: &std::path::Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture write should succeed");
    path.to_str().expect("tempdir path should be UTF-8").to_string()
}

#[test]
fn test_env_shell_posix_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mak = write_mak(dir.path(), "upcxx.mak", "# comment\nFOO = (bar) (baz)\n");

    let output = devupc()
        .args(["env", "shell", "--mak", &mak, "--prefix", "/opt/upcxx"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "FOO=\"{bar} {baz}\"",
            "export UPCXX_LDLIBS",
            "export UPCXX_LDFLAGS",
            "export UPCXX_CXXFLAGS",
            "export PATH=\"$PATH:/opt/upcxx/bin\"",
        ]
    );
}

#[test]
fn test_env_shell_csh_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mak = write_mak(dir.path(), "upcxx.mak", "# comment\nFOO = (bar) (baz)\n");

    let output = devupc()
        .args(["env", "shell", "--mak", &mak, "--shell", "csh", "--prefix", "/opt/upcxx"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    // Zero-initializer preamble comes first, then the declaration, then
    // the setenv/path epilogue.
    assert_eq!(lines[0], "set GASNET_CC= ");
    assert!(lines.contains(&"set FOO=\"{bar} {baz}\""));
    assert!(lines.contains(&"setenv UPCXX_LDLIBS \"$UPCXX_LDLIBS\""));
    assert_eq!(*lines.last().unwrap(), "set path = (/opt/upcxx/bin $path)");

    // Every line is dialect-correct; no bare POSIX assignment slips in.
    assert!(lines
        .iter()
        .all(|l| l.starts_with("set ") || l.starts_with("setenv ")));
}

#[test]
fn test_env_shell_posix_has_no_csh_syntax() {
    let dir = tempfile::tempdir().unwrap();
    let mak = write_mak(dir.path(), "upcxx.mak", "FOO = 1\nBAR = 2\n");

    let output = devupc()
        .args(["env", "shell", "--mak", &mak])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout
        .lines()
        .all(|l| !l.starts_with("set ") && !l.starts_with("setenv ")));
}

#[test]
fn test_env_shell_default_prefix_is_two_levels_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("include")).unwrap();
    let mak = write_mak(&dir.path().join("include"), "upcxx.mak", "FOO = 1\n");

    let expected = format!("export PATH=\"$PATH:{}/bin\"", dir.path().to_str().unwrap());
    devupc()
        .args(["env", "shell", "--mak", &mak])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_env_shell_missing_fragment_fails() {
    devupc()
        .args(["env", "shell", "--mak", "/nonexistent/upcxx.mak"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("upcxx.mak"));
}

#[test]
fn test_env_shell_missing_include_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mak = write_mak(dir.path(), "upcxx.mak", "FOO = 1\ninclude missing.mak\n");

    devupc()
        .args(["env", "shell", "--mak", &mak])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.mak"));
}

#[test]
fn test_env_shell_rejects_unknown_dialect() {
    let dir = tempfile::tempdir().unwrap();
    let mak = write_mak(dir.path(), "upcxx.mak", "FOO = 1\n");

    devupc()
        .args(["env", "shell", "--mak", &mak, "--shell", "fish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell dialect"));
}

#[test]
fn test_install_dry_run_prints_commands() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("install");
    let build_dir = dir.path().join("build");

    let output = devupc()
        .args([
            "install",
            "--dry-run",
            "--preset",
            "linux",
            "--gasnet",
            "/opt/gasnet",
            "--prefix",
            prefix.to_str().unwrap(),
            "--build-dir",
            build_dir.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("git clone"));
    assert!(stdout.contains("Bootstrap.sh"));
    assert!(stdout.contains("--with-gasnet=/opt/gasnet/include/smp-conduit/smp-seq.mak"));
    assert!(stdout.contains("--enable-short-names"));

    // Nothing was executed or created.
    assert!(!build_dir.exists());
    assert!(!prefix.exists());
}

#[test]
fn test_install_rejects_unknown_preset() {
    devupc()
        .args(["install", "--dry-run", "--preset", "solaris", "--gasnet", "/g"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid preset"));
}
