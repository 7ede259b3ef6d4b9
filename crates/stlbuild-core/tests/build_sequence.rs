//! End-to-end tests of the clean, print, compile sequence.
//!
//! A real compiler is not assumed to be installed, so these tests swap the
//! composed compiler for small shell commands that stand in for it.
#![cfg(unix)]

use std::fs;
use std::path::Path;

use stlbuild_core::{BuildConfig, BuildError, CompileCommand, Composer, ExitPolicy, Platform};

/// Stand-in compiler: fails if the old artifact is still present, then writes a new one.
fn fake_compiler(program: &str) -> CompileCommand {
    let mut cmd = CompileCommand::new("sh");
    cmd.arg("-c")
        .arg(format!("test ! -e {0} && echo built > {0}", program));
    cmd
}

fn artifact(dir: &Path) -> std::path::PathBuf {
    dir.join("stlviewer")
}

#[test]
fn rebuild_removes_previous_artifact() {
    for platform in Platform::ALL {
        let dir = tempfile::tempdir().unwrap();
        let composer = Composer::new(BuildConfig::default()).policy(ExitPolicy::PropagateChild);

        // The real command must exist for the platform even though we don't run it.
        let composed = composer.compose(platform.name()).unwrap();
        assert!(composed.has_arg("stlviewer"));

        let first = composer.run(dir.path(), fake_compiler("stlviewer")).unwrap();
        assert!(!first.removed_previous);
        assert!(first.status.success());
        assert!(artifact(dir.path()).exists());

        let second = composer.run(dir.path(), fake_compiler("stlviewer")).unwrap();
        assert!(second.removed_previous);
        assert!(second.status.success(), "artifact survived into the second compile");
        assert_eq!(fs::read_to_string(artifact(dir.path())).unwrap(), "built\n");
    }
}

#[test]
fn failing_compiler_exit_code_follows_policy() {
    let dir = tempfile::tempdir().unwrap();

    let lenient = Composer::new(BuildConfig::default());
    let outcome = lenient.run(dir.path(), CompileCommand::new("false")).unwrap();
    assert!(!outcome.status.success());
    assert_eq!(outcome.exit_code, 0);

    let strict = Composer::new(BuildConfig::default()).policy(ExitPolicy::PropagateChild);
    let outcome = strict.run(dir.path(), CompileCommand::new("false")).unwrap();
    assert_eq!(outcome.exit_code, 1);
}

#[test]
fn missing_compiler_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let composer = Composer::new(BuildConfig::default());

    let err = composer
        .run(dir.path(), CompileCommand::new("stlbuild-no-such-compiler"))
        .unwrap_err();

    match err {
        BuildError::Spawn { program, .. } => assert_eq!(program, "stlbuild-no-such-compiler"),
        other => panic!("expected spawn error, got {:?}", other),
    }
}

#[test]
fn unsupported_platform_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(artifact(dir.path()), b"old").unwrap();

    let err = Composer::new(BuildConfig::default())
        .build(dir.path(), "SunOS")
        .unwrap_err();

    assert_eq!(err.to_string(), "Unsupported platform: SunOS");
    assert!(artifact(dir.path()).exists());
}

#[test]
fn config_file_drives_composition() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(stlbuild_core::CONFIG_FILE),
        r#"
program = "viewer"
modules = ["a.c", "b.c"]
libraries = ["m"]
"#,
    )
    .unwrap();

    let config = BuildConfig::load(dir.path()).unwrap();
    let cmd = Composer::new(config).compose("Linux").unwrap();

    let normalized = cmd.to_string().split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(normalized, "gcc -Wall -o viewer a.c b.c -D_OPENGL_ -D_Linux_ -lm");
}
