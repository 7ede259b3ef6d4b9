//! The compose, clean, print, compile sequence.

use crate::command::{compose, CompileCommand};
use crate::config::{BuildConfig, ExitPolicy};
use crate::error::{BuildError, Result};
use crate::platform::Platform;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitStatus;

/// Result of one build run.
#[derive(Debug)]
pub struct BuildOutcome {
    /// The command that was run.
    pub command: CompileCommand,
    /// Whether an artifact from a previous build was removed.
    pub removed_previous: bool,
    /// Exit status of the compiler.
    pub status: ExitStatus,
    /// Exit code the tool should terminate with.
    pub exit_code: i32,
}

/// Runs the viewer build for one configuration.
pub struct Composer {
    config: BuildConfig,
    policy: ExitPolicy,
}

impl Composer {
    /// Create a composer; the exit policy starts out as the configured one.
    pub fn new(config: BuildConfig) -> Self {
        let policy = config.exit_policy;
        Self { config, policy }
    }

    /// Override the exit policy.
    pub fn policy(mut self, policy: ExitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration this composer builds.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Compose the command for a platform identifier without running anything.
    pub fn compose(&self, platform_name: &str) -> Result<CompileCommand> {
        let platform = Platform::from_name(platform_name)?;
        log::debug!("composing build for {}", platform);
        Ok(compose(&self.config, platform))
    }

    /// Build in `dir` for the given platform identifier.
    ///
    /// An unsupported platform fails before the filesystem is touched.
    pub fn build(&self, dir: &Path, platform_name: &str) -> Result<BuildOutcome> {
        let command = self.compose(platform_name)?;
        self.run(dir, command)
    }

    /// Remove the old artifact, print `command`, and run it in `dir`.
    pub fn run(&self, dir: &Path, command: CompileCommand) -> Result<BuildOutcome> {
        let removed_previous = remove_artifact(dir, &self.config.program)?;

        println!("{}", command);
        let status = command.run(dir)?;

        if !status.success() && self.policy == ExitPolicy::AlwaysSucceed {
            log::warn!("{} exited with {}, ignoring", command.program, status);
        }

        Ok(BuildOutcome {
            exit_code: self.policy.exit_code(&status),
            command,
            removed_previous,
            status,
        })
    }
}

/// Delete `dir/program` if it exists.
///
/// Returns whether a file was removed. A missing file is not an error.
pub fn remove_artifact(dir: &Path, program: &str) -> Result<bool> {
    let path = dir.join(program);
    match std::fs::remove_file(&path) {
        Ok(()) => {
            log::info!("removed previous build output {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(BuildError::Cleanup { path, source }),
    }
}
