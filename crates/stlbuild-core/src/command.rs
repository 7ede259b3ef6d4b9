//! Compiler command composition.
//!
//! A [`CompileCommand`] is kept as a program plus a discrete argument vector
//! and handed to [`std::process::Command`] directly, so no shell quoting is
//! involved at any point.

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::platform::Platform;
use std::fmt;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// A single compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    /// The compiler executable.
    pub program: String,

    /// Arguments, in the order they are passed.
    pub args: Vec<String>,
}

impl CompileCommand {
    /// Create an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// Append each value with `prefix` glued on, e.g. `-l` + `m`.
    fn prefixed(&mut self, prefix: &str, values: &[String]) -> &mut Self {
        for value in values {
            self.args.push(format!("{}{}", prefix, value));
        }
        self
    }

    /// Whether any argument equals `arg`.
    pub fn has_arg(&self, arg: &str) -> bool {
        self.args.iter().any(|a| a == arg)
    }

    /// Run the command in `dir` and wait for it.
    ///
    /// Compiler output goes straight to our stdout/stderr.
    pub fn run(&self, dir: &Path) -> Result<ExitStatus> {
        log::debug!("running {:?} {:?} in {}", self.program, self.args, dir.display());

        Command::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .status()
            .map_err(|source| BuildError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

impl fmt::Display for CompileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Compose the compiler invocation for `platform`.
pub fn compose(config: &BuildConfig, platform: Platform) -> CompileCommand {
    let mut cmd = match platform {
        Platform::Linux => {
            let mut cmd = CompileCommand::new("gcc");
            cmd.arg("-Wall");
            cmd
        }
        Platform::Darwin => {
            let mut cmd = CompileCommand::new("cc");
            cmd.arg("-g").arg("-Wall").arg("-Wno-deprecated");
            cmd
        }
    };

    cmd.arg("-o").arg(config.program.as_str());
    for file in config.source_files() {
        cmd.arg(file);
    }
    cmd.prefixed("-I", &config.includes);
    cmd.prefixed("-D", &config.defines_for(platform));

    match platform {
        Platform::Linux => {
            cmd.prefixed("-l", &config.libraries);
        }
        Platform::Darwin => {
            for framework in &config.frameworks {
                cmd.arg("-framework").arg(framework.as_str());
            }
        }
    }

    cmd
}

/// Compose the invocation for a raw platform identifier.
pub fn compose_for_name(config: &BuildConfig, name: &str) -> Result<CompileCommand> {
    let platform = Platform::from_name(name)?;
    Ok(compose(config, platform))
}
