//! Build configuration (`stlbuild.toml` format).

use crate::error::{BuildError, Result};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "stlbuild.toml";

/// Define marking the graphics API the viewer renders with.
pub const GRAPHICS_MARKER: &str = "_OPENGL_";

/// Build configuration for the viewer.
///
/// Every field is optional in the file; missing fields take the values from
/// [`BuildConfig::default`], which describe the stock stlviewer build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output program name.
    pub program: String,

    /// Directory the modules live in. Modules are passed as-is when unset.
    pub src_dir: Option<PathBuf>,

    /// Source modules, compiled in this order.
    pub modules: Vec<String>,

    /// Include directories.
    pub includes: Vec<String>,

    /// Libraries to link against (Linux).
    pub libraries: Vec<String>,

    /// Frameworks to link against (Darwin).
    pub frameworks: Vec<String>,

    /// Extra preprocessor definitions, added after the graphics and platform markers.
    pub defines: Vec<String>,

    /// How the compiler's exit status maps to ours.
    pub exit_policy: ExitPolicy,
}

/// Mapping from the compiler's exit status to the tool's exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitPolicy {
    /// Always exit 0 once the compiler has run.
    #[default]
    AlwaysSucceed,
    /// Exit with the compiler's own status.
    PropagateChild,
}

impl ExitPolicy {
    /// Exit code for a finished compiler process.
    pub fn exit_code(self, status: &std::process::ExitStatus) -> i32 {
        match self {
            ExitPolicy::AlwaysSucceed => 0,
            // Killed by a signal: no code to forward.
            ExitPolicy::PropagateChild => status.code().unwrap_or(1),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: "stlviewer".to_string(),
            src_dir: None,
            modules: vec![
                "trackball.c".to_string(),
                "stl.c".to_string(),
                "stl_viewer.c".to_string(),
            ],
            includes: Vec::new(),
            libraries: vec!["glut".to_string(), "GL".to_string(), "m".to_string()],
            frameworks: vec!["GLUT".to_string(), "OpenGL".to_string()],
            defines: Vec::new(),
            exit_policy: ExitPolicy::AlwaysSucceed,
        }
    }
}

impl BuildConfig {
    /// Load `stlbuild.toml` from `dir`, or the defaults if there is none.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BuildError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BuildConfig = toml::from_str(&content)?;
        log::debug!("loaded build configuration from {}", path.display());
        Ok(config)
    }

    /// Source file arguments, in module order.
    pub fn source_files(&self) -> Vec<String> {
        match &self.src_dir {
            Some(dir) => self
                .modules
                .iter()
                .map(|module| format!("{}/{}", dir.display(), module))
                .collect(),
            None => self.modules.clone(),
        }
    }

    /// Preprocessor definitions for a platform.
    ///
    /// The graphics marker comes first and the platform marker second. Base
    /// defines follow, minus any repeat of either marker.
    pub fn defines_for(&self, platform: Platform) -> Vec<String> {
        let marker = platform.marker();
        let mut defines = vec![GRAPHICS_MARKER.to_string(), marker];

        for def in &self.defines {
            if !defines.contains(def) {
                defines.push(def.clone());
            }
        }

        defines
    }

    /// Set the output program name.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    /// Replace the module list.
    pub fn with_modules(mut self, modules: &[&str]) -> Self {
        self.modules = modules.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the include directories.
    pub fn with_includes(mut self, includes: &[&str]) -> Self {
        self.includes = includes.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the library list.
    pub fn with_libraries(mut self, libraries: &[&str]) -> Self {
        self.libraries = libraries.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the framework list.
    pub fn with_frameworks(mut self, frameworks: &[&str]) -> Self {
        self.frameworks = frameworks.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Replace the base defines.
    pub fn with_defines(mut self, defines: &[&str]) -> Self {
        self.defines = defines.iter().map(|s| s.to_string()).collect();
        self
    }
}
