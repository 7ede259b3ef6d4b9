//! Build driver for the STL mesh viewer.
//!
//! This crate provides:
//! - Host platform detection (`Linux`, `Darwin`)
//! - Build configuration with optional `stlbuild.toml` overrides
//! - Platform-specific compiler command composition
//! - The clean, print, compile sequence
//!
//! # Example
//!
//! ```toml
//! # stlbuild.toml
//! program = "stlviewer"
//! modules = ["trackball.c", "stl.c", "stl_viewer.c"]
//! libraries = ["glut", "GL", "m"]
//! frameworks = ["GLUT", "OpenGL"]
//! exit_policy = "always_succeed"
//! ```

mod command;
mod composer;
mod config;
mod error;
mod platform;

pub use command::{compose, compose_for_name, CompileCommand};
pub use composer::{remove_artifact, BuildOutcome, Composer};
pub use config::{BuildConfig, ExitPolicy, CONFIG_FILE, GRAPHICS_MARKER};
pub use error::{BuildError, Result};
pub use platform::{host_name, Platform};
