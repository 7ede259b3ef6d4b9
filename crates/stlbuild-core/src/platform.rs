//! Host platform detection.
//!
//! Platform names follow the `uname -s` convention (`Linux`, `Darwin`), which
//! is also the spelling used in the platform preprocessor marker.

use crate::error::{BuildError, Result};
use std::fmt;

/// A platform with a known compiler template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux: `gcc`, libraries linked with `-l`.
    Linux,
    /// macOS: `cc`, frameworks linked with `-framework`.
    Darwin,
}

impl Platform {
    /// Every supported platform.
    pub const ALL: [Platform; 2] = [Platform::Linux, Platform::Darwin];

    /// Parse a platform identifier such as `"Linux"` or `"Darwin"`.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "Linux" => Ok(Platform::Linux),
            "Darwin" => Ok(Platform::Darwin),
            _ => Err(BuildError::UnsupportedPlatform {
                name: name.to_string(),
            }),
        }
    }

    /// Detect the platform of the running host.
    pub fn detect() -> Result<Self> {
        Self::from_name(&host_name())
    }

    /// The platform identifier.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Darwin => "Darwin",
        }
    }

    /// Preprocessor marker for this platform, e.g. `_Linux_`.
    pub fn marker(self) -> String {
        format!("_{}_", self.name())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the host operating system in `uname -s` spelling.
pub fn host_name() -> String {
    system_name(std::env::consts::OS)
}

/// Map a Rust target OS name to its `uname -s` spelling.
fn system_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Platform::from_name("Linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_name("Darwin").unwrap(), Platform::Darwin);
    }

    #[test]
    fn test_from_name_unsupported() {
        for name in ["Windows", "linux", "", "FreeBSD"] {
            match Platform::from_name(name) {
                Err(BuildError::UnsupportedPlatform { name: reported }) => {
                    assert_eq!(reported, name)
                }
                other => panic!("expected unsupported platform for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_marker() {
        assert_eq!(Platform::Linux.marker(), "_Linux_");
        assert_eq!(Platform::Darwin.marker(), "_Darwin_");
    }

    #[test]
    fn test_system_name() {
        assert_eq!(system_name("linux"), "Linux");
        assert_eq!(system_name("macos"), "Darwin");
        assert_eq!(system_name("windows"), "Windows");
        assert_eq!(system_name("illumos"), "Illumos");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_detect_linux() {
        assert_eq!(host_name(), "Linux");
        assert_eq!(Platform::detect().unwrap(), Platform::Linux);
    }
}
