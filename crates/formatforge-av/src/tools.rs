//! External converter detection and management.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the external converter binary.
pub const CONVERTER_NAME: &str = "ffmpeg";

#[cfg(windows)]
const CONVERTER_EXE: &str = "ffmpeg.exe";
#[cfg(not(windows))]
const CONVERTER_EXE: &str = "ffmpeg";

/// Information about the external converter.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string (first line of `-version` output), if available.
    pub version: Option<String>,
    /// Path the tool resolved to.
    pub path: PathBuf,
}

/// Locate the converter binary.
///
/// Resolution order, first hit wins:
/// 1. A binary alongside the running executable.
/// 2. `PATH` lookup.
/// 3. The bare name, deferring resolution to the OS at spawn time.
pub fn locate_converter() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let local = dir.join(CONVERTER_EXE);
            if local.is_file() {
                return local;
            }
        }
    }

    if let Ok(found) = which::which(CONVERTER_NAME) {
        return found;
    }

    PathBuf::from(CONVERTER_NAME)
}

/// Locate the converter, preferring a configured path when it exists.
pub fn locate_converter_with(config_path: Option<&Path>) -> PathBuf {
    if let Some(path) = config_path {
        if path.is_file() {
            return path.to_path_buf();
        }
    }
    locate_converter()
}

/// Probe a converter binary with its version flag.
///
/// Returns the first line of the version output on a zero exit code. Every
/// failure mode (missing binary, not executable, OS error, non-zero exit)
/// yields `None`; this never panics or errors.
pub fn probe_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("-version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.to_string())
}

/// Check that a specific converter binary responds to its version flag.
pub fn check_converter(path: &Path) -> bool {
    probe_version(path).is_some()
}

/// Check whether the located converter is available on this system.
pub fn is_converter_available() -> bool {
    check_converter(&locate_converter())
}

/// Availability report for the located converter.
///
/// # Example
///
/// ```no_run
/// use formatforge_av::converter_info;
///
/// let info = converter_info();
/// if info.available {
///     println!("{} at {}", info.version.as_deref().unwrap_or("?"), info.path.display());
/// }
/// ```
pub fn converter_info() -> ToolInfo {
    converter_info_at(&locate_converter())
}

/// Availability report for a specific converter path.
pub fn converter_info_at(path: &Path) -> ToolInfo {
    let version = probe_version(path);
    ToolInfo {
        name: CONVERTER_NAME.to_string(),
        available: version.is_some(),
        version,
        path: path.to_path_buf(),
    }
}
