//! Launch configuration.
//!
//! There is no configuration file. The values below describe the single
//! command the launcher wraps; the overrides exist so the run can be pointed
//! at a different directory or command.

use std::path::PathBuf;

/// Upper bound on how much captured output is read back and scanned.
///
/// 4 KiB is enough text for a message box.
pub const MAX_CAPTURE_BYTES: usize = 4096;

/// Title of dialogs reporting launcher failures.
pub const ERROR_TITLE: &str = "Android SDK Manager - Error";

/// Title of the dialog showing captured warnings or errors.
pub const OUTPUT_TITLE: &str = "Android SDK Manager - Output";

/// Settings for one launcher run.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Program to run, relative to the base directory unless absolute.
    pub program: PathBuf,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory for the child. `None` resolves to the directory of
    /// the executable.
    pub base_dir: Option<PathBuf>,
    /// Path of the executable whose directory is used when `base_dir` is
    /// unset. `None` uses the running executable.
    pub executable: Option<PathBuf>,
    /// Directory for the capture file. `None` uses the system temp directory.
    pub temp_dir: Option<PathBuf>,
    /// Maximum number of captured bytes to scan.
    pub capture_limit: usize,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("tools").join("android.bat"),
            args: vec!["update".to_string(), "sdk".to_string()],
            base_dir: None,
            executable: None,
            temp_dir: None,
            capture_limit: MAX_CAPTURE_BYTES,
        }
    }
}

impl LaunchConfig {
    /// The command line as it would be typed, for traces.
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_android_bat_update_sdk() {
        let config = LaunchConfig::default();
        assert_eq!(config.program, PathBuf::from("tools").join("android.bat"));
        assert_eq!(config.args, vec!["update", "sdk"]);
        assert!(config.base_dir.is_none());
        assert!(config.executable.is_none());
        assert!(config.temp_dir.is_none());
        assert_eq!(config.capture_limit, 4096);
    }

    #[test]
    fn command_line_joins_program_and_args() {
        let config = LaunchConfig {
            program: PathBuf::from("android.bat"),
            ..Default::default()
        };
        assert_eq!(config.command_line(), "android.bat update sdk");
    }

    #[test]
    fn command_line_without_args() {
        let config = LaunchConfig {
            program: PathBuf::from("run"),
            args: Vec::new(),
            ..Default::default()
        };
        assert_eq!(config.command_line(), "run");
    }
}
