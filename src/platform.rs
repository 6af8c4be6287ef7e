//! Platform boundary: target-OS check and executable location.

use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};

/// Whether the launcher can run on this target.
pub fn is_supported() -> bool {
    cfg!(windows)
}

/// Fails with [`LaunchError::Unsupported`] outside Windows.
pub fn ensure_supported() -> Result<()> {
    if is_supported() {
        Ok(())
    } else {
        Err(LaunchError::Unsupported {
            os: std::env::consts::OS,
        })
    }
}

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|source| LaunchError::ProgramDir { source })?;
    program_dir_of(&exe)
}

/// Directory containing the executable at `exe`.
pub fn program_dir_of(exe: &Path) -> Result<PathBuf> {
    match exe.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => Err(LaunchError::ProgramDir {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("'{}' has no parent directory", exe.display()),
            ),
        }),
    }
}

/// Mark the child so it does not open a console window.
#[cfg(windows)]
pub fn hide_console(command: &mut std::process::Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x08000000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
pub fn hide_console(_command: &mut std::process::Command) {}
