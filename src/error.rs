//! Error types for the launcher.
//!
//! Uses thiserror for derive macros. Every variant wraps the `io::Error`
//! reported by the platform so the notifier can show both the error code and
//! the system's description of it.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while launching the SDK Manager.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The launcher only runs on Windows.
    #[error("Android SDK Manager launcher is not supported on {os}")]
    Unsupported { os: &'static str },

    /// Could not create the temp file used to capture output.
    #[error("Create temp file failed")]
    TempFile {
        #[source]
        source: io::Error,
    },

    /// Could not determine the directory of the running executable.
    #[error("Failed to get program's filename")]
    ProgramDir {
        #[source]
        source: io::Error,
    },

    /// The child process could not be started.
    #[error("Failed to execute {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Waiting on the child process failed.
    #[error("Wait for process failed")]
    Wait {
        #[source]
        source: io::Error,
    },

    /// The temp file could not be reopened for reading.
    #[error("Open temp file failed")]
    OpenTemp {
        #[source]
        source: io::Error,
    },

    /// The captured output could not be read back.
    #[error("Read Output failed")]
    ReadOutput {
        #[source]
        source: io::Error,
    },

    /// The temp file could not be deleted.
    #[error("Delete temp file failed: {}", .path.display())]
    DeleteTemp {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    fn io_source(&self) -> Option<&io::Error> {
        match self {
            LaunchError::Unsupported { .. } => None,
            LaunchError::TempFile { source }
            | LaunchError::ProgramDir { source }
            | LaunchError::Spawn { source, .. }
            | LaunchError::Wait { source }
            | LaunchError::OpenTemp { source }
            | LaunchError::ReadOutput { source }
            | LaunchError::DeleteTemp { source, .. } => Some(source),
        }
    }

    /// The platform error code behind this failure, if the OS reported one.
    pub fn code(&self) -> Option<i32> {
        self.io_source().and_then(io::Error::raw_os_error)
    }

    /// Text describing the underlying platform error.
    pub fn os_message(&self) -> String {
        match self.io_source() {
            Some(source) => match source.raw_os_error() {
                Some(code) => io::Error::from_raw_os_error(code).to_string(),
                None => source.to_string(),
            },
            None => "The operation is not supported on this platform.".to_string(),
        }
    }

    /// Whether this failure aborts the run.
    ///
    /// Open, read and delete failures happen after the child has finished
    /// and are only reported.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            LaunchError::OpenTemp { .. }
                | LaunchError::ReadOutput { .. }
                | LaunchError::DeleteTemp { .. }
        )
    }

    /// Exit code of a run that hit this error: `FAILURE` for fatal errors,
    /// `SUCCESS` for errors that are only reported.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            exit_codes::FAILURE
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
