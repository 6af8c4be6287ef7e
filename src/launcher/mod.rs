//! One synchronous run of the wrapped SDK command.
//!
//! The run is linear:
//! 1. Create the temp capture file
//! 2. Resolve the program directory and spawn the child with its output
//!    redirected to the capture file
//! 3. Wait for the child to exit
//! 4. Read back and scan the captured output
//! 5. Delete the capture file
//!
//! A fatal failure skips the remaining steps but never the cleanup. Every
//! failure is handed to the [`Notifier`].

use crate::capture::TempCapture;
use crate::config::LaunchConfig;
use crate::error::{LaunchError, Result};
use crate::exit_codes;
use crate::logging;
use crate::notify::{DialogNotifier, Notifier};
use crate::platform;
use crate::scan::{self, Excerpt};
use std::path::PathBuf;
use std::process::{Command, ExitCode, ExitStatus, Stdio};


/// Run the SDK Manager with the default configuration and dialogs.
pub fn run(verbose: bool) -> ExitCode {
    logging::init(verbose);

    let mut notifier = DialogNotifier;
    let code = launch(&LaunchConfig::default(), &mut notifier);
    ExitCode::from(code as u8)
}

/// Check the platform, then execute a run. Returns the process exit code.
pub fn launch(config: &LaunchConfig, notifier: &mut dyn Notifier) -> i32 {
    if let Err(err) = platform::ensure_supported() {
        notifier.error(&err);
        return err.exit_code();
    }

    Launcher::new(config.clone()).execute(notifier).exit_code()
}

/// What happened during a run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    /// A fatal step failed.
    pub failed: bool,
    /// Exit status of the child, if it was spawned and waited on.
    pub child_status: Option<ExitStatus>,
    /// Number of captured bytes that were scanned.
    pub captured_bytes: usize,
    /// Excerpt shown to the user, if the output had a keyword.
    pub excerpt: Option<Excerpt>,
}

impl RunOutcome {
    fn failed() -> Self {
        Self {
            failed: true,
            ..Default::default()
        }
    }

    pub fn is_success(&self) -> bool {
        !self.failed
    }

    pub fn exit_code(&self) -> i32 {
        if !self.is_success() {
            exit_codes::FAILURE
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Runs the configured command and surfaces its warnings and errors.
#[derive(Debug, Clone, Default)]
pub struct Launcher {
    config: LaunchConfig,
}

impl Launcher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Execute one run.
    ///
    /// The capture file is deleted before this returns, whatever happened.
    pub fn execute(&self, notifier: &mut dyn Notifier) -> RunOutcome {
        let mut capture = match TempCapture::create(self.config.temp_dir.as_deref()) {
            Ok(capture) => capture,
            Err(err) => {
                notifier.error(&err);
                return RunOutcome::failed();
            }
        };

        let mut outcome = RunOutcome::default();
        match self.run_child(&capture) {
            Ok(status) => outcome.child_status = Some(status),
            Err(err) => {
                notifier.error(&err);
                outcome.failed = true;
            }
        }

        tracing::debug!("cleanup");
        capture.close_writer();

        if !outcome.failed {
            match capture.read_back(self.config.capture_limit) {
                Ok(buf) => {
                    outcome.captured_bytes = buf.len();
                    outcome.excerpt = scan::find_excerpt(&buf);
                    if let Some(excerpt) = &outcome.excerpt {
                        tracing::debug!(
                            keyword = ?excerpt.keyword,
                            start = excerpt.start,
                            end = excerpt.end,
                            "captured output has a keyword"
                        );
                        notifier.output(&excerpt.text);
                    }
                }
                Err(err) => notifier.error(&err),
            }
        }

        if let Err(err) = capture.remove() {
            notifier.error(&err);
        }

        outcome
    }

    fn working_dir(&self) -> Result<PathBuf> {
        match (&self.config.base_dir, &self.config.executable) {
            (Some(dir), _) => Ok(dir.clone()),
            (None, Some(exe)) => platform::program_dir_of(exe),
            (None, None) => platform::program_dir(),
        }
    }

    /// Spawn the child and wait for it.
    ///
    /// The command and child are dropped on return, which releases the
    /// process handle and this process's copies of the capture handles.
    fn run_child(&self, capture: &TempCapture) -> Result<ExitStatus> {
        let dir = self.working_dir()?;
        tracing::debug!(program_dir = %dir.display(), "resolved program directory");

        let (stdout, stderr) = capture.stdio()?;
        let mut command = Command::new(dir.join(&self.config.program));
        command
            .args(&self.config.args)
            .current_dir(&dir)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(stderr);
        platform::hide_console(&mut command);

        tracing::debug!(command = %self.config.command_line(), "spawning child process");
        let spawned = command.spawn();
        tracing::debug!(ok = spawned.is_ok(), "spawn returned");
        let mut child = spawned.map_err(|source| LaunchError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;
        drop(command);

        tracing::debug!(pid = child.id(), "wait for process to finish");
        let status = child.wait().map_err(|source| LaunchError::Wait { source })?;
        tracing::debug!(exit_code = ?status.code(), "child process exited");

        Ok(status)
    }
}
