//! User notification.
//!
//! Failures and captured warnings are shown in modal dialogs. Failures are
//! also written to stderr with their platform error code.

use crate::config::{ERROR_TITLE, OUTPUT_TITLE};
use crate::error::LaunchError;

/// Receives everything the launcher wants the user to see.
pub trait Notifier {
    /// Report a failure.
    fn error(&mut self, err: &LaunchError);

    /// Show the excerpt of captured output.
    fn output(&mut self, excerpt: &str);
}

/// Line written to stderr for a failure, e.g. `Create temp file failed, error 5`.
///
/// Errors without a platform code report code 0.
pub fn error_line(err: &LaunchError) -> String {
    format!("{}, error {}", err, err.code().unwrap_or(0))
}

/// Body of the error dialog: the description and the platform's text.
pub fn error_body(err: &LaunchError) -> String {
    format!("{}\r\n{}", err, err.os_message())
}

/// Shows modal message boxes.
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn error(&mut self, err: &LaunchError) {
        eprintln!("{}", error_line(err));
        eprintln!("{}", err.os_message());
        show_dialog(ERROR_TITLE, &error_body(err), true);
    }

    fn output(&mut self, excerpt: &str) {
        show_dialog(OUTPUT_TITLE, excerpt, false);
    }
}

#[cfg(windows)]
fn show_dialog(title: &str, body: &str, is_error: bool) {
    use rfd::{MessageButtons, MessageDialog, MessageLevel};

    let level = if is_error {
        MessageLevel::Error
    } else {
        MessageLevel::Info
    };
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}

#[cfg(not(windows))]
fn show_dialog(title: &str, body: &str, is_error: bool) {
    // Failures were already written to stderr.
    if !is_error {
        eprintln!("{}\n{}", title, body);
    }
}
