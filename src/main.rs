//! sdklauncher: starts the Android SDK Manager from the root of a Windows SDK.
//!
//! The executable sits next to the `tools` directory and runs
//! `tools\android.bat update sdk` without a console window. Anything the
//! batch file prints containing `WARNING` or `ERROR` is shown in a message
//! box once it exits.

mod capture;
mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
mod launcher;
mod logging;
mod notify;
mod platform;
mod scan;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    launcher::run(cli.verbose)
}
