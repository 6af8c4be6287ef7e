//! CLI argument parsing for the launcher.
//!
//! Uses clap derive macros. The launcher accepts a single flag; everything
//! else about the run is fixed.

use clap::Parser;

/// Launches the Android SDK Manager (`tools\android.bat update sdk`) without
/// a console window and shows any warnings or errors it prints.
#[derive(Parser, Debug)]
#[command(name = "sdklauncher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print diagnostic traces to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
