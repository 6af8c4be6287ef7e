//! Diagnostic tracing setup.
//!
//! Traces go to stderr and are only enabled by the `-v` flag.

use tracing_subscriber::EnvFilter;

/// Filter directive used for a run with the given verbosity.
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "off" }
}

/// Install the stderr subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter_directive(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .try_init();

    tracing::debug!("verbose debug mode");
}
