//! Subscriber setup for the harness.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Filters by `RUST_LOG`, falling back to `warn`.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .init();
    } else {
        builder.init();
    }
}
