use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. `--debug` overrides `RUST_LOG`.
pub(crate) fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Ignore the error when a subscriber is already installed
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
