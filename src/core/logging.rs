use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up console logging for the CLI.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `info`, or `debug`
/// when `debug` is true. Returns an error if a global subscriber is
/// already installed.
pub fn init_logging(debug: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let default_level = if debug { "espn_golf=debug" } else { "espn_golf=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_filter(filter),
        )
        .try_init()
}
