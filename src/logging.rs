use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the CLI log subscriber. Logs go to stderr so stdout stays pipeable.
///
/// `RUST_LOG` wins when set; otherwise `verbose` switches the crate to debug.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "goldsmith_connect=debug,warn"
    } else {
        "goldsmith_connect=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
