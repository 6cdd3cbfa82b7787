use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` picks between debug and info
/// for this crate.
pub fn init(debug: bool) {
    let fallback = if debug {
        "tuneshelf=debug"
    } else {
        "tuneshelf=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
