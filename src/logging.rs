use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// `RUST_LOG` decides what is shown, `warn` when it is unset or invalid.
/// `--verbose` overrides it with `debug`.
fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::default().add_directive(LevelFilter::DEBUG.into());
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::WARN.into()))
}

/// Installs the stderr subscriber for `rq`. Library events are emitted at
/// `debug`, so they only show up with `--verbose` or `RUST_LOG=debug`.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
