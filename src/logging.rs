use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs a stderr formatter. `RUST_LOG` wins; otherwise `verbose` picks
/// between `debug` and `warn` for this crate.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "game_links=debug" } else { "game_links=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
