use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `directive` wins over `verbose` when it parses.
pub fn init(verbose: bool, directive: Option<&str>) {
    let default_level = if verbose { "debug" } else { "warn" };

    let (filter, rejected) = match directive.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(err)) => (EnvFilter::new(default_level), Some(err)),
        None => (EnvFilter::new(default_level), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(err) = rejected {
        warn!("ignoring invalid log filter {:?}: {}", directive.unwrap_or_default(), err);
    }
}
