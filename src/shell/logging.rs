use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Respects `RUST_LOG`, otherwise logs at `info`.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
