use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "runboard_server=info,runboard_store=info,tower_http=info";

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = fmt().with_env_filter(filter).with_target(true).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
