mod backend;
mod config;

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use types::{Result, err};

pub use crate::backend::BackendClient;
pub use crate::config::Config;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();
}

/// Load configuration and set up the shared backend client.
///
/// Must run before any server function is served. Later calls keep the
/// client from the first one.
pub fn init() -> Result<()> {
    let config = Config::load()?;
    let client = BACKEND.get_or_init(|| BackendClient::new(config.backend_url));
    tracing::info!(backend_url = %client.base_url(), "using backend");
    Ok(())
}

/// The process-wide backend client.
pub fn backend() -> Result<&'static BackendClient> {
    BACKEND.get().ok_or_else(|| err!("server not initialized"))
}
