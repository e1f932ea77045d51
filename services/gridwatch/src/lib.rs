//! gridwatch - Energy and alarm monitoring console
//!
//! Client for the monitoring REST API: bearer-token session handling,
//! response envelope unwrapping, and views that fall back to placeholder data
//! when the server cannot be reached.

pub mod api;
pub mod client;
pub mod config;
pub mod console;
pub mod envelope;
pub mod error;
pub mod io;
pub mod placeholder;
pub mod records;
pub mod render;
pub mod session;

pub use client::ApiClient;
pub use config::{load_config, Config};
pub use console::Console;
pub use envelope::Envelope;
pub use error::{GridwatchError, Result};

use std::sync::Arc;

use crate::io::ReqwestHttpClient;
use crate::session::FileTokenStore;

/// Build a console wired to the configured server and token file
pub fn build_console(config: &Config) -> Result<Console> {
    config.validate()?;

    let http: Arc<dyn io::HttpClient> =
        Arc::new(ReqwestHttpClient::new(config.server.request_timeout)?);
    let tokens: Arc<dyn session::TokenStore> =
        Arc::new(FileTokenStore::new(&config.session.token_file));
    let client = ApiClient::new(config.server.base_url.clone(), http, tokens);

    tracing::debug!(
        "Console ready: base_url={}, token_file={:?}, timeout={:?}",
        config.server.base_url,
        config.session.token_file,
        config.server.request_timeout
    );
    Ok(Console::new(client))
}
