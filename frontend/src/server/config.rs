//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use frontend::settings::{FrontendSettings, SettingsError};
use url::Url;

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_base_url: Url,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, api_base_url: Url, request_timeout: Duration) -> Self {
        Self {
            bind_addr,
            api_base_url,
            request_timeout,
        }
    }

    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    /// Propagates the first [`SettingsError`] found.
    pub fn from_settings(settings: &FrontendSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(
            settings.bind_addr()?,
            settings.api_base_url()?,
            settings.request_timeout()?,
        ))
    }
}
