//! Frontend configuration loaded via OrthoConfig.
//!
//! Values come from `GUESTBOOK_*` environment variables, CLI flags or a
//! config file, layered by OrthoConfig. The API base URL has no default:
//! startup fails when it is absent.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("GUESTBOOK_API_URL must be set to the guestbook API base URL")]
    MissingApiUrl,
    #[error("API base URL `{value}` is invalid: {reason}")]
    InvalidApiUrl { value: String, reason: String },
    #[error("bind host `{value}` is not an IP address: {source}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for the frontend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GUESTBOOK")]
pub struct FrontendSettings {
    /// Base URL of the guestbook REST API, e.g. `http://localhost:8000`.
    pub api_url: Option<String>,
    /// Interface address to bind.
    #[ortho_config(default = String::from(DEFAULT_HOST))]
    pub host: String,
    /// Port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// Upper bound for each backend call, in seconds.
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,
}

impl FrontendSettings {
    /// Parse the API base URL.
    ///
    /// # Errors
    /// [`SettingsError::MissingApiUrl`] when unset or blank;
    /// [`SettingsError::InvalidApiUrl`] when it does not parse, is not
    /// HTTP(S), or cannot carry path segments.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(SettingsError::MissingApiUrl)?;
        let invalid = |reason: String| SettingsError::InvalidApiUrl {
            value: raw.to_owned(),
            reason,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_owned()));
        }
        Ok(url)
    }

    /// Socket address to bind, from `host` and `port`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidHost`] when `host` is not an IP literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.trim();
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::InvalidHost {
            value: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Per-request timeout for backend calls.
    ///
    /// # Errors
    /// [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for frontend configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "GUESTBOOK_API_URL",
        "GUESTBOOK_HOST",
        "GUESTBOOK_PORT",
        "GUESTBOOK_REQUEST_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> FrontendSettings {
        FrontendSettings::load_from_iter([OsString::from("frontend")])
            .expect("config should load")
    }

    fn settings_with_url(url: &str) -> FrontendSettings {
        FrontendSettings {
            api_url: Some(url.to_owned()),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    #[rstest]
    fn defaults_apply_and_api_url_is_required() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.api_base_url(), Err(SettingsError::MissingApiUrl));
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            SocketAddr::from(([127, 0, 0, 1], 3000))
        );
        assert_eq!(
            settings.request_timeout().expect("default timeout"),
            Duration::from_secs(30)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("GUESTBOOK_API_URL", Some("http://api.internal:8000/v1/".to_owned())),
            ("GUESTBOOK_HOST", Some("0.0.0.0".to_owned())),
            ("GUESTBOOK_PORT", Some("8080".to_owned())),
            ("GUESTBOOK_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("valid url").as_str(),
            "http://api.internal:8000/v1/"
        );
        assert_eq!(
            settings.bind_addr().expect("bind address"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(
            settings.request_timeout().expect("timeout"),
            Duration::from_secs(5)
        );
    }

    #[rstest]
    fn missing_api_url_is_reported_after_loading() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let error = load_from_empty_args()
            .api_base_url()
            .expect_err("no API URL configured");
        assert_eq!(
            error.to_string(),
            "GUESTBOOK_API_URL must be set to the guestbook API base URL"
        );
    }

    #[rstest]
    #[case("   ")]
    #[case("")]
    fn blank_api_url_counts_as_missing(#[case] raw: &str) {
        assert_eq!(
            settings_with_url(raw).api_base_url(),
            Err(SettingsError::MissingApiUrl)
        );
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://example.com")]
    #[case("mailto:guestbook@example.com")]
    fn unusable_api_urls_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            settings_with_url(raw).api_base_url(),
            Err(SettingsError::InvalidApiUrl { .. })
        ));
    }

    #[rstest]
    fn hostnames_are_rejected_as_bind_host() {
        let settings = FrontendSettings {
            host: "localhost".to_owned(),
            ..settings_with_url("http://localhost:8000")
        };
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost { .. })
        ));
    }

    #[rstest]
    fn zero_timeout_is_rejected() {
        let settings = FrontendSettings {
            request_timeout_secs: 0,
            ..settings_with_url("http://localhost:8000")
        };
        assert_eq!(settings.request_timeout(), Err(SettingsError::ZeroTimeout));
    }
}
