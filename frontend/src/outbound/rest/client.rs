//! Reqwest-backed Resource Client.
//!
//! This adapter owns transport details only: endpoint building from the
//! configured base URL, JSON serialisation, HTTP status mapping and decoding
//! into domain records. Each call is one request; nothing is retried or
//! cached.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::{Operation, ResourceError};
use crate::domain::{TRACE_ID_HEADER, TraceId};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Errors raised while constructing a [`RestResourceClient`].
#[derive(Debug, thiserror::Error)]
pub enum RestClientBuildError {
    /// Only plain HTTP(S) backends are supported.
    #[error("API base URL must use http or https, got `{scheme}`")]
    UnsupportedScheme { scheme: String },
    /// URLs such as `mailto:` cannot have path segments appended.
    #[error("API base URL `{url}` cannot carry resource paths")]
    CannotBeABase { url: String },
    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Resource Client bound to one backend base URL.
///
/// Implements [`UsersApi`](crate::domain::ports::UsersApi) and
/// [`GuestbooksApi`](crate::domain::ports::GuestbooksApi).
#[derive(Debug, Clone)]
pub struct RestResourceClient {
    client: Client,
    base_url: Url,
}

impl RestResourceClient {
    /// Build a client using a reqwest client with an explicit request timeout.
    /// ```rust,no_run
    /// use std::time::Duration;
    ///
    /// use frontend::outbound::rest::RestResourceClient;
    /// use reqwest::Url;
    ///
    /// let base = Url::parse("http://localhost:8000").expect("valid URL");
    /// let client = RestResourceClient::new(base, Duration::from_secs(30)).expect("client");
    /// assert_eq!(client.base_url().as_str(), "http://localhost:8000/");
    /// ```
    /// # Errors
    ///
    /// Returns an error when the base URL is not an HTTP(S) URL that can
    /// carry paths, or when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, RestClientBuildError> {
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RestClientBuildError::UnsupportedScheme {
                scheme: base_url.scheme().to_owned(),
            });
        }
        if base_url.cannot_be_a_base() {
            return Err(RestClientBuildError::CannotBeABase {
                url: base_url.to_string(),
            });
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL every resource path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, keeping any prefix it carries.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so the segments are always writable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(super) async fn get_json<T>(
        &self,
        operation: Operation,
        url: Url,
    ) -> Result<T, ResourceError>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(operation, self.client.get(url)).await?;
        decode(operation, &body)
    }

    pub(super) async fn send_json<B, T>(
        &self,
        operation: Operation,
        method: Method,
        url: Url,
        payload: &B,
    ) -> Result<T, ResourceError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(payload).map_err(|error| {
            ResourceError::decode(operation, format!("payload did not serialise: {error}"))
        })?;
        let request = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .body(body);
        let body = self.execute(operation, request).await?;
        decode(operation, &body)
    }

    pub(super) async fn delete(&self, operation: Operation, url: Url) -> Result<(), ResourceError> {
        self.execute(operation, self.client.delete(url)).await?;
        Ok(())
    }

    async fn execute(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, ResourceError> {
        let request = match TraceId::current() {
            Some(trace_id) => request.header(TRACE_ID_HEADER, trace_id.to_string()),
            None => request,
        };
        let response = request
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;
        if !status.is_success() {
            return Err(map_status_error(operation, &url, status, body.as_ref()));
        }

        debug!(
            %operation,
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            "backend call succeeded"
        );
        Ok(body.to_vec())
    }
}

fn decode<T>(operation: Operation, body: &[u8]) -> Result<T, ResourceError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        warn!(%operation, %error, "backend response did not decode");
        ResourceError::decode(operation, error.to_string())
    })
}

fn map_transport_error(operation: Operation, error: &reqwest::Error) -> ResourceError {
    warn!(%operation, %error, timeout = error.is_timeout(), "backend unreachable");
    ResourceError::unavailable(operation, error.to_string())
}

fn map_status_error(
    operation: Operation,
    url: &Url,
    status: StatusCode,
    body: &[u8],
) -> ResourceError {
    if status == StatusCode::NOT_FOUND {
        warn!(%operation, %url, "backend reported resource missing");
        return ResourceError::not_found(operation);
    }
    let detail = body_preview(body);
    warn!(
        %operation,
        %url,
        status = status.as_u16(),
        %detail,
        "backend rejected request"
    );
    ResourceError::rejected(operation, status.as_u16(), detail)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
