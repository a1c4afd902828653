//! REST [`Backend`] implementation.

mod impls;

use std::time::Duration;

use derive_more::{Display, Error as StdError, From};
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use tracerr::Traced;

use crate::infra::backend;
#[cfg(doc)]
use crate::infra::Backend;

/// REST [`Backend`] client.
///
/// A thin [`reqwest`] wrapper: every operation is a single round-trip to
/// the backend, with no retries and no client-side caching. The backend
/// stays the single source of truth for every value it returns.
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    http: reqwest::Client,

    /// Base URL of the backend, without a trailing slash.
    base_url: String,

    /// Service credential attached to every request, if configured.
    bearer: Option<SecretString>,
}

/// [`Rest`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend.
    pub base_url: String,

    /// Service credential to attach to every request.
    pub bearer: Option<SecretString>,

    /// Timeout of a single request.
    pub timeout: Duration,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to create the underlying HTTP client.
    pub fn new(conf: &Config) -> Result<Self, Traced<backend::Error>> {
        let http = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        Ok(Self {
            http,
            base_url: conf.base_url.trim_end_matches('/').to_owned(),
            bearer: conf.bearer.clone(),
        })
    }

    /// Starts building a request to the provided backend path.
    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let mut req =
            self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(bearer) = &self.bearer {
            req = req.bearer_auth(bearer.expose_secret());
        }
        req
    }

    /// Sends the provided request, requiring a success status.
    async fn send(
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Traced<Error>> {
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(tracerr::new!(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            }))
        }
    }

    /// Sends the provided request and decodes its JSON response.
    async fn json<T: DeserializeOwned>(
        req: reqwest::RequestBuilder,
    ) -> Result<T, Traced<Error>> {
        Self::send(req)
            .await?
            .json::<T>()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }

    /// Sends the provided request and decodes its JSON response, mapping
    /// a "not found" response to [`None`].
    async fn json_opt<T: DeserializeOwned>(
        req: reqwest::RequestBuilder,
    ) -> Result<Option<T>, Traced<Error>> {
        match Self::json(req).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.as_ref().status() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// REST backend [`Error`].
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// HTTP transport or decoding error.
    #[display("HTTP request failed: {_0}")]
    Http(reqwest::Error),

    /// Backend responded with a non-success status.
    #[display("backend responded with status {status}: {body}")]
    UnexpectedStatus {
        /// Status code of the response.
        status: u16,

        /// Raw body of the response.
        body: String,
    },
}

impl Error {
    /// Returns the response status code of this [`Error`], if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
