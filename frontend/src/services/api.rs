//! HTTP transport for the registration API.
//!
//! [`HttpTransport`] is the seam the workflow clients talk through;
//! [`BrowserTransport`] is the `gloo-net` implementation used in the page.

use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{API_BASE_URL, REQUEST_TIMEOUT_MS};
use crate::error::TransportError;

pub const REGISTER_PATH: &str = "/api/register";
pub const STATS_PATH: &str = "/api/stats";
pub const REGISTRATION_PATH: &str = "/api/registration";

/// JSON-over-HTTP access to the API.
///
/// Implementations must report any failure to obtain a JSON body of the
/// expected shape as a [`TransportError`].
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError>;

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError>;
}

/// Decode a response body.
///
/// The API answers `success:false` bodies on error statuses too, so the
/// body is tried first and the status only matters when it is unusable.
pub fn decode_body<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, TransportError> {
    match serde_json::from_str(body) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Err(TransportError::Status(status)),
        Err(e) => Err(e.into()),
    }
}

/// Browser `fetch` transport with a hard timeout.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base_url: String,
    timeout_ms: u32,
}

impl Default for BrowserTransport {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl BrowserTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send<R: DeserializeOwned>(&self, request: Request) -> Result<R, TransportError> {
        let response = request.send();
        let timer = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(response, timer);

        let response: Response = match select(response, timer).await {
            Either::Left((result, _)) => {
                result.map_err(|e| TransportError::Request(e.to_string()))?
            }
            Either::Right(_) => return Err(TransportError::Timeout(self.timeout_ms)),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        decode_body(status, &body)
    }
}

impl HttpTransport for BrowserTransport {
    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, TransportError> {
        let request = Request::get(&self.url(path))
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        self.send(request).await
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, TransportError> {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| TransportError::Request(e.to_string()))?;
        self.send(request).await
    }
}
