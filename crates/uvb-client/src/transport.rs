//! HTTP transport used by the reputation client.

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// A single authenticated JSON POST.
///
/// Implementations return the raw response body of a successful exchange.
pub trait Transport: Send + Sync {
    /// Posts `body` to `url` with the given `Authorization` header value.
    fn post_json(
        &self,
        url: Url,
        authorization: String,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport with the timeout and redirect policy of `config`.
    ///
    /// Plain-HTTP URLs are refused.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .https_only(true)
            .user_agent(concat!("uvb-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            timeout: Some(config.timeout),
        })
    }

    /// Wraps an existing `reqwest` client, keeping its own timeout.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    fn request(&self, url: Url, authorization: String, body: Vec<u8>) -> reqwest::RequestBuilder {
        let request = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, authorization)
            .body(body);

        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, url: Url, authorization: String, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self.request(url, authorization, body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}
