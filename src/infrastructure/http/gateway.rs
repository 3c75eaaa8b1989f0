//! HTTP implementation of the shortening service gateway.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use tracing::debug;

use super::dto::{CreateShortUrlForm, PageDataResponse};
use crate::domain::entities::{BaseAddress, NewShortUrl, PageQuery, PageResult};
use crate::domain::ports::ShortUrlGateway;
use crate::error::ClientError;

/// Listing endpoint, relative to the base address.
pub const PAGE_DATA_PATH: &str = "getpagedata";

/// Default create endpoint, relative to the base address.
pub const DEFAULT_CREATE_PATH: &str = "shortUrls";

/// Gateway speaking the service's JSON listing and url-encoded create endpoints.
pub struct HttpShortUrlGateway {
    http: reqwest::Client,
    base: BaseAddress,
    create_path: String,
}

impl HttpShortUrlGateway {
    /// Creates a gateway with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the HTTP client cannot be built (TLS backend
    /// initialization).
    pub fn new(
        base: BaseAddress,
        create_path: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base,
            create_path: create_path.into(),
        })
    }
}

#[async_trait]
impl ShortUrlGateway for HttpShortUrlGateway {
    async fn fetch_page(&self, query: PageQuery) -> Result<PageResult, ClientError> {
        let url = self.base.endpoint(PAGE_DATA_PATH);
        debug!(url = %url, page = query.page, limit = query.limit, "GET page data");

        let response = self
            .http
            .get(&url)
            .query(&[("page", query.page), ("limit", query.limit)])
            .send()
            .await?;

        let body: PageDataResponse = ensure_success(response).await?.json().await?;
        Ok(body.into())
    }

    async fn create_short_url(&self, request: NewShortUrl) -> Result<(), ClientError> {
        let url = self.base.endpoint(&self.create_path);
        debug!(url = %url, length = request.url_length, "POST short URL");

        let form = CreateShortUrlForm {
            full_url: &request.full_url,
            url_length: request.url_length,
        };

        let response = self.http.post(&url).form(&form).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Maps non-2xx responses to [`ClientError::HttpStatus`], keeping the body for the log.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::http_status(status.as_u16(), body))
}
