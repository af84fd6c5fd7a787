use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;

use crate::logic::errors::ServiceError;
use crate::logic::normalize::normalize;
use crate::model::{Listing, SearchRequest};

/// Endpoint used when neither config nor CLI names one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/scrape";

/// Anything that can run one scrape for the controller
///
/// Implemented by `ScrapeClient` over HTTP; tests provide canned backends.
pub trait SearchBackend {
    fn scrape(&self, request: &SearchRequest) -> impl Future<Output = Result<Vec<Listing>>> + Send;
}

#[derive(Clone)]
pub struct ScrapeClient {
    endpoint: String,
    client: Client,
}

impl ScrapeClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// POST the search and return normalized listings
    ///
    /// The whole body is buffered before it is interpreted.
    pub async fn post_search(&self, request: &SearchRequest) -> Result<Vec<Listing>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("Failed to reach scraping service")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response")?;

        interpret_response(status.as_u16(), status.is_success(), &body)
    }
}

impl SearchBackend for ScrapeClient {
    fn scrape(&self, request: &SearchRequest) -> impl Future<Output = Result<Vec<Listing>>> + Send {
        self.post_search(request)
    }
}

/// Turn a buffered response into listings or an error
///
/// Non-success statuses become a `ServiceError`. A success body that is not
/// JSON at all is rejected; any JSON value is handed to the normalizer.
pub fn interpret_response(status: u16, success: bool, body: &str) -> Result<Vec<Listing>> {
    if !success {
        return Err(ServiceError::from_response(status, body).into());
    }

    let payload: Value = serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

    Ok(normalize(&payload))
}
