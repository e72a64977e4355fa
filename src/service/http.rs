use crate::config::ServiceConfig;
use crate::form::ScrapeRequest;
use crate::results::ScrapeResult;
use crate::service::{ScrapeService, ServiceError, decode_response};
use reqwest::Client;

/// Talks to the scraping service over HTTP: one JSON POST per submission
#[derive(Debug, Clone)]
pub struct HttpScrapeService {
    client: Client,
    endpoint: String,
}

impl HttpScrapeService {
    /// Build a client for the configured endpoint.
    ///
    /// No client-side timeout is set; the request's `timeout` is for the
    /// service to enforce.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ScrapeService for HttpScrapeService {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<ScrapeResult>, ServiceError> {
        ::log::info!(
            "Submitting {} URL(s) to {}",
            request.urls.len(),
            self.endpoint
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        ::log::debug!("Service responded with HTTP {} ({} bytes)", status, body.len());

        decode_response(status, &body)
    }
}
