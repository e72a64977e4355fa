pub mod http;

use crate::form::ScrapeRequest;
use crate::results::ScrapeResult;
use serde::Deserialize;
use std::future::Future;
use thiserror::Error;

/// Message shown when the service gives no usable error message
pub const FALLBACK_ERROR: &str = "Failed to scrape";

/// Why a submission failed
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never got a response (connection refused, DNS, TLS, ...)
    #[error("request to scraping service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with an error payload
    #[error("scraping service reported an error (HTTP {status}): {message}")]
    Reported { status: u16, message: String },

    /// Non-2xx status without a usable error payload
    #[error("scraping service returned HTTP {0}")]
    Status(u16),

    /// A 2xx response whose body is not a list of results
    #[error("invalid response from scraping service: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Message to put in the error banner
    pub fn user_message(&self) -> &str {
        match self {
            ServiceError::Reported { message, .. } => message,
            _ => FALLBACK_ERROR,
        }
    }
}

/// The external scraping service
pub trait ScrapeService {
    /// Submit one scrape request and wait for the per-page results
    fn scrape(
        &self,
        request: &ScrapeRequest,
    ) -> impl Future<Output = Result<Vec<ScrapeResult>, ServiceError>> + Send;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a service response.
///
/// A 2xx body must be a JSON array of results. An object carrying a non-empty
/// `error` string is reported verbatim whatever the status; anything else that
/// is not a success becomes a fallback error.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<ScrapeResult>, ServiceError> {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<Vec<ScrapeResult>>(body) {
            Ok(results) => Ok(results),
            Err(e) => Err(match error_message(body) {
                Some(message) => ServiceError::Reported { status, message },
                None => ServiceError::Decode(e),
            }),
        };
    }

    Err(match error_message(body) {
        Some(message) => ServiceError::Reported { status, message },
        None => ServiceError::Status(status),
    })
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
}
