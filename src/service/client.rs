//! Core `SpellService` trait and `HttpSpellService` implementation.
//!
//! `HttpSpellService` issues plain `GET` requests against two endpoints under
//! a configurable base URL. There is no authentication, retry, or content
//! negotiation; every failure is reported as a [`ServiceError`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::service::types::{CorrectionResult, MisspellingResult};

// ---------------------------------------------------------------------------
// ServiceError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the spellchecking service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("spellchecker request timed out")]
    Timeout,

    /// The service answered with a non-2xx status code.
    #[error("spellchecker returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("failed to parse spellchecker response: {0}")]
    Parse(String),

    /// A correction lookup came back with an empty suggestion list.
    #[error("no corrections returned for '{0}'")]
    NoCorrections(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpellService trait
// ---------------------------------------------------------------------------

/// Async interface to a spellchecking backend.
///
/// Implementors must be `Send + Sync`: the pipeline holds them behind an
/// `Arc<dyn SpellService>` and calls them from spawned tasks.
#[async_trait]
pub trait SpellService: Send + Sync {
    /// Classify a single word as misspelled or not.
    async fn is_misspelled(&self, word: &str) -> Result<MisspellingResult, ServiceError>;

    /// Fetch the ordered suggestion list for a single word.
    async fn corrections(&self, word: &str) -> Result<CorrectionResult, ServiceError>;
}

// ---------------------------------------------------------------------------
// HttpSpellService
// ---------------------------------------------------------------------------

/// Calls `GET {base}/misspelled?word=…` and `GET {base}/corrections?word=…`.
///
/// The word is sent verbatim (no case or punctuation normalisation) as a
/// URL-encoded `word` query parameter.
pub struct HttpSpellService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSpellService {
    /// Build an `HttpSpellService` from application config.
    ///
    /// A timeout is only applied when `config.timeout_secs` is set; otherwise
    /// a request waits for as long as the server keeps the connection open.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|e| {
            log::warn!("failed to build HTTP client ({e}); using defaults");
            reqwest::Client::new()
        });

        Self::with_client(&config.base_url, client)
    }

    /// Use a pre-built client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        word: &str,
    ) -> Result<T, ServiceError> {
        let url = format!("{}/{endpoint}", self.base_url);
        log::debug!("GET {url}?word={word:?}");

        let response = self.client.get(&url).query(&[("word", word)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ServiceError::Parse(e.to_string())
            } else {
                ServiceError::from(e)
            }
        })
    }
}

#[async_trait]
impl SpellService for HttpSpellService {
    async fn is_misspelled(&self, word: &str) -> Result<MisspellingResult, ServiceError> {
        self.get_json("misspelled", word).await
    }

    async fn corrections(&self, word: &str) -> Result<CorrectionResult, ServiceError> {
        self.get_json("corrections", word).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
