//! Remote word-list sources
//!
//! The loader only needs "give me the raw content once"; `WordSource` is that
//! seam, with `HttpSource` as the production implementation.

use crate::error::WordListError;
use std::time::Duration;
use tracing::debug;

/// JavaScript bundle of the original game, which embeds both word arrays
pub const DEFAULT_WORDS_URL: &str = "https://www.powerlanguage.co.uk/wordle/main.e65ce0a5.js";

/// Something that can produce the raw text the word arrays are extracted from
pub trait WordSource {
    /// Fetch the raw content
    ///
    /// # Errors
    /// Returns `WordListError` if the content cannot be retrieved.
    fn fetch(&self) -> Result<String, WordListError>;
}

/// One blocking HTTP GET against a fixed URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_URL)
    }
}

impl WordSource for HttpSource {
    fn fetch(&self) -> Result<String, WordListError> {
        debug!(url = %self.url, "Fetching word list");

        let network = |source: reqwest::Error| WordListError::Network {
            url: self.url.clone(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(network)?;

        let response = client.get(&self.url).send().map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WordListError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(network)?;
        debug!(bytes = body.len(), "Word list content received");
        Ok(body)
    }
}

impl<F> WordSource for F
where
    F: Fn() -> Result<String, WordListError>,
{
    fn fetch(&self) -> Result<String, WordListError> {
        self()
    }
}
