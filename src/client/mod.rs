//! disease.sh REST API client
//!
//! Typed HTTP client for the public COVID-19 statistics API. All endpoints
//! are read-only GETs; requests are independent and fire one at a time per
//! caller, so there is no retry or queueing here.

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::stats::{CountryStat, GlobalStat, HistoricalTimeline, RawTimeline};

/// Client for the disease.sh v3 COVID-19 API
pub struct CovidApiClient {
    client: Client,
    config: ApiClientConfig,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for the API (e.g., "https://disease.sh")
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://disease.sh".to_string(),
            request_timeout_secs: 15,
        }
    }
}

impl CovidApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Worldwide totals
    pub async fn global(&self) -> Result<GlobalStat, ApiError> {
        let url = format!("{}/v3/covid-19/all", self.config.base_url);
        self.get_json(&url).await
    }

    /// Per-country statistics for every tracked country
    pub async fn countries(&self) -> Result<Vec<CountryStat>, ApiError> {
        let url = format!("{}/v3/covid-19/countries", self.config.base_url);
        self.get_json(&url).await
    }

    /// Statistics for one country, by ISO2, ISO3, or numeric country code
    pub async fn country(&self, code: &str) -> Result<CountryStat, ApiError> {
        let url = format!(
            "{}/v3/covid-19/countries/{}",
            self.config.base_url,
            urlencoding::encode(code)
        );
        self.get_json(&url).await
    }

    /// Worldwide cumulative history for the last `last_days` days
    pub async fn historical(&self, last_days: u32) -> Result<HistoricalTimeline, ApiError> {
        let url = format!(
            "{}/v3/covid-19/historical/all?lastdays={}",
            self.config.base_url, last_days
        );
        let raw: RawTimeline = self.get_json(&url).await?;
        Ok(HistoricalTimeline::from(raw))
    }

    /// Issue a GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url = %url, "fetching");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::Unavailable
            } else {
                ApiError::Request(e)
            }
        })?;

        if response.status().is_success() {
            response.json().await.map_err(ApiError::Decode)
        } else {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Errors from the disease.sh API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("disease.sh unavailable")]
    Unavailable,

    #[error("request failed: {0}")]
    Request(reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("request timeout")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiClientConfig::default();
        assert_eq!(config.base_url, "https://disease.sh");
        assert_eq!(config.request_timeout_secs, 15);
    }

    #[test]
    fn test_country_code_encoded_into_path() {
        // Codes come from a dropdown but could be typed on the CLI; path
        // metacharacters must not escape the segment.
        assert_eq!(urlencoding::encode("US"), "US");
        assert_eq!(urlencoding::encode("a/b"), "a%2Fb");
        assert_eq!(urlencoding::encode("a b"), "a%20b");
    }
}
