//! Thin HTTP client for the SMARD chart-data and power-plant endpoints.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use strom_types::StromError;

const DEFAULT_BASE_URL: &str = "https://www.smard.de";
const CONNECTOR: &str = "strom-smard";

/// One decoded `chart_data` payload: epoch-millisecond timestamps paired
/// with values. Missing observations come over the wire as JSON `null`.
#[derive(Debug, Deserialize)]
struct ChartPayload {
    series: Vec<(i64, Option<f64>)>,
}

#[derive(Debug, Deserialize)]
struct TranslationPayload(std::collections::HashMap<String, String>);

/// HTTP client for smard.de. The base URL is overridable so tests can point
/// it at a local mock server.
#[derive(Debug, Clone)]
pub struct SmardClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Builder for [`SmardClient`].
#[derive(Debug)]
pub struct SmardClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for SmardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl SmardClientBuilder {
    /// Override the base URL (tests, proxies).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<SmardClient, StromError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| StromError::InvalidArg(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| StromError::InvalidArg(format!("http client: {e}")))?;
        Ok(SmardClient { http, base_url })
    }
}

impl SmardClient {
    /// Start building a client against the production endpoint.
    #[must_use]
    pub fn builder() -> SmardClientBuilder {
        SmardClientBuilder::default()
    }

    /// Client with default settings against smard.de.
    ///
    /// # Errors
    /// Propagates construction failures from [`SmardClientBuilder::build`].
    pub fn new_default() -> Result<Self, StromError> {
        Self::builder().build()
    }

    fn join(&self, path: &str) -> Result<Url, StromError> {
        self.base_url
            .join(path)
            .map_err(|e| StromError::InvalidArg(format!("invalid url path '{path}': {e}")))
    }

    async fn get_text(&self, path: &str) -> Result<String, StromError> {
        let url = self.join(path)?;
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| StromError::source(CONNECTOR, e.to_string()))?;
        if !response.status().is_success() {
            return Err(StromError::source(
                CONNECTOR,
                format!("http status {} for {url}", response.status()),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| StromError::source(CONNECTOR, e.to_string()))
    }

    /// Fetch one weekly chart-data page.
    ///
    /// `page_start_ms` is the epoch-millisecond timestamp of the civil
    /// Monday 00:00 (Europe/Berlin) the page is keyed by.
    ///
    /// # Errors
    /// `SourceUnavailable` on transport failure, non-success status, or a
    /// payload that does not decode.
    pub async fn chart_series(
        &self,
        table_id: &str,
        region: &str,
        resolution_tag: &str,
        page_start_ms: i64,
    ) -> Result<Vec<(i64, Option<f64>)>, StromError> {
        let path = format!(
            "/app/chart_data/{table_id}/{region}/{table_id}_{region}_{resolution_tag}_{page_start_ms}.json"
        );
        tracing::debug!(%table_id, %region, %resolution_tag, page_start_ms, "fetching chart data");
        let body = self.get_text(&path).await?;
        let payload: ChartPayload = serde_json::from_str(&body)
            .map_err(|e| StromError::source(CONNECTOR, format!("malformed payload: {e}")))?;
        Ok(payload.series)
    }

    /// Fetch the raw power-plant metadata document.
    ///
    /// # Errors
    /// `SourceUnavailable` on transport failure or non-success status.
    pub async fn power_plant_metadata(&self) -> Result<String, StromError> {
        self.get_text("/app/power_plant_data/power_plant_metadata.json")
            .await
    }

    /// Fetch the German translation table (plant and block display names).
    ///
    /// # Errors
    /// `SourceUnavailable` on transport failure, non-success status, or a
    /// payload that does not decode.
    pub async fn translations(&self) -> Result<std::collections::HashMap<String, String>, StromError> {
        let body = self.get_text("/app/assets/translations/lang-de.json").await?;
        let payload: TranslationPayload = serde_json::from_str(&body)
            .map_err(|e| StromError::source(CONNECTOR, format!("malformed payload: {e}")))?;
        Ok(payload.0)
    }
}
