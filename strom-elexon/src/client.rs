//! Thin HTTP client for the BMRS reporting endpoints.

use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use strom_types::StromError;

const DEFAULT_BASE_URL: &str = "https://api.bmreports.com";
const CONNECTOR: &str = "strom-elexon";

/// HTTP client for api.bmreports.com. Requires an Elexon API key; the base
/// URL is overridable so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct ElexonClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

/// Builder for [`ElexonClient`].
#[derive(Debug)]
pub struct ElexonClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl Default for ElexonClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

impl ElexonClientBuilder {
    /// Set the Elexon API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

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
    /// Returns `InvalidArg` when the API key is missing, the base URL does
    /// not parse, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ElexonClient, StromError> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| StromError::InvalidArg("Elexon API key is required".into()))?;
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| StromError::InvalidArg(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| StromError::InvalidArg(format!("http client: {e}")))?;
        Ok(ElexonClient {
            http,
            base_url,
            api_key,
        })
    }
}

impl ElexonClient {
    /// Start building a client against the production endpoint.
    #[must_use]
    pub fn builder() -> ElexonClientBuilder {
        ElexonClientBuilder::default()
    }

    /// Fetch one report for one settlement date as CSV text, all settlement
    /// periods included.
    ///
    /// # Errors
    /// `SourceUnavailable` on transport failure or non-success status.
    pub async fn settlement_csv(
        &self,
        report: &str,
        date: NaiveDate,
    ) -> Result<String, StromError> {
        let url = self
            .base_url
            .join(&format!("/BMRS/{report}/v1"))
            .map_err(|e| StromError::InvalidArg(format!("invalid report '{report}': {e}")))?;
        tracing::debug!(%report, %date, "fetching settlement report");
        let response = self
            .http
            .get(url.clone())
            .query(&[
                ("APIKey", self.api_key.as_str()),
                ("SettlementDate", &date.format("%Y-%m-%d").to_string()),
                ("Period", "*"),
                ("ServiceType", "csv"),
            ])
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
}
