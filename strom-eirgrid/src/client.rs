//! Thin HTTP client for the EirGrid Smart Grid Dashboard service.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use url::Url;

use strom_types::StromError;

const DEFAULT_BASE_URL: &str = "https://www.smartgriddashboard.com";
const CONNECTOR: &str = "strom-eirgrid";

/// One dashboard record. The service reports civil-time labels rather than
/// epoch timestamps; records map positionally onto the day's quarter-hour
/// slots.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRow {
    /// Civil-time label, e.g. "18-Sep-2023 14:45:00".
    #[serde(rename = "EffectiveTime")]
    pub effective_time: String,
    /// Present for multi-series areas such as interconnection.
    #[serde(rename = "FieldName", default)]
    pub field_name: Option<String>,
    /// Observed value; `null` for not-yet-published slots.
    #[serde(rename = "Value")]
    pub value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DashboardPayload {
    #[serde(rename = "Rows")]
    rows: Vec<DashboardRow>,
}

/// HTTP client for smartgriddashboard.com. The base URL is overridable so
/// tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct EirGridClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Builder for [`EirGridClient`].
#[derive(Debug)]
pub struct EirGridClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for EirGridClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl EirGridClientBuilder {
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
    pub fn build(self) -> Result<EirGridClient, StromError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| StromError::InvalidArg(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| StromError::InvalidArg(format!("http client: {e}")))?;
        Ok(EirGridClient { http, base_url })
    }
}

impl EirGridClient {
    /// Start building a client against the production endpoint.
    #[must_use]
    pub fn builder() -> EirGridClientBuilder {
        EirGridClientBuilder::default()
    }

    /// Client with default settings against smartgriddashboard.com.
    ///
    /// # Errors
    /// Propagates construction failures from [`EirGridClientBuilder::build`].
    pub fn new_default() -> Result<Self, StromError> {
        Self::builder().build()
    }

    /// Fetch all records of one dashboard area for one civil day.
    ///
    /// # Errors
    /// `SourceUnavailable` on transport failure, non-success status, or a
    /// payload that does not decode.
    pub async fn rows(&self, area: &str, date: NaiveDate) -> Result<Vec<DashboardRow>, StromError> {
        let url = self
            .base_url
            .join("/DashboardService.svc/data")
            .map_err(|e| StromError::InvalidArg(format!("invalid service path: {e}")))?;
        let day = date.format("%d-%b-%Y").to_string();
        tracing::debug!(%area, %day, "fetching dashboard rows");
        let response = self
            .http
            .get(url.clone())
            .query(&[
                ("area", area),
                ("region", "ALL"),
                ("datefrom", &format!("{day} 00:00")),
                ("dateto", &format!("{day} 23:59")),
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
        let payload: DashboardPayload = response
            .json()
            .await
            .map_err(|e| StromError::source(CONNECTOR, format!("malformed payload: {e}")))?;
        Ok(payload.rows)
    }
}
