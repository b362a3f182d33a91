use std::sync::Arc;
use std::time::Duration;

use strom_core::SourceConnector;
use strom_types::{AvailabilityPolicy, Capability, StromConfig, StromError};

/// Orchestrator that routes download requests to registered connectors and
/// turns their raw batches into gap-free series.
pub struct Strom {
    pub(crate) connectors: Vec<Arc<dyn SourceConnector>>,
    pub(crate) cfg: StromConfig,
}

/// Builder for constructing a `Strom` orchestrator with custom configuration.
pub struct StromBuilder {
    connectors: Vec<Arc<dyn SourceConnector>>,
    cfg: StromConfig,
}

impl Default for StromBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StromBuilder {
    /// Create a new builder with defaults: no connectors, a 60 s per-window
    /// timeout, and out-of-availability requests rejected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: StromConfig::default(),
        }
    }

    /// Register a source connector.
    ///
    /// Registration order matters: each capability is served by the first
    /// registered connector that advertises it for the requested region.
    /// There is no fallback chain; a capable connector's failure is the
    /// call's failure.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn SourceConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the per-window fetch timeout. A timed-out window fails the whole
    /// call; nothing is retried.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Choose how requests outside documented zone availability are
    /// handled (reject by default, optionally clip).
    #[must_use]
    pub const fn availability_policy(mut self, policy: AvailabilityPolicy) -> Self {
        self.cfg.availability = policy;
        self
    }

    /// Build the `Strom` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(self) -> Result<Strom, StromError> {
        if self.connectors.is_empty() {
            return Err(StromError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Strom {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Strom {
    /// Start building a new `Strom` instance.
    #[must_use]
    pub fn builder() -> StromBuilder {
        StromBuilder::new()
    }

    /// Wrap one window fetch with the configured timeout. Timeouts map to
    /// `SourceUnavailable`: a window whose outcome is unknown makes the
    /// gap-free contract impossible.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, StromError>
    where
        Fut: core::future::Future<Output = Result<T, StromError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(StromError::source(
                connector_name,
                format!("timed out after {timeout:?} fetching {capability}"),
            ))
        })
    }
}
