use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use vklad_core::{
    HistoricalSeries, HistoryRequest, Quote, Symbol, VkladConnector, VkladError,
};

/// Runtime configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct VkladConfig {
    /// Ceiling for each individual provider call.
    pub provider_timeout: Duration,
    /// Trailing daily observations requested when deriving a return from
    /// history.
    pub history_window: usize,
}

impl Default for VkladConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            history_window: 365,
        }
    }
}

/// Orchestrator that runs projection calculations over a registered
/// connector.
///
/// One calculation runs at a time; a second call while one is in flight is
/// rejected with [`VkladError::Busy`] rather than queued.
pub struct Vklad {
    pub(crate) connector: Arc<dyn VkladConnector>,
    pub(crate) cfg: VkladConfig,
    pub(crate) in_flight: Mutex<()>,
}

impl std::fmt::Debug for Vklad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vklad")
            .field("connector", &self.connector.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a [`Vklad`] orchestrator.
pub struct VkladBuilder {
    connector: Option<Arc<dyn VkladConnector>>,
    cfg: VkladConfig,
}

impl Default for VkladBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VkladBuilder {
    /// Create a builder with default configuration and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: VkladConfig::default(),
        }
    }

    /// Register the market-data connector.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn VkladConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Set the per-call provider timeout. Default is 5 seconds.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the trailing history window in daily observations. Default is
    /// 365.
    #[must_use]
    pub const fn history_window(mut self, observations: usize) -> Self {
        self.cfg.history_window = observations;
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `Validation` when no connector was registered, the timeout
    /// is zero, or the history window is zero.
    pub fn build(self) -> Result<Vklad, VkladError> {
        let connector = self
            .connector
            .ok_or_else(|| VkladError::validation("a connector must be registered"))?;
        if self.cfg.provider_timeout.is_zero() {
            return Err(VkladError::validation("provider timeout must be non-zero"));
        }
        if self.cfg.history_window == 0 {
            return Err(VkladError::validation("history window must be non-zero"));
        }
        Ok(Vklad {
            connector,
            cfg: self.cfg,
            in_flight: Mutex::new(()),
        })
    }
}

impl Vklad {
    /// Start building a new `Vklad` instance.
    #[must_use]
    pub fn builder() -> VkladBuilder {
        VkladBuilder::new()
    }

    /// Name of the registered connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, VkladError>
    where
        Fut: core::future::Future<Output = Result<T, VkladError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(VkladError::provider_timeout(capability)))
    }

    pub(crate) async fn fetch_history(
        &self,
        symbol: &Symbol,
    ) -> Result<HistoricalSeries, VkladError> {
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| VkladError::unsupported("history"))?;
        let request = HistoryRequest {
            limit: self.cfg.history_window,
        };
        Self::provider_call_with_timeout(
            "history",
            self.cfg.provider_timeout,
            provider.history(symbol, request),
        )
        .await
    }

    pub(crate) async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, VkladError> {
        let provider = self
            .connector
            .as_quote_provider()
            .ok_or_else(|| VkladError::unsupported("quote"))?;
        Self::provider_call_with_timeout(
            "quote",
            self.cfg.provider_timeout,
            provider.quote(symbol),
        )
        .await
    }
}
