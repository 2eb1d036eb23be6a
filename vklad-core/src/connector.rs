//! Connector traits wiring data providers into the projection pipeline.
//!
//! A connector advertises the roles it supports through `Option`-returning
//! accessors. Role traits stay small on purpose: one fetch operation each,
//! so alternative backends and test doubles implement only what they need.

use async_trait::async_trait;

use crate::{HistoricalSeries, HistoryRequest, Quote, Symbol, VkladError};

/// Fetches trailing daily price history for a symbol.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch up to `request.limit` trailing daily closes for `symbol`,
    /// ordered ascending by date.
    async fn history(
        &self,
        symbol: &Symbol,
        request: HistoryRequest,
    ) -> Result<HistoricalSeries, VkladError>;
}

/// Fetches the latest traded price for a symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current quote for `symbol`.
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, VkladError>;
}

/// A market-data backend usable by the projector.
///
/// Default accessor implementations return `None`, meaning "role not
/// supported"; the orchestrator converts a missing role into an
/// `Unsupported` error naming the capability.
pub trait VkladConnector: Send + Sync {
    /// Stable connector identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Human-readable name of the backing data vendor.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Access the history role, when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Access the quote role, when supported.
    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        None
    }
}
