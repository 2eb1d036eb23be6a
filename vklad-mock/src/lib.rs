//! vklad-mock
//!
//! CI-safe connectors with deterministic data.
//!
//! [`MockConnector`] serves static fixtures for a handful of symbols and
//! recognizes the reserved `FAIL` symbol for forced errors. For tests that
//! need per-call control (errors at a specific pipeline stage, hangs to
//! trigger timeouts), use [`dynamic::DynamicMockConnector`].
#![warn(missing_docs)]

use async_trait::async_trait;

use vklad_core::{
    HistoricalSeries, HistoryProvider, HistoryRequest, Quote, QuoteProvider, Symbol,
    VkladConnector, VkladError,
};

pub mod dynamic;
mod fixtures;

/// Mock connector for CI-safe examples. Serves deterministic data from
/// static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Construct the connector. Stateless; all data lives in fixtures.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), VkladError> {
        if symbol == "FAIL" {
            return Err(VkladError::network(format!(
                "forced failure: {capability}"
            )));
        }
        Ok(())
    }

    fn not_found(what: &str) -> VkladError {
        VkladError::data(format!("no fixture for {what}"))
    }
}

impl VkladConnector for MockConnector {
    fn name(&self) -> &'static str {
        "vklad-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }
}

#[async_trait]
impl QuoteProvider for MockConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, VkladError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "quote")?;
        fixtures::quotes::by_symbol(s).ok_or_else(|| Self::not_found(&format!("quote for {s}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _request: HistoryRequest,
    ) -> Result<HistoricalSeries, VkladError> {
        let s = symbol.as_str();
        Self::maybe_fail(s, "history")?;
        fixtures::history::by_symbol(s).ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    #[tokio::test]
    async fn serves_fixture_quotes() {
        let quote = MockConnector::new().quote(&sym("SBER")).await.unwrap();
        assert_eq!(quote.last_price(), 250.0);
    }

    #[tokio::test]
    async fn serves_fixture_history_sorted() {
        let series = MockConnector::new()
            .history(&sym("GAZP"), HistoryRequest::default())
            .await
            .unwrap();
        assert!(series.first().date < series.last().date);
        assert_eq!(series.first().close, 100.0);
        assert_eq!(series.last().close, 121.0);
    }

    #[tokio::test]
    async fn fail_symbol_forces_an_error() {
        let err = MockConnector::new().quote(&sym("FAIL")).await.unwrap_err();
        assert!(matches!(err, VkladError::Network(_)));
    }

    #[tokio::test]
    async fn unknown_symbol_is_a_data_error() {
        let err = MockConnector::new()
            .quote(&sym("NOPE"))
            .await
            .unwrap_err();
        assert!(matches!(err, VkladError::Data(_)));
    }
}
