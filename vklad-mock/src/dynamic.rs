//! A scriptable connector driven from outside by a controller handle.
//!
//! Tests use it to force a specific failure at a specific pipeline stage,
//! or to hang a call and trigger the orchestrator's timeout.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vklad_core::{
    HistoricalSeries, HistoryProvider, HistoryRequest, Quote, QuoteProvider, Symbol,
    VkladConnector, VkladError,
};

/// Instruction for how a method should behave for a given symbol.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(VkladError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<Symbol, MockBehavior<Quote>>,
    history_rules: HashMap<Symbol, MockBehavior<HistoricalSeries>>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `quote` calls for a specific symbol.
    pub async fn set_quote_behavior(&self, symbol: Symbol, behavior: MockBehavior<Quote>) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<HistoricalSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Clear all configured behaviors.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.history_rules.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn VkladConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn VkladConnector>, controller)
    }
}

impl VkladConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        Some(self as &dyn QuoteProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl QuoteProvider for DynamicMockConnector {
    async fn quote(&self, symbol: &Symbol) -> Result<Quote, VkladError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let guard = self.state.lock().await;
            guard.quote_rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(q)) => Ok(q),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(VkladError::unsupported("quote")),
        }
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _request: HistoryRequest,
    ) -> Result<HistoricalSeries, VkladError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.history_rules.get(symbol).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(VkladError::unsupported("history")),
        }
    }
}
