// Shared fixtures for the facade integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;

use vklad::{
    CalculationFailure, HistoricalSeries, InputProvider, InvestmentRequest, PricePoint,
    ProjectionReport, QuoteProvider, ResultSink, Symbol, Vklad, VkladConnector,
};

/// Common symbol constants used across tests.
pub const SBER: &str = "SBER";
pub const GAZP: &str = "GAZP";

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

pub fn manual_request(symbol: &str, amount: f64, years: f64, pct: f64) -> InvestmentRequest {
    InvestmentRequest::new(sym(symbol), amount, years)
        .unwrap()
        .with_expected_return_pct(pct)
        .unwrap()
}

pub fn historical_request(symbol: &str, amount: f64, years: f64) -> InvestmentRequest {
    InvestmentRequest::new(sym(symbol), amount, years).unwrap()
}

pub fn point(date: &str, close: f64) -> PricePoint {
    PricePoint {
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        close,
    }
}

pub fn series(points: &[(&str, f64)]) -> HistoricalSeries {
    HistoricalSeries::new(points.iter().map(|&(d, c)| point(d, c)).collect()).unwrap()
}

/// A connector advertising no roles at all.
pub struct NullConnector;

impl VkladConnector for NullConnector {
    fn name(&self) -> &'static str {
        "null"
    }
}

/// A connector that serves quotes but no history.
pub struct QuoteOnlyConnector(pub Arc<dyn VkladConnector>);

impl VkladConnector for QuoteOnlyConnector {
    fn name(&self) -> &'static str {
        "quote-only"
    }

    fn as_quote_provider(&self) -> Option<&dyn QuoteProvider> {
        self.0.as_quote_provider()
    }
}

pub fn vklad_over(connector: Arc<dyn VkladConnector>) -> Vklad {
    Vklad::builder()
        .with_connector(connector)
        .build()
        .unwrap()
}

/// Scripted request queue for session tests.
pub struct ScriptedInput {
    queue: VecDeque<InvestmentRequest>,
}

impl ScriptedInput {
    pub fn of(requests: impl IntoIterator<Item = InvestmentRequest>) -> Self {
        Self {
            queue: requests.into_iter().collect(),
        }
    }
}

#[async_trait]
impl InputProvider for ScriptedInput {
    async fn next_request(&mut self) -> Option<InvestmentRequest> {
        self.queue.pop_front()
    }
}

/// What the sink observed, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Cleared,
    Presented(String),
    Failed(CalculationFailure),
}

/// A sink that records every call for later assertion.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn last(&self) -> &SinkEvent {
        self.events.last().expect("sink saw at least one event")
    }
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn clear(&mut self) {
        self.events.push(SinkEvent::Cleared);
    }

    async fn present(&mut self, report: &ProjectionReport) {
        self.events.push(SinkEvent::Presented(report.to_string()));
    }

    async fn fail(&mut self, failure: &CalculationFailure) {
        self.events.push(SinkEvent::Failed(failure.clone()));
    }
}
