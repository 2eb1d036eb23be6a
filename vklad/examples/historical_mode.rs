//! Historical mode driven through the session layer: a one-shot input
//! provider feeds the pipeline, a console sink renders the outcome.
//!
//! Run with: `cargo run -p vklad --example historical_mode -- GAZP 10000 5`

use std::sync::Arc;

use async_trait::async_trait;

use vklad::{
    CalculationFailure, InputProvider, InvestmentRequest, ProjectionReport, ResultSink, Symbol,
    Vklad, run_session,
};
use vklad_mock::MockConnector;

struct OneShot(Option<InvestmentRequest>);

#[async_trait]
impl InputProvider for OneShot {
    async fn next_request(&mut self) -> Option<InvestmentRequest> {
        self.0.take()
    }
}

struct ConsoleSink;

#[async_trait]
impl ResultSink for ConsoleSink {
    async fn clear(&mut self) {}

    async fn present(&mut self, report: &ProjectionReport) {
        println!("{report}");
    }

    async fn fail(&mut self, failure: &CalculationFailure) {
        eprintln!("failed at {} stage: {}", failure.stage, failure.message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut argv = std::env::args().skip(1);
    let symbol = Symbol::new(&argv.next().unwrap_or_else(|| "GAZP".to_owned()))?;
    let amount: f64 = argv.next().as_deref().unwrap_or("10000").parse()?;
    let years: f64 = argv.next().as_deref().unwrap_or("5").parse()?;

    // No expected return: the annual return is derived from history.
    let request = InvestmentRequest::new(symbol, amount, years)?;

    let vklad = Vklad::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    run_session(&vklad, &mut OneShot(Some(request)), &mut ConsoleSink).await;
    Ok(())
}
