//! Manual mode: the expected return is supplied, only a quote is fetched.
//!
//! Run with: `cargo run -p vklad --example manual_mode`

use std::sync::Arc;

use vklad::{InvestmentRequest, ProjectionReport, Symbol, Vklad};
use vklad_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Swap in `vklad_moex::MoexConnector::new_default()` for live data.
    let vklad = Vklad::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let symbol = Symbol::new("SBER")?;
    let request = InvestmentRequest::new(symbol.clone(), 10_000.0, 5.0)?
        .with_expected_return_pct(10.0)?;

    let projection = vklad.project(&request).await?;
    println!("{}", ProjectionReport::new(symbol, projection));
    Ok(())
}
