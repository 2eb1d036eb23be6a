//! Live projection against the MOEX ISS API. Requires network access.
//!
//! Run with: `cargo run -p vklad --example moex_live -- SBER`

use std::sync::Arc;

use vklad::{InvestmentRequest, MoexConnector, ProjectionReport, Symbol, Vklad};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "SBER".to_owned());
    let symbol = Symbol::new(&raw)?;

    let vklad = Vklad::builder()
        .with_connector(Arc::new(MoexConnector::new_default()))
        .build()?;

    // No expected return: derive one from the trailing year of closes.
    let request = InvestmentRequest::new(symbol.clone(), 100_000.0, 10.0)?;
    let projection = vklad.project(&request).await?;
    println!("{}", ProjectionReport::new(symbol, projection));
    Ok(())
}
