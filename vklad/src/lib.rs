//! Vklad projects the future value of a stock investment.
//!
//! Overview
//! - Takes a ticker, an invested amount, a horizon in years, and optionally
//!   an expected annual return percentage.
//! - When no return is supplied, derives one by annualizing the trailing
//!   price history fetched from the registered connector.
//! - Always fetches the current quote, then computes the purchasable share
//!   count, the projected price, and the projected value.
//!
//! Key behaviors
//! - Single-flight: one calculation at a time; a concurrent call is
//!   rejected immediately with `Busy` rather than queued.
//! - Per-call provider timeout (default 5 seconds); a stalled provider
//!   surfaces as `ProviderTimeout` naming the capability.
//! - Every failure carries the pipeline [`Stage`] it happened in.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use vklad::{Vklad, run_session};
//! use vklad_core::{InvestmentRequest, Symbol};
//! use vklad_moex::MoexConnector;
//!
//! let vklad = Vklad::builder()
//!     .with_connector(Arc::new(MoexConnector::new_default()))
//!     .build()?;
//!
//! let request = InvestmentRequest::new(Symbol::new("SBER")?, 10_000.0, 5.0)?
//!     .with_expected_return_pct(10.0)?;
//! let projection = vklad.project(&request).await?;
//! println!("{:.2}", projection.future_value);
//! ```
//!
#![warn(missing_docs)]

mod core;
mod projector;
mod report;
mod session;

pub use crate::core::{Vklad, VkladBuilder, VkladConfig};
pub use crate::projector::{CalculationError, Stage};
pub use crate::report::ProjectionReport;
pub use crate::session::{CalculationFailure, InputProvider, ResultSink, run_session};

pub use vklad_core::{
    AnnualReturn, ErrorKind, HistoricalSeries, HistoryProvider, HistoryRequest, InvestmentRequest,
    PricePoint, Projection, Quote, QuoteProvider, ReturnSource, Symbol, VkladConnector, VkladError,
};
pub use vklad_moex::MoexConnector;
