//! vklad-core
//!
//! Core types, traits, and growth math shared across the vklad ecosystem.
//!
//! - `types`: domain values (symbols, requests, price series, quotes,
//!   projections).
//! - `connector`: the `VkladConnector` trait and role provider traits.
//! - `growth`: annualized-return estimation and compound projection.
//! - `error`: the unified `VkladError` taxonomy.
//!
//! Role traits in `connector` are `async_trait` traits and assume a Tokio
//! 1.x runtime on the calling side.
//!
#![warn(missing_docs)]

/// Connector role traits and the primary `VkladConnector` interface.
pub mod connector;
/// The unified error type and its kind classifier.
pub mod error;
/// Annualized-return estimation and compound projection math.
pub mod growth;
pub mod types;

pub use connector::{HistoryProvider, QuoteProvider, VkladConnector};
pub use error::{ErrorKind, VkladError};
pub use growth::{estimate_annual_return, project};
pub use types::*;
