//! Domain value types shared across the vklad workspace.
//!
//! Every value here is created fresh per calculation run and never mutated
//! afterwards; nothing is cached across runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::VkladError;

/// A validated, uppercase ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Parse a raw symbol string.
    ///
    /// Trims surrounding whitespace and normalizes to ASCII uppercase.
    ///
    /// # Errors
    /// Returns `Validation` when the trimmed symbol is empty.
    pub fn new(raw: &str) -> Result<Self, VkladError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VkladError::validation("symbol must not be empty"));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The normalized symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where the annual return used in a projection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnSource {
    /// Derived from trailing historical prices.
    Historical,
    /// Supplied by the caller as an expected percentage.
    Manual,
}

impl ReturnSource {
    /// Short human-readable label for display surfaces.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Historical => "historical",
            Self::Manual => "manual",
        }
    }
}

/// An immutable, validated projection request.
///
/// Accepted by the orchestrator once and threaded through the pipeline stages
/// by value; stages never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    symbol: Symbol,
    amount: f64,
    years: f64,
    expected_return_pct: Option<f64>,
}

impl InvestmentRequest {
    /// Build a request in historical mode (return derived from price history).
    ///
    /// # Errors
    /// Returns `Validation` when `amount` or `years` is not a finite positive
    /// number.
    pub fn new(symbol: Symbol, amount: f64, years: f64) -> Result<Self, VkladError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(VkladError::validation(
                "investment amount must be a positive number",
            ));
        }
        if !years.is_finite() || years <= 0.0 {
            return Err(VkladError::validation("years must be a positive number"));
        }
        Ok(Self {
            symbol,
            amount,
            years,
            expected_return_pct: None,
        })
    }

    /// Switch to manual mode by attaching an expected annual return, given as
    /// a percentage (e.g. `10.0` for 10%).
    ///
    /// # Errors
    /// Returns `Validation` when the percentage is not finite.
    pub fn with_expected_return_pct(mut self, pct: f64) -> Result<Self, VkladError> {
        if !pct.is_finite() {
            return Err(VkladError::validation(
                "expected annual return must be a finite percentage",
            ));
        }
        self.expected_return_pct = Some(pct);
        Ok(self)
    }

    /// The requested ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The invested amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// The projection horizon in years.
    #[must_use]
    pub const fn years(&self) -> f64 {
        self.years
    }

    /// The user-supplied expected return percentage, when present.
    #[must_use]
    pub const fn expected_return_pct(&self) -> Option<f64> {
        self.expected_return_pct
    }

    /// Whether the annual return will be derived or was supplied.
    #[must_use]
    pub const fn return_source(&self) -> ReturnSource {
        match self.expected_return_pct {
            Some(_) => ReturnSource::Manual,
            None => ReturnSource::Historical,
        }
    }
}

/// One daily close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trade date of the observation.
    pub date: NaiveDate,
    /// Close price recorded for that date.
    pub close: f64,
}

/// A non-empty series of daily closes, ordered ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries(Vec<PricePoint>);

impl HistoricalSeries {
    /// Build a series from raw points.
    ///
    /// Points are sorted ascending by date; providers occasionally return
    /// rows out of order and the estimator depends on chronological first
    /// and last points.
    ///
    /// # Errors
    /// Returns `Data` when `points` is empty.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self, VkladError> {
        if points.is_empty() {
            return Err(VkladError::data("historical series is empty"));
        }
        points.sort_by_key(|p| p.date);
        Ok(Self(points))
    }

    /// Chronologically first observation.
    #[must_use]
    pub fn first(&self) -> &PricePoint {
        // Invariant: the vector is non-empty.
        &self.0[0]
    }

    /// Chronologically last observation.
    #[must_use]
    pub fn last(&self) -> &PricePoint {
        &self.0[self.0.len() - 1]
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series is empty. Always `false` for a constructed series;
    /// present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate observations in ascending date order.
    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a HistoricalSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parameters for a history fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Maximum number of trailing daily observations to request.
    pub limit: usize,
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self { limit: 365 }
    }
}

/// The latest traded price for a security.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    last_price: f64,
}

impl Quote {
    /// Build a quote from a last traded price.
    ///
    /// A price of exactly zero means "no price available" on the provider
    /// side and is rejected rather than treated as a valid zero quote.
    ///
    /// # Errors
    /// Returns `Data` when the price is zero or not finite.
    pub fn from_last(last_price: f64) -> Result<Self, VkladError> {
        if !last_price.is_finite() || last_price == 0.0 {
            return Err(VkladError::data("no last price available"));
        }
        Ok(Self { last_price })
    }

    /// The last traded price. Guaranteed non-zero and finite.
    #[must_use]
    pub const fn last_price(&self) -> f64 {
        self.last_price
    }
}

/// A fractional compound annual growth rate.
///
/// `0.10` means 10% per year; negative values represent loss. Unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualReturn(f64);

impl AnnualReturn {
    /// Wrap a fractional rate.
    #[must_use]
    pub const fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Convert a percentage (e.g. `10.0`) to a fractional rate.
    #[must_use]
    pub fn from_percent(pct: f64) -> Self {
        Self(pct / 100.0)
    }

    /// The rate as a fraction.
    #[must_use]
    pub const fn as_fraction(&self) -> f64 {
        self.0
    }

    /// The rate as a percentage.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }
}

/// The terminal artifact of one projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Last traded price used for the projection.
    pub current_price: f64,
    /// Share count purchasable with the invested amount.
    pub shares: f64,
    /// Annualized return applied over the horizon.
    pub annual_return: AnnualReturn,
    /// Whether the return was derived or user-supplied.
    pub return_source: ReturnSource,
    /// Projected price after the horizon.
    pub future_price: f64,
    /// Projected value of the invested amount after the horizon.
    pub future_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn symbol_normalizes_case_and_whitespace() {
        let s = Symbol::new("  sber ").unwrap();
        assert_eq!(s.as_str(), "SBER");
    }

    #[test]
    fn symbol_rejects_empty() {
        assert!(matches!(
            Symbol::new("   "),
            Err(VkladError::Validation(_))
        ));
    }

    #[test]
    fn request_rejects_non_positive_amount_and_years() {
        let sym = Symbol::new("SBER").unwrap();
        assert!(InvestmentRequest::new(sym.clone(), 0.0, 5.0).is_err());
        assert!(InvestmentRequest::new(sym.clone(), -10.0, 5.0).is_err());
        assert!(InvestmentRequest::new(sym.clone(), 100.0, 0.0).is_err());
        assert!(InvestmentRequest::new(sym, f64::NAN, 5.0).is_err());
    }

    #[test]
    fn request_mode_follows_expected_return() {
        let sym = Symbol::new("SBER").unwrap();
        let req = InvestmentRequest::new(sym.clone(), 100.0, 5.0).unwrap();
        assert_eq!(req.return_source(), ReturnSource::Historical);

        let req = InvestmentRequest::new(sym, 100.0, 5.0)
            .unwrap()
            .with_expected_return_pct(10.0)
            .unwrap();
        assert_eq!(req.return_source(), ReturnSource::Manual);
        assert_eq!(req.expected_return_pct(), Some(10.0));
    }

    #[test]
    fn series_sorts_points_by_date() {
        let series = HistoricalSeries::new(vec![
            PricePoint { date: d(2024, 1, 1), close: 121.0 },
            PricePoint { date: d(2023, 1, 1), close: 100.0 },
        ])
        .unwrap();
        assert_eq!(series.first().date, d(2023, 1, 1));
        assert_eq!(series.last().date, d(2024, 1, 1));
    }

    #[test]
    fn empty_series_rejected() {
        assert!(matches!(
            HistoricalSeries::new(vec![]),
            Err(VkladError::Data(_))
        ));
    }

    #[test]
    fn zero_quote_rejected() {
        assert!(matches!(Quote::from_last(0.0), Err(VkladError::Data(_))));
        assert!(matches!(
            Quote::from_last(f64::NAN),
            Err(VkladError::Data(_))
        ));
        assert!(Quote::from_last(250.0).is_ok());
    }

    #[test]
    fn annual_return_percent_round_trip() {
        let r = AnnualReturn::from_percent(10.0);
        assert!((r.as_fraction() - 0.10).abs() < 1e-12);
        assert!((r.as_percent() - 10.0).abs() < 1e-12);
    }
}
