//! Growth math: annualized-return estimation and compound projection.
//!
//! Pure functions over domain types. All failure cases surface as typed
//! errors; no function here panics on bad numeric input.

use crate::{AnnualReturn, HistoricalSeries, Projection, Quote, ReturnSource, VkladError};

/// Average length of a calendar year in days, accounting for leap years.
const DAYS_PER_YEAR: f64 = 365.25;

/// Estimate the compound annual growth rate from a historical series.
///
/// Uses the chronologically first and last observations:
/// `(last / first)^(365.25 / span_days) - 1`.
///
/// # Errors
/// - `Validation` when the series spans zero days (first and last
///   observation share a date), which would make annualization divide
///   by zero.
/// - `Domain` when the first close is not a positive number, or when the
///   total return ratio is negative (a fractional exponent of a negative
///   base has no real result).
pub fn estimate_annual_return(series: &HistoricalSeries) -> Result<AnnualReturn, VkladError> {
    let first = series.first();
    let last = series.last();

    let span_days = (last.date - first.date).num_days();
    if span_days <= 0 {
        return Err(VkladError::validation(
            "historical series spans zero days; cannot annualize",
        ));
    }

    if !first.close.is_finite() || first.close <= 0.0 {
        return Err(VkladError::domain(
            "baseline close must be a positive number",
        ));
    }

    let total_return = last.close / first.close;
    if total_return <= 0.0 {
        return Err(VkladError::domain(
            "total return ratio is not positive; cannot take fractional power",
        ));
    }

    let annualized = total_return.powf(DAYS_PER_YEAR / span_days as f64) - 1.0;
    if !annualized.is_finite() {
        return Err(VkladError::domain("annualized return is not finite"));
    }

    Ok(AnnualReturn::from_fraction(annualized))
}

/// Project an investment forward under compound annual growth.
///
/// Computes `shares = amount / price`, `factor = (1 + r)^years`, then the
/// future price and future value from those.
///
/// # Errors
/// Returns `Domain` when the growth base `1 + r` is negative (fractional
/// exponent of a negative base) or when any computed figure is not finite.
pub fn project(
    amount: f64,
    years: f64,
    quote: Quote,
    annual_return: AnnualReturn,
    return_source: ReturnSource,
) -> Result<Projection, VkladError> {
    let current_price = quote.last_price();
    let shares = amount / current_price;

    let base = 1.0 + annual_return.as_fraction();
    if base < 0.0 {
        return Err(VkladError::domain(
            "annual return below -100%; growth base is negative",
        ));
    }

    let factor = base.powf(years);
    let future_price = current_price * factor;
    let future_value = amount * factor;

    if !shares.is_finite() || !future_price.is_finite() || !future_value.is_finite() {
        return Err(VkladError::domain("projected figures are not finite"));
    }

    Ok(Projection {
        current_price,
        shares,
        annual_return,
        return_source,
        future_price,
        future_value,
    })
}
