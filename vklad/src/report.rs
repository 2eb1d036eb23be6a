//! Display-ready rendering of a finished projection.

use serde::{Deserialize, Serialize};

use vklad_core::{Projection, Symbol};

/// A successful projection together with its symbol, rendered with two
/// decimal places on every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    symbol: Symbol,
    projection: Projection,
}

impl ProjectionReport {
    /// Wrap a finished projection.
    #[must_use]
    pub const fn new(symbol: Symbol, projection: Projection) -> Self {
        Self { symbol, projection }
    }

    /// The projected symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The raw projection figures.
    #[must_use]
    pub const fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Current price, e.g. `"250.00"`.
    #[must_use]
    pub fn current_price(&self) -> String {
        format!("{:.2}", self.projection.current_price)
    }

    /// Purchasable share count, e.g. `"40.00"`.
    #[must_use]
    pub fn shares(&self) -> String {
        format!("{:.2}", self.projection.shares)
    }

    /// Applied annual return as a percentage, e.g. `"10.00"`.
    #[must_use]
    pub fn annual_return_pct(&self) -> String {
        format!("{:.2}", self.projection.annual_return.as_percent())
    }

    /// Label of the return source, `"historical"` or `"manual"`.
    #[must_use]
    pub const fn return_source(&self) -> &'static str {
        self.projection.return_source.label()
    }

    /// Projected price after the horizon.
    #[must_use]
    pub fn future_price(&self) -> String {
        format!("{:.2}", self.projection.future_price)
    }

    /// Projected value of the invested amount after the horizon.
    #[must_use]
    pub fn future_value(&self) -> String {
        format!("{:.2}", self.projection.future_value)
    }
}

impl std::fmt::Display for ProjectionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.symbol)?;
        writeln!(f, "  current price:  {}", self.current_price())?;
        writeln!(f, "  shares:         {}", self.shares())?;
        writeln!(
            f,
            "  annual return:  {}% ({})",
            self.annual_return_pct(),
            self.return_source()
        )?;
        writeln!(f, "  future price:   {}", self.future_price())?;
        write!(f, "  future value:   {}", self.future_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vklad_core::{AnnualReturn, ReturnSource};

    #[test]
    fn figures_render_with_two_decimals() {
        let report = ProjectionReport::new(
            Symbol::new("SBER").unwrap(),
            Projection {
                current_price: 250.0,
                shares: 40.0,
                annual_return: AnnualReturn::from_percent(10.0),
                return_source: ReturnSource::Manual,
                future_price: 402.6275,
                future_value: 16105.1,
            },
        );

        assert_eq!(report.current_price(), "250.00");
        assert_eq!(report.shares(), "40.00");
        assert_eq!(report.annual_return_pct(), "10.00");
        assert_eq!(report.future_price(), "402.63");
        assert_eq!(report.future_value(), "16105.10");
        assert_eq!(report.return_source(), "manual");
    }
}
