//! The projection pipeline: validate, fetch, estimate, project.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vklad_core::{
    AnnualReturn, InvestmentRequest, Projection, VkladError, estimate_annual_return, project,
};

use crate::Vklad;

/// Pipeline stage a calculation was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Parsing and validating the raw inputs, or admission control.
    Validate,
    /// Fetching trailing price history.
    History,
    /// Annualizing the historical return.
    Estimate,
    /// Fetching the current quote.
    Quote,
    /// Computing the compound projection.
    Project,
}

impl Stage {
    /// Lowercase stage label used in messages and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::History => "history",
            Self::Estimate => "estimate",
            Self::Quote => "quote",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A pipeline failure with the stage it occurred in.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{stage} stage failed: {source}")]
pub struct CalculationError {
    /// Stage the pipeline was in.
    pub stage: Stage,
    /// The underlying error.
    #[source]
    pub source: VkladError,
}

impl CalculationError {
    /// Attach a stage to an underlying error.
    #[must_use]
    pub const fn at(stage: Stage, source: VkladError) -> Self {
        Self { stage, source }
    }
}

impl Vklad {
    /// Run one projection calculation.
    ///
    /// In manual mode (the request carries an expected return) only the
    /// quote is fetched. In historical mode the trailing history is fetched
    /// first and annualized into a return estimate.
    ///
    /// Calls are single-flight: while one calculation is in progress, a
    /// concurrent call fails immediately with [`VkladError::Busy`].
    ///
    /// # Errors
    /// Every failure carries the [`Stage`] it happened in.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, request), fields(symbol = %request.symbol(), source = ?request.return_source()))
    )]
    pub async fn project(
        &self,
        request: &InvestmentRequest,
    ) -> Result<Projection, CalculationError> {
        // Admission control happens before any provider work.
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| CalculationError::at(Stage::Validate, VkladError::Busy))?;

        let annual_return = match request.expected_return_pct() {
            // Finiteness was checked when the request was built.
            Some(pct) => AnnualReturn::from_percent(pct),
            None => {
                let series = self
                    .fetch_history(request.symbol())
                    .await
                    .map_err(|e| CalculationError::at(Stage::History, e))?;
                estimate_annual_return(&series)
                    .map_err(|e| CalculationError::at(Stage::Estimate, e))?
            }
        };

        let quote = self
            .fetch_quote(request.symbol())
            .await
            .map_err(|e| CalculationError::at(Stage::Quote, e))?;

        project(
            request.amount(),
            request.years(),
            quote,
            annual_return,
            request.return_source(),
        )
        .map_err(|e| CalculationError::at(Stage::Project, e))
    }
}
