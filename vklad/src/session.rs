//! Session plumbing between an input surface and a result sink.
//!
//! The traits here decouple the pipeline from whatever surface collects the
//! inputs (a form, a CLI prompt, a test harness) and whatever surface shows
//! the outcome. The input side yields already-validated requests; all
//! display formatting stays on the sink side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use vklad_core::{ErrorKind, InvestmentRequest};

use crate::Vklad;
use crate::projector::{CalculationError, Stage};
use crate::report::ProjectionReport;

/// Yields validated calculation requests, one per run.
#[async_trait]
pub trait InputProvider: Send {
    /// The next request, or `None` to end the session.
    async fn next_request(&mut self) -> Option<InvestmentRequest>;
}

/// Receives the outcome of each calculation run.
#[async_trait]
pub trait ResultSink: Send {
    /// Discard anything shown from a previous run.
    async fn clear(&mut self);
    /// Present a successful projection.
    async fn present(&mut self, report: &ProjectionReport);
    /// Present a failure.
    async fn fail(&mut self, failure: &CalculationFailure);
}

/// Structured failure handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationFailure {
    /// Pipeline stage the run failed in.
    pub stage: Stage,
    /// Classification of the underlying error.
    pub kind: ErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl From<&CalculationError> for CalculationFailure {
    fn from(err: &CalculationError) -> Self {
        Self {
            stage: err.stage,
            kind: err.source.kind(),
            message: err.source.to_string(),
        }
    }
}

/// Drive calculations from the provider until it runs dry.
///
/// The sink is cleared before every run, so stale figures from a previous
/// run never survive a failed one.
pub async fn run_session<I, S>(vklad: &Vklad, provider: &mut I, sink: &mut S)
where
    I: InputProvider,
    S: ResultSink,
{
    while let Some(request) = provider.next_request().await {
        sink.clear().await;
        match vklad.project(&request).await {
            Ok(projection) => {
                let report = ProjectionReport::new(request.symbol().clone(), projection);
                sink.present(&report).await;
            }
            Err(err) => sink.fail(&CalculationFailure::from(&err)).await,
        }
    }
}
