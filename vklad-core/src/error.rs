use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the vklad workspace.
///
/// Covers input validation, the three provider failure classes (transport,
/// response shape, data availability), math domain violations from the growth
/// estimator, and the orchestrator's own conditions (missing capability,
/// single-flight rejection, provider timeout).
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum VkladError {
    /// Malformed or out-of-range input (non-positive amount/years, empty
    /// symbol, a history series with a non-positive time span).
    #[error("invalid input: {0}")]
    Validation(String),

    /// Transport-level failure talking to the market-data provider.
    #[error("network failure: {0}")]
    Network(String),

    /// The provider response could not be parsed, or a required column is
    /// missing from the response table.
    #[error("malformed response: {0}")]
    Format(String),

    /// The provider answered but the payload is unusable (empty data set,
    /// missing or zero price).
    #[error("data issue: {0}")]
    Data(String),

    /// A mathematically undefined operation was requested, e.g. a negative
    /// total return raised to a fractional exponent.
    #[error("math domain violation: {0}")]
    Domain(String),

    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// A calculation is already in flight and the orchestrator rejects
    /// concurrent runs.
    #[error("a calculation is already in flight")]
    Busy,

    /// A provider call exceeded the configured timeout.
    #[error("provider timed out: {capability}")]
    ProviderTimeout {
        /// Capability label that timed out (e.g. "history", "quote").
        capability: String,
    },
}

/// Copyable classification of a [`VkladError`], used in failure reports
/// handed to the result sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Input validation failed.
    Validation,
    /// Transport failure.
    Network,
    /// Unparseable or schema-violating response.
    Format,
    /// Empty or unusable data.
    Data,
    /// Mathematically undefined operation.
    Domain,
    /// Capability not implemented by the connector.
    Unsupported,
    /// Concurrent run rejected.
    Busy,
    /// Provider call timed out.
    Timeout,
}

impl VkladError {
    /// Helper: build a `Validation` error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Helper: build a `Network` error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Helper: build a `Format` error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `Domain` error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Helper: build an `Unsupported` error for a capability string.
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            capability: capability.into(),
        }
    }

    /// Classify this error for structured failure reporting.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Network,
            Self::Format(_) => ErrorKind::Format,
            Self::Data(_) => ErrorKind::Data,
            Self::Domain(_) => ErrorKind::Domain,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::Busy => ErrorKind::Busy,
            Self::ProviderTimeout { .. } => ErrorKind::Timeout,
        }
    }
}
