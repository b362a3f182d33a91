use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the strom workspace.
///
/// Every failure mode of a download call maps onto exactly one of these
/// variants. A failed call never returns partial data; the variant tells the
/// caller whether the fault lies with the request, the source, or the data
/// the source returned.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StromError {
    /// The caller-supplied interval is malformed or outside the documented
    /// availability of the requested series.
    #[error("invalid range: {msg}")]
    InvalidRange {
        /// Human-readable description of the violation.
        msg: String,
    },

    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested
        /// (e.g. "day-ahead-prices", "cross-border-flows/GB-IE").
        capability: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Transport failed or the payload could not be decoded for a window.
    /// Fatal to the whole call: a gap-free series can no longer be guaranteed.
    #[error("{connector} unavailable: {msg}")]
    SourceUnavailable {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A source returned records inconsistent with its declared resolution
    /// or ordering. Data-integrity fault, never coerced.
    #[error("malformed batch from {connector}: {msg}")]
    MalformedBatch {
        /// Connector name that produced the batch.
        connector: String,
        /// Description of the inconsistency.
        msg: String,
    },

    /// Expected instants are missing after assembly. Always fatal; missing
    /// points are never filled or interpolated.
    #[error("incomplete series: {missing} expected instant(s) missing, first at epoch {first_missing}")]
    IncompleteSeries {
        /// Number of expected instants absent from all batches.
        missing: usize,
        /// Epoch seconds of the earliest missing instant.
        first_missing: i64,
    },

    /// Aggregation inputs do not share a common instant set.
    /// Fatal to the aggregation step only, not to raw fetches.
    #[error("group mismatch: {msg}")]
    GroupMismatch {
        /// Description of the divergence.
        msg: String,
    },
}

impl StromError {
    /// Helper: build an `InvalidRange` error from a message.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange { msg: msg.into() }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `SourceUnavailable` error tagged with the connector name.
    pub fn source(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `MalformedBatch` error tagged with the connector name.
    pub fn malformed(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MalformedBatch {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `GroupMismatch` error from a message.
    pub fn group_mismatch(msg: impl Into<String>) -> Self {
        Self::GroupMismatch { msg: msg.into() }
    }
}
