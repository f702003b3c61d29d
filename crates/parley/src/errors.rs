//! Error types for request admission and lifecycle dispatch.
//!
//! Every variant is terminal for the turn that produced it: no response
//! envelope accompanies an error, and the transport decides how to report
//! the failure to the platform.

use std::error::Error as StdError;

use thiserror::Error;
use time::OffsetDateTime;

use crate::handler::LifecycleEvent;

/// Error type returned by handler callbacks.
pub type HandlerError = Box<dyn StdError + Send + Sync + 'static>;

/// Why the application identity check rejected a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityMismatchReason {
    /// No expected application ID is configured.
    #[error("configured application ID is empty")]
    ExpectedEmpty,
    /// The request carried no application ID.
    #[error("request application ID is empty")]
    RequestEmpty,
    /// The request named a different application.
    #[error("request application ID '{actual}' does not match '{expected}'")]
    Differs {
        /// Configured application ID.
        expected: String,
        /// Application ID presented by the request.
        actual: String,
    },
}

/// Stable classification of a [`DispatchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The application identity check failed.
    IdentityMismatch,
    /// The request timestamp could not be parsed.
    MalformedTimestamp,
    /// The request timestamp was outside the tolerance window.
    StaleRequest,
    /// A handler callback failed.
    HandlerFailure,
}

/// Errors surfaced by [`Dispatcher::process`](crate::Dispatcher::process).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Application identity check failed.
    #[error("application identity mismatch: {reason}")]
    IdentityMismatch {
        /// Which part of the check failed.
        reason: IdentityMismatchReason,
    },

    /// The request timestamp is not valid RFC 3339.
    #[error("malformed request timestamp '{value}': {source}")]
    MalformedTimestamp {
        /// Raw timestamp from the request.
        value: String,
        /// Parser error.
        #[source]
        source: time::error::Parse,
    },

    /// The request timestamp is further from "now" than the tolerance allows.
    #[error("request timestamp {timestamp} is more than {tolerance_secs}s away from {now}")]
    StaleRequest {
        /// Parsed request timestamp.
        timestamp: OffsetDateTime,
        /// Time of the check.
        now: OffsetDateTime,
        /// Tolerance in force.
        tolerance_secs: u32,
    },

    /// A handler callback returned an error.
    #[error("{event} handler failed: {source}")]
    HandlerFailure {
        /// Callback that failed.
        event: LifecycleEvent,
        /// Error returned by the handler.
        #[source]
        source: HandlerError,
    },
}

impl DispatchError {
    /// Returns the stable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IdentityMismatch { .. } => ErrorKind::IdentityMismatch,
            Self::MalformedTimestamp { .. } => ErrorKind::MalformedTimestamp,
            Self::StaleRequest { .. } => ErrorKind::StaleRequest,
            Self::HandlerFailure { .. } => ErrorKind::HandlerFailure,
        }
    }

    /// `true` for failures of an admission check rather than a handler.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::HandlerFailure { .. })
    }

    /// Creates an identity mismatch error.
    #[must_use]
    pub const fn identity_mismatch(reason: IdentityMismatchReason) -> Self {
        Self::IdentityMismatch { reason }
    }

    /// Creates a malformed timestamp error.
    #[must_use]
    pub fn malformed_timestamp(value: impl Into<String>, source: time::error::Parse) -> Self {
        Self::MalformedTimestamp {
            value: value.into(),
            source,
        }
    }

    /// Creates a stale request error.
    #[must_use]
    pub const fn stale_request(
        timestamp: OffsetDateTime,
        now: OffsetDateTime,
        tolerance_secs: u32,
    ) -> Self {
        Self::StaleRequest {
            timestamp,
            now,
            tolerance_secs,
        }
    }

    /// Creates a handler failure error.
    #[must_use]
    pub fn handler_failure(event: LifecycleEvent, source: HandlerError) -> Self {
        Self::HandlerFailure { event, source }
    }
}
