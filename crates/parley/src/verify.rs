//! Admission checks run before any handler callback.
//!
//! The two checks are independent and may run in either order. Both are
//! pure functions of their inputs; the dispatcher decides which of them to
//! apply.

use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use tracing::debug;

use parley_envelope::RequestEnvelope;

use crate::errors::{DispatchError, IdentityMismatchReason};

/// Tracing target for admission checks.
pub(crate) const VERIFY_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::verify");

/// Checks that the request is addressed to the configured application.
///
/// Comparison is exact; no case folding or trimming is applied.
///
/// # Errors
///
/// Returns [`DispatchError::IdentityMismatch`] when either identifier is
/// empty or the two differ.
pub fn verify_application_id(
    expected: &str,
    envelope: &RequestEnvelope,
) -> Result<(), DispatchError> {
    let actual = envelope.application_id();
    if expected.is_empty() {
        return Err(DispatchError::identity_mismatch(
            IdentityMismatchReason::ExpectedEmpty,
        ));
    }
    if actual.is_empty() {
        return Err(DispatchError::identity_mismatch(
            IdentityMismatchReason::RequestEmpty,
        ));
    }
    if expected != actual {
        return Err(DispatchError::identity_mismatch(
            IdentityMismatchReason::Differs {
                expected: expected.to_owned(),
                actual: actual.to_owned(),
            },
        ));
    }
    Ok(())
}

/// Checks that `timestamp` lies within `tolerance_secs` of `now`, in either
/// direction. A drift of exactly `tolerance_secs` is accepted.
///
/// # Errors
///
/// Returns [`DispatchError::MalformedTimestamp`] when `timestamp` is not
/// RFC 3339, and [`DispatchError::StaleRequest`] when it is out of range.
pub fn verify_timestamp(
    timestamp: &str,
    now: OffsetDateTime,
    tolerance_secs: u32,
) -> Result<(), DispatchError> {
    let issued = OffsetDateTime::parse(timestamp, &Rfc3339)
        .map_err(|source| DispatchError::malformed_timestamp(timestamp, source))?;
    let drift = (now - issued).abs();
    debug!(
        target: VERIFY_TARGET,
        drift_secs = drift.whole_seconds(),
        tolerance_secs,
        "checked request timestamp"
    );
    if drift > Duration::seconds(i64::from(tolerance_secs)) {
        return Err(DispatchError::stale_request(issued, now, tolerance_secs));
    }
    Ok(())
}
