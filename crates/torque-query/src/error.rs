//! Error types for query dispatch.

use thiserror::Error;

/// Failure modes of a single dispatch round trip.
///
/// Exactly one variant is produced per failed call. Callers handle each case
/// explicitly; nothing here is retried or escalated automatically.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The HTTP exchange never completed (connection failure, timeout).
    #[error("network failure: {0}")]
    Network(String),

    /// The exchange completed with a status other than 200. The response
    /// body is not inspected in this case.
    #[error("query service returned status {0}")]
    Status(u16),

    /// Status was 200 but the body did not decode into a query result.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}
