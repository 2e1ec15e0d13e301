//! Error types for the ask flow.

use thiserror::Error;

/// Errors from the interactive ask flow.
///
/// Dispatch failures are deliberately not represented here: they are expected
/// outcomes of a round trip, mapped to user-facing notices by the pipeline
/// rather than propagated as errors.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("voice error: {0}")]
    Voice(String),
}
