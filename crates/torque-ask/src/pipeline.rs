//! One-shot ask pipeline: recognized text in, render instruction or notice out.

use tracing::{debug, info, warn};

use torque_query::{DispatchError, QueryDispatcher};
use torque_viz::selector::{select, RenderInstruction};

/// Notice shown when recognition produced no usable text.
pub const NOT_UNDERSTOOD_NOTICE: &str = "Sorry, I couldn't understand that. Please try again.";

/// Terminal outcome of one ask round.
#[derive(Clone, Debug, PartialEq)]
pub enum AskOutcome {
    /// The query resolved; hand this to the rendering surface.
    Render(RenderInstruction),
    /// The query did not resolve; show this message instead.
    Notice(String),
}

/// Orchestrates one query round trip: dispatch, then visualization selection.
///
/// Stateless across calls — each invocation is one synchronous round trip
/// with nothing held between them. Every failure is converted into a
/// user-facing notice here; none crashes the host, none is retried.
pub struct AskPipeline {
    dispatcher: QueryDispatcher,
}

impl AskPipeline {
    /// Create a pipeline around the given dispatcher.
    pub fn new(dispatcher: QueryDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run one round for the given recognized text.
    ///
    /// `None` or empty text means recognition failed upstream: the round
    /// short-circuits to the "couldn't understand" notice and the dispatcher
    /// is never invoked. Each dispatch failure variant maps to its own
    /// notice; the status notice carries the numeric code.
    pub async fn run(&self, raw_text: Option<&str>) -> AskOutcome {
        let query = match raw_text {
            Some(text) if !text.is_empty() => text,
            _ => {
                debug!("No usable query text; skipping dispatch");
                return AskOutcome::Notice(NOT_UNDERSTOOD_NOTICE.to_string());
            }
        };

        info!(query = %query, "Processing query");
        match self.dispatcher.dispatch(query).await {
            Ok(result) => AskOutcome::Render(select(&result)),
            Err(DispatchError::Status(code)) => {
                warn!(status = code, "Query service rejected the request");
                AskOutcome::Notice(format!("Error: {code}"))
            }
            Err(err) => {
                warn!(error = %err, "Query dispatch failed");
                AskOutcome::Notice(format!("Failed to process query: {err}"))
            }
        }
    }
}
