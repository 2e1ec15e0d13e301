//! Dispatches recognized queries to the query-resolution service.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use torque_core::types::QueryResult;

use crate::error::DispatchError;

/// Default request timeout for one dispatch round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON request body sent to the query service.
#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Client for the query-resolution service.
///
/// Holds the resolved endpoint URL and a reused HTTP client. Each call to
/// [`dispatch`](Self::dispatch) is exactly one POST — no retry, no backoff —
/// and the caller decides what to do with each failure variant. The endpoint
/// is injected at construction; nothing here reads the environment.
pub struct QueryDispatcher {
    endpoint: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl QueryDispatcher {
    /// Create a dispatcher for the given endpoint with the default timeout.
    pub fn new(endpoint: &str) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a dispatcher with an explicit request timeout.
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint URL queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one query and decode the response.
    ///
    /// A transport-level failure maps to [`DispatchError::Network`]; a
    /// completed exchange with status ≠ 200 maps to [`DispatchError::Status`]
    /// without reading the body; a 200 body that does not decode into a
    /// [`QueryResult`] maps to [`DispatchError::MalformedBody`].
    pub async fn dispatch(&self, query: &str) -> Result<QueryResult, DispatchError> {
        debug!(endpoint = %self.endpoint, "Dispatching query");

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&QueryRequest { query })
            .send()
            .await
            .map_err(|e| DispatchError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), "Query service returned non-OK status");
            return Err(DispatchError::Status(status.as_u16()));
        }

        response
            .json::<QueryResult>()
            .await
            .map_err(|e| DispatchError::MalformedBody(e.to_string()))
    }
}
