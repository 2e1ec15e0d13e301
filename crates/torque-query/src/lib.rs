//! HTTP client for the query-resolution service.
//!
//! One recognized query string goes out as one POST; the decoded result or a
//! typed failure comes back. No retries, no caching, no shared state.

pub mod dispatcher;
pub mod error;

pub use dispatcher::QueryDispatcher;
pub use error::DispatchError;
