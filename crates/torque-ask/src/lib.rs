//! Interactive ask flow for Torque.
//!
//! Wires recognized (spoken or typed) input to the query dispatcher and the
//! visualization selector, converting every failure into a user-facing
//! notice at this boundary — nothing propagates past it.

pub mod error;
pub mod pipeline;
pub mod voice;

pub use error::AskError;
pub use pipeline::{AskOutcome, AskPipeline, NOT_UNDERSTOOD_NOTICE};
pub use voice::{RecognitionOutcome, Recognizer, StubRecognizer};
