//! Speech recognition boundary for the ask flow.
//!
//! Recognition itself is an external collaborator (a cloud speech SDK, an OS
//! capture stack); the pipeline only consumes its outcome. [`Recognizer`] is
//! the seam where a real backend plugs in; [`StubRecognizer`] is the
//! placeholder used on hosts without one, where input arrives typed.

use crate::error::AskError;

/// What one round of speech capture produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Speech was recognized into a query string.
    Recognized(String),
    /// Capture ran but nothing usable was recognized.
    NotUnderstood,
}

/// A source of recognized query text.
pub trait Recognizer {
    /// Capture one utterance and return its outcome.
    fn recognize_once(&mut self) -> Result<RecognitionOutcome, AskError>;
}

/// Placeholder recognizer for hosts without a speech backend.
pub struct StubRecognizer {
    /// Maximum capture duration in seconds for one utterance.
    pub max_capture_secs: u32,
}

impl StubRecognizer {
    /// Create a stub with the given capture limit.
    pub fn new(max_capture_secs: u32) -> Self {
        Self { max_capture_secs }
    }

    /// Whether a speech backend is available on this host.
    pub fn is_available(&self) -> bool {
        false
    }
}

impl Recognizer for StubRecognizer {
    /// Always fails: there is no backend to capture from. The host falls
    /// back to typed input.
    fn recognize_once(&mut self) -> Result<RecognitionOutcome, AskError> {
        Err(AskError::Voice(
            "no speech backend is available on this host".to_string(),
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================
