//! Error types for the chat session.

use sarthi_core::SarthiError;

/// Errors from voice capture, speech output and session plumbing.
///
/// None of these is fatal to a session: the text conversation always
/// continues after one is reported.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ChatError {
    #[error("voice input is not available")]
    VoiceUnavailable,
    #[error("voice capture failed: {0}")]
    CaptureFailed(String),
    #[error("voice capture was cancelled")]
    CaptureCancelled,
    #[error("speech output failed: {0}")]
    SpeechFailed(String),
    #[error(transparent)]
    Core(#[from] SarthiError),
}
