//! Speech output and voice input boundaries.
//!
//! The session core never renders audio or records a microphone itself. It
//! hands replies to a [`Speaker`] and receives transcripts from a
//! [`Listener`]; both are implemented by the host.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::{Arc, Mutex};

use sarthi_core::config::SpeechConfig;
use sarthi_core::Locale;

use crate::error::ChatError;

// =============================================================================
// Speak
// =============================================================================

/// A reply to be spoken.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub locale: Locale,
    /// BCP 47 voice tag, e.g. `hi-IN`.
    pub voice: &'static str,
    pub rate: f32,
    pub pitch: f32,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, locale: Locale, config: &SpeechConfig) -> Self {
        Self {
            text: text.into(),
            locale,
            voice: locale.speech_tag(),
            rate: config.rate,
            pitch: config.pitch,
        }
    }
}

/// Best-effort audio rendering of bot replies.
///
/// Implementations must cancel any in-progress rendering before starting the
/// next one. Errors are logged by the caller and never surfaced to the user.
pub trait Speaker: Send + Sync {
    fn speak(&self, request: &SpeechRequest) -> Result<(), ChatError>;

    /// Stop any in-progress rendering.
    fn cancel(&self) {}
}

/// Speaker that discards everything.
#[derive(Debug, Clone, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _request: &SpeechRequest) -> Result<(), ChatError> {
        Ok(())
    }
}

/// Speaker that records requests in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSpeaker {
    spoken: Arc<Mutex<Vec<SpeechRequest>>>,
    cancels: Arc<Mutex<usize>>,
    fail: bool,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A speaker that records each request and then reports failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn spoken(&self) -> Vec<SpeechRequest> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn cancels(&self) -> usize {
        self.cancels.lock().map(|c| *c).unwrap_or_default()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, request: &SpeechRequest) -> Result<(), ChatError> {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push(request.clone());
        }
        if self.fail {
            return Err(ChatError::SpeechFailed(
                "audio device unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn cancel(&self) {
        if let Ok(mut cancels) = self.cancels.lock() {
            *cancels += 1;
        }
    }
}

// =============================================================================
// Listen
// =============================================================================

/// Single-shot voice capture.
///
/// Yields exactly one transcript, or an error when recognition fails or is
/// cancelled. No interim results.
pub trait Listener: Send + Sync {
    /// Whether voice capture is supported on this host.
    fn is_available(&self) -> bool;

    fn listen(&self, locale: Locale) -> impl Future<Output = Result<String, ChatError>> + Send;
}

/// Listener for hosts without a recogniser.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedListener;

impl Listener for UnsupportedListener {
    fn is_available(&self) -> bool {
        false
    }

    async fn listen(&self, _locale: Locale) -> Result<String, ChatError> {
        Err(ChatError::VoiceUnavailable)
    }
}

/// Listener that replays a fixed list of transcripts, one per capture.
///
/// Used for demos and tests without a microphone. Once the script is
/// exhausted every capture reports cancellation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedListener {
    script: Arc<Mutex<VecDeque<String>>>,
}

impl ScriptedListener {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
        }
    }

    /// Transcripts not yet delivered.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or_default()
    }
}

impl Listener for ScriptedListener {
    fn is_available(&self) -> bool {
        true
    }

    async fn listen(&self, locale: Locale) -> Result<String, ChatError> {
        let next = self
            .script
            .lock()
            .map_err(|e| ChatError::CaptureFailed(format!("script lock poisoned: {e}")))?
            .pop_front();
        match next {
            Some(text) => {
                tracing::debug!(
                    locale = %locale,
                    chars = text.chars().count(),
                    "Scripted transcript delivered"
                );
                Ok(text)
            }
            None => Err(ChatError::CaptureCancelled),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_request_uses_locale_voice_and_config() {
        let config = SpeechConfig::default();
        let req = SpeechRequest::new("नमस्ते", Locale::Hi, &config);
        assert_eq!(req.voice, "hi-IN");
        assert!((req.rate - 0.95).abs() < f32::EPSILON);
        assert!((req.pitch - 1.0).abs() < f32::EPSILON);

        let req = SpeechRequest::new("hello", Locale::En, &config);
        assert_eq!(req.voice, "en-US");
    }

    #[test]
    fn test_recording_speaker_shares_buffer() {
        let speaker = RecordingSpeaker::new();
        let handle = speaker.clone();
        let req = SpeechRequest::new("a", Locale::En, &SpeechConfig::default());
        speaker.speak(&req).unwrap();
        speaker.cancel();
        assert_eq!(handle.spoken(), vec![req]);
        assert_eq!(handle.cancels(), 1);
    }

    #[test]
    fn test_failing_speaker_reports_error() {
        let speaker = RecordingSpeaker::failing();
        let req = SpeechRequest::new("a", Locale::En, &SpeechConfig::default());
        let err = speaker.speak(&req).unwrap_err();
        assert!(matches!(err, ChatError::SpeechFailed(_)));
        assert_eq!(speaker.spoken().len(), 1);
    }

    #[test]
    fn test_silent_speaker() {
        let req = SpeechRequest::new("a", Locale::Hi, &SpeechConfig::default());
        assert!(SilentSpeaker.speak(&req).is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_listener() {
        let listener = UnsupportedListener;
        assert!(!listener.is_available());
        let result = listener.listen(Locale::Hi).await;
        assert!(matches!(result, Err(ChatError::VoiceUnavailable)));
    }

    #[tokio::test]
    async fn test_scripted_listener_replays_in_order() {
        let listener = ScriptedListener::new(["लाभ क्या है", "documents"]);
        assert!(listener.is_available());
        assert_eq!(listener.remaining(), 2);
        assert_eq!(listener.listen(Locale::Hi).await.unwrap(), "लाभ क्या है");
        assert_eq!(listener.listen(Locale::En).await.unwrap(), "documents");
        assert!(matches!(
            listener.listen(Locale::En).await,
            Err(ChatError::CaptureCancelled)
        ));
    }

    #[tokio::test]
    async fn test_scripted_listener_clones_share_script() {
        let listener = ScriptedListener::new(vec!["one".to_string()]);
        let other = listener.clone();
        assert_eq!(other.listen(Locale::En).await.unwrap(), "one");
        assert_eq!(listener.remaining(), 0);
    }
}
