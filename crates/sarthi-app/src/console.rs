//! Terminal implementations of the speech and voice boundaries.

use sarthi_chat::{
    ChatError, Listener, ScriptedListener, Speaker, SpeechRequest, UnsupportedListener,
};
use sarthi_core::Locale;

/// Speaker for terminals without a synthesizer: each reply becomes a
/// structured record on `sarthi::speech` carrying the voice parameters.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&self, request: &SpeechRequest) -> Result<(), ChatError> {
        tracing::info!(
            target: "sarthi::speech",
            voice = request.voice,
            rate = request.rate,
            pitch = request.pitch,
            chars = request.text.chars().count(),
            "Speaking reply"
        );
        Ok(())
    }

    fn cancel(&self) {
        tracing::trace!(target: "sarthi::speech", "Speech cancelled");
    }
}

/// Voice input source selected at startup.
#[derive(Debug, Clone)]
pub enum ConsoleListener {
    /// Replays transcripts from a `--voice-script` file.
    Scripted(ScriptedListener),
    /// No recogniser on this host.
    Unsupported(UnsupportedListener),
}

impl ConsoleListener {
    /// One transcript per non-empty line of `script`.
    pub fn from_script(script: &str) -> Self {
        let lines = script
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        ConsoleListener::Scripted(ScriptedListener::new(lines))
    }
}

impl Listener for ConsoleListener {
    fn is_available(&self) -> bool {
        match self {
            ConsoleListener::Scripted(l) => l.is_available(),
            ConsoleListener::Unsupported(l) => l.is_available(),
        }
    }

    async fn listen(&self, locale: Locale) -> Result<String, ChatError> {
        match self {
            ConsoleListener::Scripted(l) => l.listen(locale).await,
            ConsoleListener::Unsupported(l) => l.listen(locale).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarthi_core::config::SpeechConfig;

    #[test]
    fn test_console_speaker_accepts_requests() {
        let req = SpeechRequest::new("नमस्ते", Locale::Hi, &SpeechConfig::default());
        assert!(ConsoleSpeaker.speak(&req).is_ok());
        ConsoleSpeaker.cancel();
    }

    #[tokio::test]
    async fn test_listener_from_script_skips_blank_lines() {
        let script = "benefits\n\n   \n  कितनी जमीन चाहिए  \n";
        let listener = ConsoleListener::from_script(script);
        assert!(listener.is_available());
        assert_eq!(listener.listen(Locale::En).await.unwrap(), "benefits");
        assert_eq!(
            listener.listen(Locale::Hi).await.unwrap(),
            "कितनी जमीन चाहिए"
        );
        assert!(listener.listen(Locale::Hi).await.is_err());
    }

    #[tokio::test]
    async fn test_unsupported_console_listener() {
        let listener = ConsoleListener::Unsupported(UnsupportedListener);
        assert!(!listener.is_available());
        assert!(matches!(
            listener.listen(Locale::En).await,
            Err(ChatError::VoiceUnavailable)
        ));
    }
}
