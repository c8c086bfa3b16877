//! Session orchestrator: owns the transcript and session flags, runs the
//! cascade for each submission and hands replies to the speaker and event sink.
//!
//! All methods take `&mut self`; the host serializes user actions, so there is
//! no interior locking. Voice capture is the only asynchronous boundary: the
//! host starts a capture, runs the [`Listener`] future, and reports its outcome
//! back through [`SessionOrchestrator::finish_listening`].

use sarthi_core::config::{SarthiConfig, SpeechConfig};
use sarthi_core::{ChatEvent, EventSink, Locale, Role, Timestamp};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::capture::{CaptureTicket, VoiceCapture};
use crate::engine::{Resolution, RuleCascade};
use crate::error::ChatError;
use crate::normalizer::Utterance;
use crate::rules::{self, LocaleCopy};
use crate::speech::{Listener, Speaker, SpeechRequest};
use crate::transcript::Transcript;

/// Result of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub user_id: u64,
    pub bot_id: u64,
    pub resolution: Resolution,
}

/// One chat session.
pub struct SessionOrchestrator {
    id: Uuid,
    started_at: Timestamp,
    locale: Locale,
    cascade: RuleCascade,
    muted: bool,
    capture: VoiceCapture,
    pending_input: String,
    transcript: Transcript,
    speech: SpeechConfig,
    voice_enabled: bool,
    speaker: Box<dyn Speaker>,
    events: Box<dyn EventSink>,
}

impl SessionOrchestrator {
    /// Start a session: logs a page view and seeds the transcript with the
    /// locale greeting.
    pub fn new(
        config: &SarthiConfig,
        speaker: Box<dyn Speaker>,
        events: Box<dyn EventSink>,
    ) -> Self {
        let locale = config.general.locale;
        let mut transcript = Transcript::new();
        transcript.push(Role::Bot, rules::table(locale).copy.greeting);

        let session = Self {
            id: Uuid::new_v4(),
            started_at: chrono::Utc::now(),
            locale,
            cascade: RuleCascade::new(locale),
            muted: config.speech.muted,
            capture: VoiceCapture::new(),
            pending_input: String::new(),
            transcript,
            speech: config.speech.clone(),
            voice_enabled: config.voice.enabled,
            speaker,
            events,
        };
        info!(
            session = %session.id,
            locale = %locale,
            muted = session.muted,
            "Chat session started"
        );
        session.events.emit(&ChatEvent::chat_page(locale));
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_listening(&self) -> bool {
        self.capture.is_listening()
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Interface text for the current locale.
    pub fn copy(&self) -> &'static LocaleCopy {
        &rules::table(self.locale).copy
    }

    /// Transcript as pretty-printed JSON.
    pub fn transcript_json(&self) -> Result<String, ChatError> {
        Ok(self.transcript.to_json()?)
    }

    // =========================================================================
    // Text input
    // =========================================================================

    /// Replace the pending-input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Submit the pending-input buffer.
    pub fn submit_pending(&mut self) -> Option<Turn> {
        let text = std::mem::take(&mut self.pending_input);
        let turn = self.submit(&text);
        if turn.is_none() {
            self.pending_input = text;
        }
        turn
    }

    /// Handle one user submission.
    ///
    /// Blank input is a no-op and returns `None`. Otherwise appends the user
    /// message and the reply, clears the pending input and speaks the reply
    /// unless muted.
    pub fn submit(&mut self, raw: &str) -> Option<Turn> {
        let utterance = Utterance::parse(raw)?;

        self.events.emit(&ChatEvent::ChatSend {
            locale: self.locale,
            input_length: utterance.len(),
        });

        let resolution = self.cascade.resolve(&utterance.normalized);
        let user_id = self.transcript.push(Role::User, utterance.raw);
        let bot_id = self.transcript.push(Role::Bot, resolution.text);
        self.pending_input.clear();

        debug!(
            session = %self.id,
            locale = %self.locale,
            group = %resolution.group,
            topic = %resolution.topic,
            user_id,
            bot_id,
            "Reply resolved"
        );

        self.say(resolution.text);

        Some(Turn {
            user_id,
            bot_id,
            resolution,
        })
    }

    fn say(&self, text: &str) {
        if self.muted || !self.speech.enabled {
            return;
        }
        let request = SpeechRequest::new(text, self.locale, &self.speech);
        self.speaker.cancel();
        if let Err(e) = self.speaker.speak(&request) {
            warn!(session = %self.id, error = %e, "Speech output failed");
        }
    }

    // =========================================================================
    // Session flags
    // =========================================================================

    /// Switch the conversation language. Logs a page view when it changes.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale {
            return;
        }
        info!(session = %self.id, from = %self.locale, to = %locale, "Locale changed");
        self.locale = locale;
        self.cascade = RuleCascade::new(locale);
        self.events.emit(&ChatEvent::chat_page(locale));
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        debug!(session = %self.id, muted = self.muted, "Mute toggled");
        self.muted
    }

    // =========================================================================
    // Voice capture
    // =========================================================================

    /// Begin a voice capture, cancelling any capture already in flight.
    ///
    /// Fails with [`ChatError::VoiceUnavailable`] when voice input is disabled
    /// or unsupported; the session state is unchanged in that case.
    pub fn start_listening<L: Listener>(
        &mut self,
        listener: &L,
    ) -> Result<CaptureTicket, ChatError> {
        if !self.voice_enabled || !listener.is_available() {
            warn!(session = %self.id, "Voice input unavailable");
            return Err(ChatError::VoiceUnavailable);
        }
        let (ticket, replaced) = self.capture.start();
        if let Some(previous) = replaced {
            info!(session = %self.id, %previous, "Cancelled previous capture");
        }
        debug!(
            session = %self.id,
            %ticket,
            locale = %self.locale,
            captures = self.capture.started(),
            "Listening"
        );
        Ok(ticket)
    }

    /// Deliver the outcome of a capture.
    ///
    /// A transcript from the active capture is written to the pending input
    /// and submitted. Results of stale captures are discarded; errors and
    /// cancellations only reset the listening flag.
    pub fn finish_listening(
        &mut self,
        ticket: CaptureTicket,
        outcome: Result<String, ChatError>,
    ) -> Option<Turn> {
        if !self.capture.finish(ticket) {
            debug!(session = %self.id, %ticket, "Discarding result of stale capture");
            return None;
        }
        match outcome {
            Ok(text) => {
                self.set_input(text);
                self.submit_pending()
            }
            Err(ChatError::CaptureCancelled) => {
                debug!(session = %self.id, %ticket, "Capture cancelled");
                None
            }
            Err(e) => {
                warn!(session = %self.id, %ticket, error = %e, "Voice capture failed");
                None
            }
        }
    }

    /// Stop the active capture. Its result, if one still arrives, is ignored.
    pub fn stop_listening(&mut self) -> Option<CaptureTicket> {
        let stopped = self.capture.stop();
        if let Some(ticket) = stopped {
            debug!(session = %self.id, %ticket, "Capture stopped");
        }
        stopped
    }

    /// The recogniser reported that `ticket` ended without a result.
    pub fn capture_ended(&mut self, ticket: CaptureTicket) {
        self.capture.finish(ticket);
    }

    /// Start a capture, await the listener and submit its transcript.
    pub async fn listen_once<L: Listener>(
        &mut self,
        listener: &L,
    ) -> Result<Option<Turn>, ChatError> {
        let ticket = self.start_listening(listener)?;
        let outcome = listener.listen(self.locale).await;
        Ok(self.finish_listening(ticket, outcome))
    }
}

// =============================================================================
// Tests
// =============================================================================
