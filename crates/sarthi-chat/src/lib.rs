//! Bilingual (Hindi/English) answer engine for KUSUM Sarthi.
//!
//! Normalizes user input, resolves it against a locale rule cascade and keeps
//! the session transcript, handing replies to speech output and analytics.

pub mod capture;
pub mod engine;
pub mod error;
pub mod normalizer;
pub mod orchestrator;
pub mod rules;
pub mod speech;
pub mod transcript;

pub use capture::{CaptureState, CaptureTicket, VoiceCapture};
pub use engine::{resolve, Resolution, RuleCascade};
pub use error::ChatError;
pub use normalizer::{normalize, Utterance};
pub use orchestrator::{SessionOrchestrator, Turn};
pub use rules::{LocaleCopy, RuleTable, Topic};
pub use speech::{
    Listener, RecordingSpeaker, ScriptedListener, SilentSpeaker, Speaker, SpeechRequest,
    UnsupportedListener,
};
pub use transcript::{Message, Transcript};
