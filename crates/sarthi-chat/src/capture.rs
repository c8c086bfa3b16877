//! Voice capture lifecycle.
//!
//! A session has at most one active capture. Each capture is identified by a
//! [`CaptureTicket`]; starting a new capture or stopping the current one
//! retires its ticket so that a late result from it is discarded.
//!
//! Valid transitions:
//! - Idle -> Listening (start capture)
//! - Listening -> Idle (result, error, stop, or engine-reported end)
//! - Listening -> Listening (restart: the previous capture is cancelled first)

use std::fmt;

use tracing::debug;

/// Whether a voice capture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Listening,
}

impl fmt::Display for CaptureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureState::Idle => write!(f, "Idle"),
            CaptureState::Listening => write!(f, "Listening"),
        }
    }
}

impl CaptureState {
    pub fn can_transition_to(&self, target: &CaptureState) -> bool {
        matches!(
            (self, target),
            (CaptureState::Idle, CaptureState::Listening)
                | (CaptureState::Listening, CaptureState::Idle)
                | (CaptureState::Listening, CaptureState::Listening)
        )
    }
}

/// Handle identifying one capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureTicket(u64);

impl CaptureTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CaptureTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capture#{}", self.0)
    }
}

/// Tracks the single active capture of a session.
#[derive(Debug, Default)]
pub struct VoiceCapture {
    issued: u64,
    active: Option<CaptureTicket>,
}

impl VoiceCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        match self.active {
            Some(_) => CaptureState::Listening,
            None => CaptureState::Idle,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<CaptureTicket> {
        self.active
    }

    /// Number of captures started so far.
    pub fn started(&self) -> u64 {
        self.issued
    }

    /// Begin a new capture. Returns its ticket and the ticket of the capture
    /// it replaced, which the caller must cancel.
    pub fn start(&mut self) -> (CaptureTicket, Option<CaptureTicket>) {
        let from = self.state();
        let replaced = self.active.take();
        self.issued += 1;
        let ticket = CaptureTicket(self.issued);
        self.active = Some(ticket);
        self.log_transition(from, ticket, "started");
        (ticket, replaced)
    }

    /// Stop the active capture, if any, and return its ticket.
    pub fn stop(&mut self) -> Option<CaptureTicket> {
        let from = self.state();
        let stopped = self.active.take();
        if let Some(ticket) = stopped {
            self.log_transition(from, ticket, "stopped");
        }
        stopped
    }

    /// Finish `ticket`. Returns `true` if it was the active capture; stale
    /// tickets leave the state untouched.
    pub fn finish(&mut self, ticket: CaptureTicket) -> bool {
        if self.active != Some(ticket) {
            debug!(%ticket, "Ignoring stale capture");
            return false;
        }
        let from = self.state();
        self.active = None;
        self.log_transition(from, ticket, "finished");
        true
    }

    fn log_transition(&self, from: CaptureState, ticket: CaptureTicket, cause: &str) {
        let to = self.state();
        debug_assert!(
            from.can_transition_to(&to),
            "invalid capture transition {from} -> {to}"
        );
        debug!("Capture state: {} -> {} ({} {})", from, to, ticket, cause);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(CaptureState::Idle.to_string(), "Idle");
        assert_eq!(CaptureState::Listening.to_string(), "Listening");
    }

    #[test]
    fn test_valid_transitions() {
        assert!(CaptureState::Idle.can_transition_to(&CaptureState::Listening));
        assert!(CaptureState::Listening.can_transition_to(&CaptureState::Idle));
        let restart = CaptureState::Listening;
        assert!(restart.can_transition_to(&CaptureState::Listening));
        assert!(!CaptureState::Idle.can_transition_to(&CaptureState::Idle));
    }

    #[test]
    fn test_new_capture_is_idle() {
        let capture = VoiceCapture::new();
        assert_eq!(capture.state(), CaptureState::Idle);
        assert!(!capture.is_listening());
        assert_eq!(capture.started(), 0);
    }

    #[test]
    fn test_start_then_finish() {
        let mut capture = VoiceCapture::new();
        let (ticket, replaced) = capture.start();
        assert!(replaced.is_none());
        assert!(capture.is_listening());
        assert!(capture.finish(ticket));
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_restart_replaces_previous_capture() {
        let mut capture = VoiceCapture::new();
        let (first, _) = capture.start();
        let (second, replaced) = capture.start();
        assert_eq!(replaced, Some(first));
        assert_ne!(first, second);
        assert_eq!(capture.active(), Some(second));

        // The replaced capture's late result is ignored and does not end the new one.
        assert!(!capture.finish(first));
        assert!(capture.is_listening());
        assert!(capture.finish(second));
        assert_eq!(capture.started(), 2);
    }

    #[test]
    fn test_stop_retires_ticket() {
        let mut capture = VoiceCapture::new();
        let (ticket, _) = capture.start();
        assert_eq!(capture.stop(), Some(ticket));
        assert!(!capture.is_listening());
        assert!(!capture.finish(ticket));
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut capture = VoiceCapture::new();
        assert_eq!(capture.stop(), None);
    }

    #[test]
    fn test_lifecycle_only_takes_valid_transitions() {
        fn check(capture: &VoiceCapture, from: CaptureState, to: CaptureState) {
            assert_eq!(capture.state(), to);
            assert!(from.can_transition_to(&to), "{from} -> {to}");
        }

        let mut capture = VoiceCapture::new();

        let (first, _) = capture.start();
        check(&capture, CaptureState::Idle, CaptureState::Listening);
        let (second, _) = capture.start();
        check(&capture, CaptureState::Listening, CaptureState::Listening);
        assert!(!capture.finish(first));
        check(&capture, CaptureState::Listening, CaptureState::Listening);
        assert!(capture.finish(second));
        check(&capture, CaptureState::Listening, CaptureState::Idle);
        assert_eq!(capture.stop(), None);
        assert_eq!(capture.state(), CaptureState::Idle);
        assert_eq!(capture.started(), 2);
    }

    #[test]
    fn test_ticket_display() {
        let mut capture = VoiceCapture::new();
        let (ticket, _) = capture.start();
        assert_eq!(ticket.to_string(), "capture#1");
        assert_eq!(ticket.id(), 1);
    }
}
