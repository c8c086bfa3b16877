//! Analytics events and the sink they are logged through.
//!
//! Events are fire-and-forget: a sink must never block or fail the caller.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::types::{Locale, Timestamp};

/// Events emitted by a chat session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ChatEvent {
    /// A chat page was shown (session start or locale switch).
    PageView { page: String, locale: Locale },
    /// The user submitted a non-empty message.
    ChatSend { locale: Locale, input_length: usize },
}

impl ChatEvent {
    /// Page view for the chat screen.
    pub fn chat_page(locale: Locale) -> Self {
        ChatEvent::PageView {
            page: "chat".to_string(),
            locale,
        }
    }

    /// Returns the wire name of this event.
    pub fn event_name(&self) -> &'static str {
        match self {
            ChatEvent::PageView { .. } => "page_view",
            ChatEvent::ChatSend { .. } => "chat_send",
        }
    }

    /// Flat attribute map logged alongside the event name.
    pub fn attributes(&self) -> Map<String, Value> {
        let value = match self {
            ChatEvent::PageView { page, locale } => json!({
                "page": page,
                "locale": locale.code(),
            }),
            ChatEvent::ChatSend {
                locale,
                input_length,
            } => json!({
                "locale": locale.code(),
                "input_length": input_length,
            }),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

/// Observability boundary (`LogEvent(name, attributes)`).
pub trait EventSink: Send + Sync {
    /// Record a named event. Must not panic or block.
    fn log_event(&self, name: &str, attributes: &Map<String, Value>);

    /// Record a typed chat event.
    fn emit(&self, event: &ChatEvent) {
        self.log_event(event.event_name(), &event.attributes());
    }
}

/// Sink that writes events as structured tracing records on `sarthi::events`.
///
/// Each record carries the attributes as JSON plus a `ts` in epoch milliseconds.
#[derive(Debug, Clone, Default)]
pub struct TracingEventSink;

impl TracingEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingEventSink {
    fn log_event(&self, name: &str, attributes: &Map<String, Value>) {
        let mut payload = attributes.clone();
        payload.insert(
            "ts".to_string(),
            Value::from(chrono::Utc::now().timestamp_millis()),
        );
        let payload = Value::Object(payload);
        tracing::info!(
            target: "sarthi::events",
            event = name,
            attributes = %payload,
            "EVENT"
        );
    }
}

/// An event captured by [`RecordingEventSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    pub name: String,
    pub attributes: Map<String, Value>,
    pub logged_at: Timestamp,
}

/// In-memory sink that keeps every event, for tests and diagnostics.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    events: Arc<Mutex<Vec<LoggedEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events logged so far.
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Names of all events logged so far, in order.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl EventSink for RecordingEventSink {
    fn log_event(&self, name: &str, attributes: &Map<String, Value>) {
        match self.events.lock() {
            Ok(mut events) => events.push(LoggedEvent {
                name: name.to_string(),
                attributes: attributes.clone(),
                logged_at: chrono::Utc::now(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, event = name, "Event buffer poisoned, dropping event")
            }
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
    fn test_event_name() {
        assert_eq!(ChatEvent::chat_page(Locale::Hi).event_name(), "page_view");
        let send = ChatEvent::ChatSend {
            locale: Locale::En,
            input_length: 4,
        };
        assert_eq!(send.event_name(), "chat_send");
    }

    #[test]
    fn test_page_view_attributes() {
        let attrs = ChatEvent::chat_page(Locale::En).attributes();
        assert_eq!(attrs.get("page"), Some(&Value::from("chat")));
        assert_eq!(attrs.get("locale"), Some(&Value::from("en")));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_chat_send_attributes() {
        let attrs = ChatEvent::ChatSend {
            locale: Locale::Hi,
            input_length: 17,
        }
        .attributes();
        assert_eq!(attrs.get("locale"), Some(&Value::from("hi")));
        assert_eq!(attrs.get("input_length"), Some(&Value::from(17)));
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingEventSink::new();
        sink.emit(&ChatEvent::chat_page(Locale::Hi));
        sink.emit(&ChatEvent::ChatSend {
            locale: Locale::Hi,
            input_length: 3,
        });
        assert_eq!(sink.names(), vec!["page_view", "chat_send"]);
    }

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        let sink = RecordingEventSink::new();
        let handle = sink.clone();
        sink.log_event("custom", &Map::new());
        assert_eq!(handle.events().len(), 1);
        assert_eq!(handle.events()[0].name, "custom");
    }

    #[test]
    fn test_tracing_sink_does_not_panic() {
        let sink = TracingEventSink::new();
        sink.emit(&ChatEvent::chat_page(Locale::En));
    }

    #[test]
    fn test_event_serialization() {
        let event = ChatEvent::ChatSend {
            locale: Locale::En,
            input_length: 9,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
