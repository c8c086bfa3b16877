//! Append-only conversation transcript.

use std::sync::LazyLock;

use regex::Regex;
use sarthi_core::{Result, Role, Timestamp};
use serde::Serialize;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s]+").expect("valid link regex"));

/// One entry of the transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Monotonic within a session; the greeting is 1.
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub created_at: Timestamp,
}

impl Message {
    /// `http(s)://` links in the message text, in order of appearance.
    pub fn links(&self) -> Vec<&str> {
        LINK.find_iter(&self.text).map(|m| m.as_str()).collect()
    }
}

/// Ordered messages of one session. Entries are never edited or removed.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message and return its id.
    pub fn push(&mut self, role: Role, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            role,
            text: text.into(),
            created_at: chrono::Utc::now(),
        });
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Pretty-printed JSON array of all messages.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.messages)?)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_ids_start_at_one_and_increase() {
        let mut t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.push(Role::Bot, "greeting"), 1);
        assert_eq!(t.push(Role::User, "q"), 2);
        assert_eq!(t.push(Role::Bot, "a"), 3);
        assert_eq!(t.len(), 3);
        assert_eq!(t.last().unwrap().text, "a");
    }

    #[test]
    fn test_default_transcript_also_starts_at_one() {
        let mut t = Transcript::default();
        assert_eq!(t.push(Role::Bot, "hi"), 1);
        assert_eq!(t.push(Role::Bot, "again"), 2);
    }

    #[test]
    fn test_message_links() {
        let mut t = Transcript::new();
        t.push(
            Role::Bot,
            "For DSC visit: https://www.emudhra.com and http://example.org/a?b=1 today",
        );
        let links = t.messages()[0].links();
        assert_eq!(
            links,
            vec!["https://www.emudhra.com", "http://example.org/a?b=1"]
        );
    }

    #[test]
    fn test_message_without_links() {
        let mut t = Transcript::new();
        t.push(Role::User, "no links here");
        assert!(t.messages()[0].links().is_empty());
    }

    #[test]
    fn test_transcript_json_export() {
        let mut t = Transcript::new();
        t.push(Role::User, "लाभ");
        t.push(Role::Bot, "answer");
        let json = t.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["role"], "user");
        assert_eq!(items[0]["text"], "लाभ");
        assert_eq!(items[1]["id"], 2);
        assert!(items[1]["created_at"].is_string());
    }
}
