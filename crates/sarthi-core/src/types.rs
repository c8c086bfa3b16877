use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SarthiError;

/// Wall-clock timestamp used on messages and events.
pub type Timestamp = DateTime<Utc>;

// =============================================================================
// Enums
// =============================================================================

/// Conversation language. Selects keyword tables, response text and speech voice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Hindi (Devanagari plus romanised "texting" spellings).
    #[default]
    Hi,
    /// English.
    En,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Locale; 2] = [Locale::Hi, Locale::En];

    /// Short code used in config files and event attributes.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Hi => "hi",
            Locale::En => "en",
        }
    }

    /// BCP 47 tag handed to speech synthesis and recognition.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Locale::Hi => "hi-IN",
            Locale::En => "en-US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SarthiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" | "hi-in" => Ok(Locale::Hi),
            "en" | "english" | "en-us" | "en-in" => Ok(Locale::En),
            other => Err(SarthiError::InvalidLocale(other.to_string())),
        }
    }
}

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
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
    fn test_locale_codes() {
        assert_eq!(Locale::Hi.code(), "hi");
        assert_eq!(Locale::En.code(), "en");
        assert_eq!(Locale::Hi.to_string(), "hi");
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_locale_speech_tags() {
        assert_eq!(Locale::Hi.speech_tag(), "hi-IN");
        assert_eq!(Locale::En.speech_tag(), "en-US");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("hi".parse::<Locale>().unwrap(), Locale::Hi);
        assert_eq!(" EN ".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("hindi".parse::<Locale>().unwrap(), Locale::Hi);
        assert_eq!("en-IN".parse::<Locale>().unwrap(), Locale::En);

        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, SarthiError::InvalidLocale(ref s) if s == "fr"));
    }

    #[test]
    fn test_locale_default_is_hindi() {
        assert_eq!(Locale::default(), Locale::Hi);
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::Hi).unwrap(), "\"hi\"");
        let en: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(en, Locale::En);
    }

    #[test]
    fn test_role_display_and_serde() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Bot.to_string(), "bot");
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
    }
}
