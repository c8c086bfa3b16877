//! Input normalization.
//!
//! Keyword tables enumerate spelling variants explicitly, so normalization is
//! deliberately shallow: whitespace and trailing sentence punctuation only.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?!.]+$").expect("valid punctuation regex"));

/// Collapse whitespace runs, strip trailing `?`, `!` and `.`, trim and lowercase.
///
/// Total: whitespace-only input yields an empty string, which callers treat
/// as "nothing to submit".
pub fn normalize(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    TRAILING_PUNCTUATION
        .replace(&collapsed, "")
        .trim()
        .to_lowercase()
}

/// One user submission: the text as entered and its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Input with surrounding whitespace removed; stored in the transcript.
    pub raw: String,
    /// Output of [`normalize`]; fed to the cascade.
    pub normalized: String,
}

impl Utterance {
    /// Returns `None` when the input normalizes to nothing.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }
        Some(Self {
            raw: input.trim().to_string(),
            normalized,
        })
    }

    /// Character count of the normalized text.
    pub fn len(&self) -> usize {
        self.normalized.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  what   is\tpm\n kusum  "), "what is pm kusum");
    }

    #[test]
    fn test_normalize_strips_trailing_punctuation() {
        assert_eq!(normalize("subsidy kitni hai???"), "subsidy kitni hai");
        assert_eq!(normalize("benefits?!."), "benefits");
        assert_eq!(normalize("लाभ क्या है?"), "लाभ क्या है");
    }

    #[test]
    fn test_normalize_keeps_internal_punctuation() {
        assert_eq!(normalize("pm-kusum c. scheme?"), "pm-kusum c. scheme");
        assert_eq!(normalize("dos and don'ts"), "dos and don'ts");
    }

    #[test]
    fn test_normalize_trims_space_before_punctuation() {
        assert_eq!(normalize("how much land ?"), "how much land");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("PM KUSUM Yojna?"), "pm kusum yojna");
        assert_eq!(normalize("कितनी ज़मीन"), "कितनी ज़मीन");
    }

    #[test]
    fn test_normalize_empty_and_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("?!"), "");
    }

    #[test]
    fn test_utterance_parse_rejects_blank() {
        assert!(Utterance::parse("").is_none());
        assert!(Utterance::parse("    ").is_none());
        assert!(Utterance::parse(" ... ").is_none());
    }

    #[test]
    fn test_utterance_keeps_trimmed_raw() {
        let u = Utterance::parse("  What   documents?  ").unwrap();
        assert_eq!(u.raw, "What   documents?");
        assert_eq!(u.normalized, "what documents");
        assert_eq!(u.len(), 14);
        assert!(!u.is_empty());
    }

    #[test]
    fn test_utterance_len_counts_chars() {
        let u = Utterance::parse("लाभ").unwrap();
        assert_eq!(u.len(), 3);
    }
}
