//! Rule cascade: one generic dispatcher over the locale rule tables.

use sarthi_core::Locale;
use tracing::trace;

use crate::rules::{self, Response, RuleTable, Topic};

/// Outcome of running the cascade over one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Rule group that fired, or [`Topic::Fallback`].
    pub group: Topic,
    /// Topic actually answered. Differs from `group` only for dispatching
    /// groups, where it names the selected branch or [`Topic::Clarify`].
    pub topic: Topic,
    /// Response text. Never empty.
    pub text: &'static str,
}

/// Evaluates a [`RuleTable`] first-match-wins in priority order.
#[derive(Debug, Clone, Copy)]
pub struct RuleCascade {
    table: &'static RuleTable,
}

impl RuleCascade {
    pub fn new(locale: Locale) -> Self {
        Self {
            table: rules::table(locale),
        }
    }

    pub fn locale(&self) -> Locale {
        self.table.locale
    }

    /// Resolve a normalized utterance. Pure; absence of a match yields the
    /// locale fallback menu.
    pub fn resolve(&self, normalized: &str) -> Resolution {
        let haystack = normalized.to_lowercase();

        for rule in &self.table.rules {
            if !rule.when.matches(&haystack) {
                continue;
            }
            let (topic, text) = match &rule.response {
                Response::Text(text) => (rule.topic, *text),
                Response::Dispatch(dispatch) => dispatch.select(&haystack),
            };
            trace!(
                locale = %self.table.locale,
                group = %rule.topic,
                topic = %topic,
                "Rule matched"
            );
            return Resolution {
                group: rule.topic,
                topic,
                text,
            };
        }

        trace!(locale = %self.table.locale, "No rule matched, using fallback");
        Resolution {
            group: Topic::Fallback,
            topic: Topic::Fallback,
            text: self.table.fallback,
        }
    }
}

/// Resolve `normalized` against the rule table for `locale`.
pub fn resolve(locale: Locale, normalized: &str) -> Resolution {
    RuleCascade::new(locale).resolve(normalized)
}

// =============================================================================
// Tests
// =============================================================================
