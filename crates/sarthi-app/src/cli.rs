//! CLI argument definitions for the KUSUM Sarthi terminal client.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use sarthi_core::{Locale, SarthiConfig};
use std::path::PathBuf;

/// KUSUM Sarthi: Hindi/English answers about the PM-KUSUM solar scheme.
#[derive(Parser, Debug)]
#[command(name = "sarthi", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Conversation language at start (hi or en).
    #[arg(short = 'L', long = "locale")]
    pub locale: Option<Locale>,

    /// Start with spoken replies muted.
    #[arg(short = 'm', long = "muted")]
    pub muted: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// File with one voice transcript per line, replayed by `/voice`.
    #[arg(long = "voice-script")]
    pub voice_script: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SARTHI_CONFIG env var > platform default (~/.sarthi/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SARTHI_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the starting locale.
    ///
    /// Priority: --locale flag > SARTHI_LOCALE env var > config file value.
    pub fn resolve_locale(&self, config_locale: Locale) -> Locale {
        if let Some(locale) = self.locale {
            return locale;
        }
        if let Ok(val) = std::env::var("SARTHI_LOCALE") {
            match val.parse::<Locale>() {
                Ok(locale) => return locale,
                Err(e) => tracing::warn!(error = %e, "Ignoring SARTHI_LOCALE"),
            }
        }
        config_locale
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Apply every override to a loaded configuration.
    pub fn apply(&self, config: &mut SarthiConfig) {
        config.general.locale = self.resolve_locale(config.general.locale);
        config.general.log_level = self.resolve_log_level(&config.general.log_level);
        if self.muted {
            config.speech.muted = true;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".sarthi").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".sarthi").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::parse_from([
            "sarthi",
            "--config",
            "/tmp/sarthi.toml",
            "--locale",
            "english",
            "--muted",
            "--log-level",
            "debug",
            "--voice-script",
            "voice.txt",
        ]);
        assert_eq!(
            args.resolve_config_path(),
            PathBuf::from("/tmp/sarthi.toml")
        );
        assert_eq!(args.locale, Some(Locale::En));
        assert!(args.muted);
        assert_eq!(args.resolve_log_level("info"), "debug");
        assert_eq!(args.voice_script, Some(PathBuf::from("voice.txt")));
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let parsed = CliArgs::try_parse_from(["sarthi", "--locale", "fr"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let args = CliArgs::parse_from(["sarthi", "-L", "hi", "-m", "-l", "warn"]);
        let mut config = SarthiConfig::default();
        config.general.locale = Locale::En;
        args.apply(&mut config);
        assert_eq!(config.general.locale, Locale::Hi);
        assert_eq!(config.general.log_level, "warn");
        assert!(config.speech.muted);
    }

    #[test]
    fn test_no_flags_keeps_config_values() {
        let args = CliArgs::parse_from(["sarthi"]);
        assert_eq!(args.resolve_log_level("error"), "error");
        let mut config = SarthiConfig::default();
        config.speech.muted = true;
        args.apply(&mut config);
        assert!(config.speech.muted);
    }
}
