use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SarthiError};
use crate::types::Locale;

/// Top-level configuration for KUSUM Sarthi.
///
/// Loaded from `~/.sarthi/config.toml` by default. Every section falls back
/// to its defaults when missing from the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SarthiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

impl SarthiConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SarthiConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SarthiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Conversation language at session start.
    pub locale: Locale,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            locale: Locale::Hi,
        }
    }
}

/// Spoken replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether replies are spoken at all.
    pub enabled: bool,
    /// Start sessions muted.
    pub muted: bool,
    /// Speaking rate multiplier.
    pub rate: f32,
    /// Voice pitch multiplier.
    pub pitch: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            muted: false,
            rate: 0.95,
            pitch: 1.0,
        }
    }
}

/// Voice input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether voice capture may be started.
    pub enabled: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default_values() {
        let config = SarthiConfig::default();

        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.locale, Locale::Hi);

        assert!(config.speech.enabled);
        assert!(!config.speech.muted);
        assert!((config.speech.rate - 0.95).abs() < f32::EPSILON);
        assert!((config.speech.pitch - 1.0).abs() < f32::EPSILON);

        assert!(config.voice.enabled);
    }

    #[test]
    fn test_config_load_partial_toml() {
        let content = r#"
[general]
locale = "en"

[speech]
muted = true
"#;
        let file = create_temp_config(content);
        let config = SarthiConfig::load(file.path()).unwrap();

        assert_eq!(config.general.locale, Locale::En);
        assert_eq!(config.general.log_level, "info");
        assert!(config.speech.muted);
        assert!(config.speech.enabled);
        assert!(config.voice.enabled);
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = SarthiConfig::load(file.path()).unwrap();
        assert_eq!(config.general.locale, Locale::Hi);
        assert!(!config.speech.muted);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = SarthiConfig::load(file.path());
        assert!(matches!(result, Err(SarthiError::Config(_))));
    }

    #[test]
    fn test_config_load_unknown_locale_fails() {
        let file = create_temp_config("[general]\nlocale = \"fr\"\n");
        assert!(SarthiConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_config_load_or_default_missing_file() {
        let config = SarthiConfig::load_or_default(Path::new("/does/not/exist/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.locale, Locale::Hi);
    }

    #[test]
    fn test_config_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("config.toml");

        let mut config = SarthiConfig::default();
        config.general.locale = Locale::En;
        config.speech.rate = 1.1;
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = SarthiConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.locale, Locale::En);
        assert!((reloaded.speech.rate - 1.1).abs() < f32::EPSILON);
    }
}
