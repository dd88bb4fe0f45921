use serde::Deserialize;

use crate::error::ConfigError;
use crate::scroll::touch::{DEFAULT_TOUCH_MAX_DURATION_MS, DEFAULT_TOUCH_THRESHOLD};
use crate::scroll::wheel::{DEFAULT_WHEEL_COOLDOWN_MS, DEFAULT_WHEEL_THRESHOLD};
use crate::scroll::HashFormat;

pub const DEFAULT_TRANSITION_MS: u32 = 600;
/// The shell's own default, slightly longer than the hook's.
pub const DEFAULT_SHELL_TRANSITION_MS: u32 = 610;
/// Id of the optional `<script type="application/json">` block in index.html.
pub const OVERRIDES_ELEMENT_ID: &str = "full-page-config";

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub total_sections: usize,
    pub transition_duration_ms: u32,
    pub initial_section: usize,
    pub hash_format: HashFormat,
    pub wheel_threshold: f64,
    /// Standalone wheel cooldown. When the controller drives the wheel arbiter
    /// it uses its own effective duration + 200ms instead.
    pub wheel_cooldown_ms: f64,
    pub touch_threshold: f64,
    pub touch_max_duration_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            total_sections: 0,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            initial_section: 0,
            hash_format: HashFormat::Identifier,
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            wheel_cooldown_ms: DEFAULT_WHEEL_COOLDOWN_MS,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            touch_max_duration_ms: DEFAULT_TOUCH_MAX_DURATION_MS,
        }
    }
}

impl ScrollConfig {
    pub fn new(total_sections: usize) -> Self {
        Self {
            total_sections,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_sections == 0 {
            return Err(ConfigError::NoSections);
        }
        if self.initial_section >= self.total_sections {
            return Err(ConfigError::InitialSectionOutOfRange {
                initial: self.initial_section,
                total: self.total_sections,
            });
        }
        Ok(())
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ms) = overrides.transition_duration_ms {
            self.transition_duration_ms = ms;
        }
        if let Some(format) = overrides.hash_format {
            self.hash_format = format;
        }
        if let Some(threshold) = overrides.wheel_threshold {
            self.wheel_threshold = threshold;
        }
        if let Some(threshold) = overrides.touch_threshold {
            self.touch_threshold = threshold;
        }
        self
    }
}

/// Page-level tweaks read from index.html. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub transition_duration_ms: Option<u32>,
    pub hash_format: Option<HashFormat>,
    pub wheel_threshold: Option<f64>,
    pub touch_threshold: Option<f64>,
}

impl ConfigOverrides {
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the overrides block from the current document, if there is one.
    pub fn from_document() -> Option<Self> {
        let text = web_sys::window()?
            .document()?
            .get_element_by_id(OVERRIDES_ELEMENT_ID)?
            .text_content()?;
        match Self::parse(&text) {
            Ok(overrides) => Some(overrides),
            Err(e) => {
                log::warn!("Ignoring page config: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ScrollConfig::new(5);
        assert_eq!(config.transition_duration_ms, 600);
        assert_eq!(config.initial_section, 0);
        assert_eq!(config.wheel_threshold, 50.0);
        assert_eq!(config.wheel_cooldown_ms, 800.0);
        assert_eq!(config.touch_max_duration_ms, 300.0);
        assert_eq!(config.hash_format, HashFormat::Identifier);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert!(matches!(ScrollConfig::new(0).validate(), Err(ConfigError::NoSections)));
        let config = ScrollConfig {
            initial_section: 5,
            ..ScrollConfig::new(5)
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialSectionOutOfRange { initial: 5, total: 5 })
        ));
    }

    #[test]
    fn deserializes_partial_config() {
        let config: ScrollConfig =
            serde_json::from_str(r#"{"total_sections": 3, "hash_format": "index"}"#).unwrap();
        assert_eq!(config.total_sections, 3);
        assert_eq!(config.hash_format, HashFormat::Index);
        assert_eq!(config.transition_duration_ms, DEFAULT_TRANSITION_MS);
    }

    #[test]
    fn overrides_apply_only_what_they_set() {
        let overrides =
            ConfigOverrides::parse(r#"{"transition_duration_ms": 900, "touch_threshold": 30}"#).unwrap();
        let config = ScrollConfig::new(5).with_overrides(&overrides);
        assert_eq!(config.transition_duration_ms, 900);
        assert_eq!(config.touch_threshold, 30.0);
        assert_eq!(config.wheel_threshold, 50.0);
        assert_eq!(config.hash_format, HashFormat::Identifier);
    }

    #[test]
    fn malformed_overrides_are_an_error() {
        assert!(matches!(ConfigOverrides::parse("{not json"), Err(ConfigError::Parse(_))));
    }
}
