//! Runtime configuration. Defaults reproduce the shipped experience; a host page
//! may override any field with an inline JSON document:
//!
//! ```html
//! <script id="lock-config" type="application/json">{ "pin_secret": "1234" }</script>
//! ```

use std::fmt;

use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};

use crate::model::Contact;

pub const CONFIG_ELEMENT_ID: &str = "lock-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pin_secret: String,
    pub pin_length: usize,
    pub verify_delay_ms: u32,
    pub error_message_delay_ms: u32,
    pub error_clear_delay_ms: u32,
    pub unlock_reveal_delay_ms: u32,
    pub intro_fade_ms: u32,
    pub scene_start_delay_ms: u32,
    pub scene_fallback_ms: u32,
    pub press_feedback_ms: u32,
    pub panel_velocity_threshold: f64,
    pub sheet_velocity_threshold: f64,
    pub commit_distance_ratio: f64,
    /// Bottom share of the lock screen where a swipe-up may begin.
    pub swipe_up_zone: f64,
    /// Top share of the PIN sheet where a swipe-down may begin.
    pub swipe_down_zone: f64,
    pub intro_video: String,
    pub contacts: Vec<Contact>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        let contact = |name: &str, number: &str, icon: &str, scene: u8| Contact {
            name: name.to_string(),
            number: number.to_string(),
            icon: icon.to_string(),
            video: format!("assets/video/scene{}_video.mp4", scene),
        };
        Self {
            pin_secret: "2830".to_string(),
            pin_length: 4,
            verify_delay_ms: 100,
            error_message_delay_ms: 300,
            error_clear_delay_ms: 1500,
            unlock_reveal_delay_ms: 300,
            intro_fade_ms: 800,
            scene_start_delay_ms: 100,
            scene_fallback_ms: 3000,
            press_feedback_ms: 150,
            panel_velocity_threshold: 0.3,
            sheet_velocity_threshold: 0.5,
            commit_distance_ratio: 0.3,
            swipe_up_zone: 0.4,
            swipe_down_zone: 0.3,
            intro_video: "assets/video/scene1_video.mp4".to_string(),
            contacts: vec![
                contact("Lina", "+1 (555) 013-2210", "👩", 2),
                contact("Maya", "+1 (555) 017-4482", "👧", 3),
                contact("Noor", "+1 (555) 019-7365", "👵", 4),
            ],
            log_level: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config is not valid JSON: {}", msg),
            ConfigError::Invalid(what) => write!(f, "config rejected: {}", what),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pin_length == 0 || self.pin_secret.len() != self.pin_length {
            return Err(ConfigError::Invalid("pin_secret length must equal pin_length"));
        }
        if !self.pin_secret.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid("pin_secret must be digits"));
        }
        if self.panel_velocity_threshold <= 0.0 || self.sheet_velocity_threshold <= 0.0 {
            return Err(ConfigError::Invalid("velocity thresholds must be positive"));
        }
        if !(self.commit_distance_ratio > 0.0 && self.commit_distance_ratio <= 1.0) {
            return Err(ConfigError::Invalid("commit_distance_ratio must be in (0, 1]"));
        }
        let zone = |z: f64| z > 0.0 && z <= 1.0;
        if !zone(self.swipe_up_zone) || !zone(self.swipe_down_zone) {
            return Err(ConfigError::Invalid("swipe zones must be in (0, 1]"));
        }
        if self.contacts.is_empty() {
            return Err(ConfigError::Invalid("at least one contact is required"));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read the inline config document from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("{}; using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.pin_secret, "2830");
        assert_eq!(cfg.contacts.len(), 3);
        assert_eq!(cfg.contacts[0].video, "assets/video/scene2_video.mp4");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = Config::from_json(r#"{ "pin_secret": "1234", "log_level": "debug" }"#)
            .expect("valid config");
        assert_eq!(cfg.pin_secret, "1234");
        assert_eq!(cfg.error_clear_delay_ms, 1500);
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{ "pin_secret": "12a4" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "pin_secret": "123" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "sheet_velocity_threshold": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cfg = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }
}
