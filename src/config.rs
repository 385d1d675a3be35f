//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working configuration. CLI flags are applied on top by the binary.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Which active-section strategies are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingMode {
    /// Resolve the section under the viewport center.
    HitTest,
    /// Only toggle the scrolled nav chrome past a row threshold.
    Threshold,
    /// Both strategies side by side.
    #[default]
    Both,
}

impl TrackingMode {
    pub fn hit_test(self) -> bool {
        matches!(self, Self::HitTest | Self::Both)
    }

    pub fn threshold(self) -> bool {
        matches!(self, Self::Threshold | Self::Both)
    }
}

impl std::str::FromStr for TrackingMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit-test" | "hittest" => Ok(Self::HitTest),
            "threshold" => Ok(Self::Threshold),
            "both" => Ok(Self::Both),
            other => Err(FolioError::InvalidConfig(format!(
                "unknown tracking mode `{other}`; expected hit-test|threshold|both"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tracking: TrackingMode,
    /// Rows of fixed nav chrome the scroll target is offset by.
    pub nav_offset: u16,
    /// Scroll rows past which the nav switches to its scrolled style.
    pub scrolled_threshold: u16,
    pub typing_tick_ms: u64,
    pub typing_hold_ms: u64,
    pub frame_interval_ms: u64,
    /// Below this width the nav collapses into a menu toggle.
    pub compact_width: u16,
    pub cursor_trail: bool,
    /// Fraction of the remaining distance the ring covers per frame.
    pub cursor_ease: f32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracking: TrackingMode::Both,
            nav_offset: 3,
            scrolled_threshold: 2,
            typing_tick_ms: 100,
            typing_hold_ms: 2000,
            frame_interval_ms: 16,
            compact_width: 80,
            cursor_trail: true,
            cursor_ease: 0.35,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.typing_tick_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "typing_tick_ms must be greater than zero".into(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(FolioError::InvalidConfig(
                "frame_interval_ms must be greater than zero".into(),
            ));
        }
        if !(self.cursor_ease > 0.0 && self.cursor_ease <= 1.0) {
            return Err(FolioError::InvalidConfig(format!(
                "cursor_ease must be in (0, 1], got {}",
                self.cursor_ease
            )));
        }
        crate::logging::normalize_level(&self.log_level)
            .map_err(|err| FolioError::InvalidConfig(err.to_string()))?;
        Ok(())
    }

    pub fn typing_tick(&self) -> Duration {
        Duration::from_millis(self.typing_tick_ms)
    }

    pub fn typing_hold(&self) -> Duration {
        Duration::from_millis(self.typing_hold_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.typing_tick(), Duration::from_millis(100));
        assert_eq!(config.typing_hold(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_override() {
        let config =
            Config::from_json_str(r#"{"tracking": "hit-test", "nav_offset": 5}"#).unwrap();
        assert_eq!(config.tracking, TrackingMode::HitTest);
        assert_eq!(config.nav_offset, 5);
        assert_eq!(config.scrolled_threshold, 2);
    }

    #[test]
    fn test_rejects_zero_tick() {
        let err = Config::from_json_str(r#"{"typing_tick_ms": 0}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_ease_and_level() {
        assert!(Config::from_json_str(r#"{"cursor_ease": 0.0}"#).is_err());
        assert!(Config::from_json_str(r#"{"cursor_ease": 1.5}"#).is_err());
        assert!(Config::from_json_str(r#"{"log_level": "chatty"}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"compact_width": 100, "cursor_trail": false}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.compact_width, 100);
        assert!(!config.cursor_trail);
    }

    #[test]
    fn test_tracking_mode_parse() {
        assert_eq!("hit-test".parse::<TrackingMode>().unwrap(), TrackingMode::HitTest);
        assert_eq!("Threshold".parse::<TrackingMode>().unwrap(), TrackingMode::Threshold);
        assert!("sometimes".parse::<TrackingMode>().is_err());

        assert!(TrackingMode::Both.hit_test() && TrackingMode::Both.threshold());
        assert!(!TrackingMode::Threshold.hit_test());
        assert!(!TrackingMode::HitTest.threshold());
    }
}
