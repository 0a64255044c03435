use crate::layout::Breakpoints;
use crate::playback::PlaybackPeriods;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Invalid(String),
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Thumbnail grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub breakpoints: Breakpoints,
    /// Space between columns and below each cell, in pixels
    pub gutter_px: f64,
    /// Fraction of the content height at which the next page is requested
    pub scroll_threshold: f64,
    /// Blur-up transition length for thumbnails
    pub fade_ms: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            gutter_px: 15.0,
            scroll_threshold: 0.8,
            fade_ms: 300,
        }
    }
}

/// Lightbox overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub playback: PlaybackPeriods,
    /// Slides preloaded behind the current one
    pub preload_before: usize,
    /// Slides preloaded ahead of the current one
    pub preload_after: usize,
    /// Scroll the grid so the current slide's cell stays centred
    pub scroll_into_view: bool,
    /// Pixels added to the centred scroll position
    pub scroll_offset: f64,
    /// Mirror the current slide into the location fragment
    pub history: bool,
    /// `gid` written into the fragment markers
    pub gallery_id: u32,
    /// Scale reached by double-click or the zoom button
    pub double_tap_zoom: f64,
    pub max_zoom: f64,
    /// Whether swipe gestures wrap from the last slide to the first
    pub loop_gestures: bool,
    /// Hide the toolbar and caption after this long without input (0 keeps them)
    pub idle_ms: u64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackPeriods::default(),
            preload_before: 3,
            preload_after: 3,
            scroll_into_view: false,
            scroll_offset: 0.0,
            history: true,
            gallery_id: 1,
            double_tap_zoom: 2.0,
            max_zoom: 4.0,
            loop_gestures: false,
            idle_ms: 4000,
        }
    }
}

/// Gallery configuration, loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            lightbox: LightboxConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        debug!(
            "Loaded gallery config ({} breakpoints)",
            config.grid.breakpoints.steps.len()
        );
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let breakpoints = &self.grid.breakpoints;
        if breakpoints.default_columns == 0 || breakpoints.steps.iter().any(|s| s.columns == 0) {
            return Err(ConfigError::Invalid(
                "breakpoint column counts must be at least 1".to_string(),
            ));
        }
        if !(self.grid.gutter_px >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gutter_px must be non-negative, got {}",
                self.grid.gutter_px
            )));
        }
        let threshold = self.grid.scroll_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "scroll_threshold must be in (0, 1], got {threshold}"
            )));
        }
        let playback = &self.lightbox.playback;
        if playback.normal_ms == 0 || playback.fast_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback periods must be greater than zero".to_string(),
            ));
        }
        if !(self.lightbox.max_zoom >= 1.0) || !(self.lightbox.double_tap_zoom >= 1.0) {
            return Err(ConfigError::Invalid(
                "zoom levels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `tracing` level named by `log_level`, defaulting to INFO
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GalleryConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.lightbox.playback.normal_ms, 6000);
        assert_eq!(config.lightbox.playback.fast_ms, 3000);
        assert_eq!(config.grid.breakpoints.default_columns, 8);
        assert_eq!(config.lightbox.idle_ms, 4000);
    }

    #[test]
    fn test_idle_delay_override() {
        let config = GalleryConfig::from_yaml_str("lightbox:\n  idle_ms: 0\n").unwrap();
        assert_eq!(config.lightbox.idle_ms, 0);
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
lightbox:
  scroll_into_view: true
  scroll_offset: -48
  playback:
    fast_ms: 1500
log_level: debug
"#;
        let config = GalleryConfig::from_yaml_str(yaml).unwrap();
        assert!(config.lightbox.scroll_into_view);
        assert_eq!(config.lightbox.scroll_offset, -48.0);
        assert_eq!(config.lightbox.playback.fast_ms, 1500);
        assert_eq!(config.lightbox.playback.normal_ms, 6000);
        assert!(config.lightbox.history);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_rejects_zero_period() {
        let yaml = "lightbox:\n  playback:\n    normal_ms: 0\n";
        assert!(matches!(
            GalleryConfig::from_yaml_str(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let yaml = "grid:\n  scroll_threshold: 1.5\n";
        assert!(matches!(
            GalleryConfig::from_yaml_str(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        assert!(matches!(
            GalleryConfig::from_yaml_str("grid: [unclosed"),
            Err(ConfigError::Serialization(_))
        ));
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let config = GalleryConfig::default();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(GalleryConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
