//! Application settings and export configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::export::ExportError;


/// Fixed size of one grid cell, in source pixel units.
pub const CELL_SIZE: f64 = 30.0;

/// Default long-side pixel count for exported images.
pub const DEFAULT_RESOLUTION: u32 = 512;

/// Default empty border around exported content, in pixels.
pub const DEFAULT_MARGIN: u32 = 10;

/// Default pattern file name.
pub const DEFAULT_PATTERN_FILE: &str = "pattern.txt";

/// Default output file name for raster export.
pub const DEFAULT_EXPORT_FILE: &str = "grid.png";


/// User-adjustable export defaults, persisted in the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    #[serde(default = "default_margin")]
    pub margin: u32,
}


impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            margin: DEFAULT_MARGIN,
        }
    }
}


fn default_resolution() -> u32 {
    DEFAULT_RESOLUTION
}


fn default_margin() -> u32 {
    DEFAULT_MARGIN
}


/// Get the settings file path.
pub fn get_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grid-stencil")
        .join("settings.json")
}


/// Load settings, falling back to defaults when no settings file exists.
pub fn load_settings() -> Result<Settings> {
    let path = get_settings_path();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}


/// Export parameters for a single export call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Target pixel count for the longer side of the output.
    pub resolution: u32,
    /// Empty border added around the rasterized content.
    pub margin: u32,
}


impl ExportConfig {
    /// Resolve the effective config from settings plus CLI overrides.
    pub fn resolve(settings: &Settings, resolution: Option<u32>, margin: Option<u32>) -> Self {
        Self {
            resolution: resolution.unwrap_or(settings.resolution),
            margin: margin.unwrap_or(settings.margin),
        }
    }

    /// Reject configs whose margin leaves no pixel budget for content.
    pub fn validate(&self) -> Result<(), ExportError> {
        if u64::from(self.resolution) <= 2 * u64::from(self.margin) {
            return Err(ExportError::InvalidConfig {
                resolution: self.resolution,
                margin: self.margin,
            });
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(CELL_SIZE, 30.0);
        assert_eq!(DEFAULT_MARGIN, 10);
        assert!(DEFAULT_RESOLUTION > 2 * DEFAULT_MARGIN);
    }

    #[test]
    fn test_get_settings_path() {
        let path = get_settings_path();
        assert!(path.to_string_lossy().contains("grid-stencil"));
        assert!(path.to_string_lossy().contains("settings.json"));
    }

    #[test]
    fn test_resolve_prefers_overrides() {
        let settings = Settings::default();
        let config = ExportConfig::resolve(&settings, Some(100), None);
        assert_eq!(config.resolution, 100);
        assert_eq!(config.margin, DEFAULT_MARGIN);
    }

    #[test]
    fn test_validate_rejects_oversized_margin() {
        let config = ExportConfig {
            resolution: 20,
            margin: 10,
        };
        assert!(matches!(
            config.validate(),
            Err(ExportError::InvalidConfig { .. })
        ));

        let config = ExportConfig {
            resolution: 21,
            margin: 10,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_settings_parse_partial() {
        let settings: Settings = serde_json::from_str(r#"{"resolution": 256}"#).unwrap();
        assert_eq!(settings.resolution, 256);
        assert_eq!(settings.margin, DEFAULT_MARGIN);
    }
}
