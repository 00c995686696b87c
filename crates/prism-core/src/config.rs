// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration surface for the performance monitor.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default FPS floor below which quality is stepped down.
pub const DEFAULT_THRESHOLD_FPS: f32 = 30.0;
/// Default number of frames in the rolling window.
pub const DEFAULT_WINDOW_SIZE: usize = 10;
/// Largest rolling window accepted, a little over a minute at 60 FPS.
pub const MAX_WINDOW_SIZE: usize = 4096;

/// How the rolling window turns frame deltas into an FPS estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FpsSampling {
    /// Mean of the per-frame `round(1 / delta)` values.
    #[default]
    PerFrame,
    /// Frames in the window divided by the wall-clock time they spanned.
    ///
    /// Less sensitive to a single jittery frame than `PerFrame`.
    WallClock,
}

/// Construction-time configuration for a performance monitor.
///
/// Immutable once a monitor is built from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Average FPS below which a degradation step is triggered.
    pub threshold_fps: f32,
    /// Number of samples averaged before performance is judged.
    pub window_size: usize,
    /// Attach a stats panel that reports per-second FPS.
    pub show_stats: bool,
    /// FPS estimation mode.
    pub sampling: FpsSampling,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            threshold_fps: DEFAULT_THRESHOLD_FPS,
            window_size: DEFAULT_WINDOW_SIZE,
            show_stats: false,
            sampling: FpsSampling::default(),
        }
    }
}

impl MonitorConfig {
    /// Returns a default configuration with the given threshold.
    pub fn with_threshold(threshold_fps: f32) -> Self {
        Self {
            threshold_fps,
            ..Self::default()
        }
    }

    /// Checks every field, returning the first violation found.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_threshold(self.threshold_fps)?;
        validate_window_size(self.window_size)
    }

    /// Parses and validates a configuration from a JSON string.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded monitor configuration from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Rejects thresholds that are zero, negative, or not finite.
pub fn validate_threshold(threshold_fps: f32) -> ConfigResult<()> {
    if !threshold_fps.is_finite() || threshold_fps <= 0.0 {
        log::error!("Rejected FPS threshold {threshold_fps}");
        return Err(ConfigError::InvalidThreshold(threshold_fps));
    }
    Ok(())
}

/// Rejects an empty rolling window or one larger than [`MAX_WINDOW_SIZE`].
pub fn validate_window_size(window_size: usize) -> ConfigResult<()> {
    if window_size == 0 || window_size > MAX_WINDOW_SIZE {
        log::error!("Rejected sample window of {window_size} frames (max {MAX_WINDOW_SIZE})");
        return Err(ConfigError::InvalidWindowSize(window_size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.threshold_fps, 30.0);
        assert_eq!(config.window_size, 10);
        assert!(!config.show_stats);
        assert_eq!(config.sampling, FpsSampling::PerFrame);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        for threshold in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let config = MonitorConfig::with_threshold(threshold);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_rejects_empty_window() {
        let config = MonitorConfig {
            window_size: 0,
            ..MonitorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn test_rejects_oversized_window() {
        assert!(validate_window_size(MAX_WINDOW_SIZE).is_ok());
        assert!(matches!(
            validate_window_size(MAX_WINDOW_SIZE + 1),
            Err(ConfigError::InvalidWindowSize(n)) if n == MAX_WINDOW_SIZE + 1
        ));

        let result = MonitorConfig::from_json(r#"{ "window_size": 18446744073709551615 }"#);
        assert!(matches!(result, Err(ConfigError::InvalidWindowSize(usize::MAX))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MonitorConfig::from_json(r#"{ "threshold_fps": 25 }"#).unwrap();
        assert_eq!(config.threshold_fps, 25.0);
        assert_eq!(config.window_size, 10);

        let config = MonitorConfig::from_json(r#"{ "sampling": "wall_clock" }"#).unwrap();
        assert_eq!(config.sampling, FpsSampling::WallClock);
    }

    #[test]
    fn test_json_validation_runs() {
        let result = MonitorConfig::from_json(r#"{ "window_size": 0 }"#);
        assert!(matches!(result, Err(ConfigError::InvalidWindowSize(0))));

        let result = MonitorConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.json");
        let config = MonitorConfig {
            threshold_fps: 25.0,
            window_size: 20,
            show_stats: true,
            sampling: FpsSampling::WallClock,
        };

        config.to_file(&path).unwrap();
        let loaded = MonitorConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MonitorConfig::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
