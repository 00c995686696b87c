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

//! Error types for monitor construction and configuration loading.

use crate::config::MAX_WINDOW_SIZE;
use thiserror::Error;

/// A specialized `Result` type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An error raised while building or loading a monitor configuration.
///
/// These are only ever returned at construction time. Nothing on the
/// per-frame path produces an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The FPS threshold was zero, negative, or not a finite number.
    #[error("invalid FPS threshold {0}: must be a positive, finite number")]
    InvalidThreshold(f32),
    /// The rolling window size was zero or above the supported maximum.
    #[error(
        "invalid window size {0}: must hold between 1 and {max} samples",
        max = MAX_WINDOW_SIZE
    )]
    InvalidWindowSize(usize),
    /// The configuration file could not be read or written.
    #[error("failed to access configuration file '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration document could not be parsed or serialized.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidThreshold(0.0);
        assert_eq!(
            err.to_string(),
            "invalid FPS threshold 0: must be a positive, finite number"
        );

        let err = ConfigError::InvalidWindowSize(0);
        assert_eq!(
            err.to_string(),
            "invalid window size 0: must hold between 1 and 4096 samples"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
