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

//! # Prism Core
//!
//! Foundational crate containing the quality model, configuration surface,
//! scene contracts, and error types shared by the adaptive-quality crates.
//!
//! `prism-core` defines the "what": `prism-control` drives the sampling and
//! degradation state machine, and `prism-telemetry` reports on it.

#![warn(missing_docs)]

pub mod clock;
pub mod config;
pub mod error;
pub mod quality;
pub mod scene;
pub mod telemetry;

pub use clock::FrameClock;
pub use config::{FpsSampling, MonitorConfig};
pub use error::{ConfigError, ConfigResult};
pub use quality::{QualityLevel, SceneDetail};
pub use scene::{QualityScene, SceneVariant};
pub use telemetry::QualityChange;
