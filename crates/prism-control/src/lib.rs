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

//! # Prism Control
//!
//! The adaptive quality loop:
//!
//! 1. [`FrameSampler`] turns frame deltas into a rolling FPS estimate.
//! 2. [`QualityController`] steps `High -> Medium -> Low` when the estimate
//!    falls below the configured floor, and never back up.
//! 3. [`AdaptiveSceneSelector`] picks the scene variant for the current level.
//!
//! [`PerformanceMonitor`] ties the first two to a mounted scene's lifetime and
//! [`MonitoredScene`] adds the third.

#![warn(missing_docs)]

pub mod controller;
pub mod monitor;
pub mod monitored;
pub mod sampler;
pub mod selector;
pub mod window;

pub use controller::{IssueHandler, QualityController};
pub use monitor::PerformanceMonitor;
pub use monitored::MonitoredScene;
pub use sampler::FrameSampler;
pub use selector::{AdaptiveScene, AdaptiveSceneSelector};
pub use window::SampleWindow;
