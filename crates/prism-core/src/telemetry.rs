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

//! Events emitted by the quality controller.

use crate::quality::QualityLevel;
use serde::{Deserialize, Serialize};

/// A single degradation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityChange {
    /// Level before the step.
    pub from: QualityLevel,
    /// Level after the step. Always lower than `from`.
    pub to: QualityLevel,
    /// The averaged FPS that triggered the step.
    pub average_fps: f32,
}

impl QualityChange {
    /// Human-readable summary used by log sinks.
    pub fn describe(&self) -> String {
        format!(
            "{} -> {} (avg {:.1} FPS)",
            self.from, self.to, self.average_fps
        )
    }
}
