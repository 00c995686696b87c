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

//! Discrete quality tiers and the level of detail each one implies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete quality tier controlling rendered scene complexity.
///
/// Variants are declared from lowest to highest so the derived ordering gives
/// `High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// Minimum detail. Terminal state of the degradation chain.
    Low,
    /// Reduced detail.
    Medium,
    /// Full detail. Every mounted scene starts here.
    #[default]
    High,
}

impl QualityLevel {
    /// All levels, from highest to lowest.
    pub const ALL: [QualityLevel; 3] = [
        QualityLevel::High,
        QualityLevel::Medium,
        QualityLevel::Low,
    ];

    /// Returns the next lower level, or `None` at `Low`.
    pub fn next_lower(self) -> Option<QualityLevel> {
        match self {
            QualityLevel::High => Some(QualityLevel::Medium),
            QualityLevel::Medium => Some(QualityLevel::Low),
            QualityLevel::Low => None,
        }
    }

    /// Returns `true` if no lower level exists.
    pub fn is_lowest(self) -> bool {
        self == QualityLevel::Low
    }

    /// Lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::High => "high",
            QualityLevel::Medium => "medium",
            QualityLevel::Low => "low",
        }
    }

    /// The default level of detail for this tier.
    pub fn detail(self) -> SceneDetail {
        SceneDetail::for_level(self)
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level-of-detail parameters a scene variant is expected to honor.
///
/// | Level | Subdivisions | Particles | Max pixel ratio | Shadows |
/// |---|---|---|---|---|
/// | High | 4 | 200 | 2.0 | yes |
/// | Medium | 2 | 120 | 1.5 | yes |
/// | Low | 1 | 80 | 1.0 | no |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneDetail {
    /// Subdivision depth for procedural geometry (e.g. icosphere detail).
    pub geometry_subdivisions: u32,
    /// Number of particles in decorative particle fields.
    pub particle_count: u32,
    /// Upper bound for the device pixel ratio used by the canvas.
    pub max_pixel_ratio: f32,
    /// Whether shadow casting is enabled.
    pub shadows: bool,
}

impl SceneDetail {
    /// Returns the default detail preset for `level`.
    pub fn for_level(level: QualityLevel) -> Self {
        match level {
            QualityLevel::High => Self {
                geometry_subdivisions: 4,
                particle_count: 200,
                max_pixel_ratio: 2.0,
                shadows: true,
            },
            QualityLevel::Medium => Self {
                geometry_subdivisions: 2,
                particle_count: 120,
                max_pixel_ratio: 1.5,
                shadows: true,
            },
            QualityLevel::Low => Self {
                geometry_subdivisions: 1,
                particle_count: 80,
                max_pixel_ratio: 1.0,
                shadows: false,
            },
        }
    }
}

impl Default for SceneDetail {
    fn default() -> Self {
        Self::for_level(QualityLevel::High)
    }
}
