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

//! Contracts between the quality controller and the scenes it drives.

use crate::quality::{QualityLevel, SceneDetail};

/// One fixed level-of-detail implementation of a scene.
///
/// An adaptive scene owns three of these (high, medium, low) and mounts
/// whichever matches the current quality level. Each variant is expected to
/// render a self-consistent level of detail.
pub trait SceneVariant {
    /// A short name used in logs.
    fn label(&self) -> &str;

    /// The level of detail this variant renders at.
    fn detail(&self) -> SceneDetail;

    /// Renders one frame.
    fn render(&mut self, delta_seconds: f32);
}

/// A scene that adapts itself to the quality level it is handed each frame.
pub trait QualityScene {
    /// Renders one frame at `quality`.
    fn render(&mut self, quality: QualityLevel, delta_seconds: f32);
}

impl<S: QualityScene + ?Sized> QualityScene for Box<S> {
    fn render(&mut self, quality: QualityLevel, delta_seconds: f32) {
        (**self).render(quality, delta_seconds);
    }
}

impl<V: SceneVariant + ?Sized> SceneVariant for Box<V> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn detail(&self) -> SceneDetail {
        (**self).detail()
    }

    fn render(&mut self, delta_seconds: f32) {
        (**self).render(delta_seconds);
    }
}
