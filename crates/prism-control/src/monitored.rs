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

//! A scene wrapped with performance monitoring.

use crate::monitor::PerformanceMonitor;
use crate::selector::AdaptiveScene;
use prism_core::{
    ConfigResult, MonitorConfig, QualityChange, QualityLevel, QualityScene, SceneVariant,
};

/// Owns a [`PerformanceMonitor`] and the scene it drives.
///
/// Every frame runs the monitor first, then renders the scene at the
/// resulting quality, so a step taken on frame `n` is visible on frame `n`.
#[derive(Debug)]
pub struct MonitoredScene<S: QualityScene> {
    monitor: PerformanceMonitor,
    scene: S,
}

impl<S: QualityScene> MonitoredScene<S> {
    /// Wraps `scene` with a monitor built from `config`.
    pub fn new(config: MonitorConfig, scene: S) -> ConfigResult<Self> {
        Ok(Self {
            monitor: PerformanceMonitor::new(config)?,
            scene,
        })
    }

    /// Runs the monitor and renders one frame.
    ///
    /// Does nothing once unmounted.
    pub fn frame(&mut self, delta_seconds: f32) -> Option<QualityChange> {
        if !self.monitor.is_mounted() {
            return None;
        }
        let change = self.monitor.on_frame(delta_seconds);
        self.scene.render(self.monitor.level(), delta_seconds);
        change
    }

    /// Unmounts the monitor. The scene is no longer rendered.
    pub fn unmount(&mut self) {
        self.monitor.unmount();
    }

    /// The current quality level.
    pub fn quality(&self) -> QualityLevel {
        self.monitor.level()
    }

    /// The monitor.
    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    /// Mutable access to the monitor, e.g. to register a sink or subscribe.
    pub fn monitor_mut(&mut self) -> &mut PerformanceMonitor {
        &mut self.monitor
    }

    /// The wrapped scene.
    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable access to the wrapped scene.
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}

impl<V: SceneVariant> MonitoredScene<AdaptiveScene<V>> {
    /// Builds a monitored scene that swaps between three variants.
    pub fn adaptive(config: MonitorConfig, high: V, medium: V, low: V) -> ConfigResult<Self> {
        Self::new(config, AdaptiveScene::new(high, medium, low))
    }
}
