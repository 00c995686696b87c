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

//! Per-frame performance monitor.
//!
//! Couples a [`FrameSampler`] to a [`QualityController`] and scopes both to
//! the lifetime of a mounted scene. Each quality level is judged on a full
//! window of its own frames: the window is cleared after every step.

use crate::controller::QualityController;
use crate::sampler::FrameSampler;
use crossbeam_channel::Receiver;
use prism_core::{ConfigResult, MonitorConfig, QualityChange, QualityLevel};
use prism_telemetry::{PerformanceLog, StatsPanel};

/// Drives quality degradation from the render loop.
#[derive(Debug)]
pub struct PerformanceMonitor {
    config: MonitorConfig,
    sampler: FrameSampler,
    controller: QualityController,
    stats: Option<StatsPanel>,
    history: PerformanceLog,
    frame_index: u64,
    mounted: bool,
}

impl PerformanceMonitor {
    /// Validates `config` and mounts a monitor at `High` quality.
    pub fn new(config: MonitorConfig) -> ConfigResult<Self> {
        config.validate()?;
        let sampler = FrameSampler::from_config(&config)?;
        let controller = QualityController::new(config.threshold_fps)?;

        let stats = config.show_stats.then(|| {
            let mut panel = StatsPanel::new();
            panel.attach();
            panel
        });

        log::debug!(
            "PerformanceMonitor mounted (threshold={:.1} FPS, window={}, sampling={:?}).",
            config.threshold_fps,
            config.window_size,
            config.sampling
        );

        Ok(Self {
            config,
            sampler,
            controller,
            stats,
            history: PerformanceLog::new(),
            frame_index: 0,
            mounted: true,
        })
    }

    /// Registers the notification sink invoked once per degradation step.
    pub fn with_issue_handler(mut self, handler: impl FnMut(&QualityChange) + 'static) -> Self {
        self.controller.set_issue_handler(handler);
        self
    }

    /// Registers the notification sink, replacing any previous one.
    pub fn set_issue_handler(&mut self, handler: impl FnMut(&QualityChange) + 'static) {
        self.controller.set_issue_handler(handler);
    }

    /// Returns a channel that receives every new quality level.
    ///
    /// The channel disconnects when the monitor is unmounted.
    pub fn subscribe(&mut self) -> Receiver<QualityLevel> {
        self.controller.subscribe()
    }

    /// Accounts for one rendered frame.
    ///
    /// Returns the degradation step taken on this frame, if any. Does nothing
    /// once unmounted.
    pub fn on_frame(&mut self, delta_seconds: f32) -> Option<QualityChange> {
        if !self.mounted {
            return None;
        }
        self.frame_index += 1;

        if let Some(stats) = self.stats.as_mut() {
            stats.update(delta_seconds);
        }

        let skipped_before = self.sampler.skipped_frames();
        self.sampler.record_frame(delta_seconds);
        if self.sampler.skipped_frames() != skipped_before {
            return None;
        }

        let average = self.sampler.average_fps()?;
        log::trace!("PerformanceMonitor: frame {} avg {average:.1} FPS", self.frame_index);

        let change = self.controller.on_sample(average)?;
        self.sampler.reset();
        self.history.record(self.frame_index, change);
        Some(change)
    }

    /// Stops sampling and releases every subscription.
    ///
    /// After this call `on_frame` is a no-op, the notification sink is
    /// dropped, subscriber channels disconnect, and the stats panel detaches.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.controller.release();
        if let Some(stats) = self.stats.as_mut() {
            stats.detach();
        }
        log::debug!(
            "PerformanceMonitor unmounted after {} frames at {} quality.",
            self.frame_index,
            self.controller.level()
        );
    }

    /// Returns `true` until [`unmount`](Self::unmount) is called.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The current quality level.
    pub fn level(&self) -> QualityLevel {
        self.controller.level()
    }

    /// Rolling FPS estimate for the current check cycle.
    pub fn average_fps(&self) -> Option<f32> {
        self.sampler.average_fps()
    }

    /// The configuration this monitor was built from.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The frame sampler.
    pub fn sampler(&self) -> &FrameSampler {
        &self.sampler
    }

    /// The quality controller.
    pub fn controller(&self) -> &QualityController {
        &self.controller
    }

    /// The stats panel, when `show_stats` is enabled.
    pub fn stats(&self) -> Option<&StatsPanel> {
        self.stats.as_ref()
    }

    /// Every degradation step taken so far.
    pub fn history(&self) -> &PerformanceLog {
        &self.history
    }

    /// Frames accounted for since mount.
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }
}

impl Drop for PerformanceMonitor {
    fn drop(&mut self) {
        self.unmount();
    }
}
