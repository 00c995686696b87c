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

//! A per-second FPS readout, the debugging overlay a monitored scene can
//! optionally attach.

/// Interval over which frames are counted before a reading is published.
const READING_INTERVAL_SECS: f32 = 1.0;

/// Counts frames over one-second intervals and keeps the min/max readings.
///
/// The panel is scoped to a monitored scene: it is attached on mount and
/// detached on unmount. A detached panel ignores updates.
#[derive(Debug, Clone, Default)]
pub struct StatsPanel {
    attached: bool,
    frames: u32,
    accumulated_secs: f32,
    fps: Option<u32>,
    min_fps: Option<u32>,
    max_fps: Option<u32>,
    frame_ms: f32,
    readings: u64,
}

impl StatsPanel {
    /// Creates a detached panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts accepting updates.
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            log::debug!("Stats panel attached.");
        }
    }

    /// Stops accepting updates. Published readings remain readable.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!(
                "Stats panel detached after {} readings ({}).",
                self.readings,
                self.summary()
            );
        }
    }

    /// Returns `true` while the panel accepts updates.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Accounts for one rendered frame.
    ///
    /// Returns the new FPS reading when a full interval has elapsed.
    pub fn update(&mut self, delta_seconds: f32) -> Option<u32> {
        if !self.attached || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return None;
        }

        self.frames += 1;
        self.accumulated_secs += delta_seconds;
        self.frame_ms = delta_seconds * 1000.0;

        if self.accumulated_secs < READING_INTERVAL_SECS {
            return None;
        }

        let fps = (self.frames as f32 / self.accumulated_secs).round() as u32;
        self.fps = Some(fps);
        self.min_fps = Some(self.min_fps.map_or(fps, |m| m.min(fps)));
        self.max_fps = Some(self.max_fps.map_or(fps, |m| m.max(fps)));
        self.readings += 1;
        self.frames = 0;
        self.accumulated_secs = 0.0;

        log::trace!("Stats: {}", self.summary());
        Some(fps)
    }

    /// The most recent FPS reading.
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }

    /// The lowest FPS reading seen so far.
    pub fn min_fps(&self) -> Option<u32> {
        self.min_fps
    }

    /// The highest FPS reading seen so far.
    pub fn max_fps(&self) -> Option<u32> {
        self.max_fps
    }

    /// Duration of the last accounted frame, in milliseconds.
    pub fn frame_ms(&self) -> f32 {
        self.frame_ms
    }

    /// Number of readings published.
    pub fn readings(&self) -> u64 {
        self.readings
    }

    /// Panel text, e.g. `"58 FPS (41-60)"`.
    pub fn summary(&self) -> String {
        match (self.fps, self.min_fps, self.max_fps) {
            (Some(fps), Some(min), Some(max)) => format!("{fps} FPS ({min}-{max})"),
            _ => "-- FPS".to_string(),
        }
    }
}
