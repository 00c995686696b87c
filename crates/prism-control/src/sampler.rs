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

//! Converts per-frame deltas into a rolling FPS estimate.

use crate::window::SampleWindow;
use prism_core::config::validate_window_size;
use prism_core::{ConfigResult, FpsSampling, MonitorConfig};

/// One rendered frame as seen by the sampler.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FrameSample {
    /// `round(1 / delta)`.
    fps: u32,
    /// The raw delta, kept for wall-clock averaging.
    delta_seconds: f32,
}

/// Rolling FPS estimator fed once per rendered frame.
///
/// No estimate is produced until the window is full, so a cold start is
/// never judged on a handful of frames.
#[derive(Debug, Clone)]
pub struct FrameSampler {
    window: SampleWindow<FrameSample>,
    sampling: FpsSampling,
    skipped: u64,
}

impl FrameSampler {
    /// Creates a per-frame sampler averaging over `window_size` frames.
    pub fn new(window_size: usize) -> ConfigResult<Self> {
        Self::with_sampling(window_size, FpsSampling::PerFrame)
    }

    /// Creates a sampler with an explicit estimation mode.
    pub fn with_sampling(window_size: usize, sampling: FpsSampling) -> ConfigResult<Self> {
        validate_window_size(window_size)?;
        Ok(Self {
            window: SampleWindow::with_capacity(window_size),
            sampling,
            skipped: 0,
        })
    }

    /// Creates a sampler from the window and sampling fields of `config`.
    pub fn from_config(config: &MonitorConfig) -> ConfigResult<Self> {
        Self::with_sampling(config.window_size, config.sampling)
    }

    /// Records one frame.
    ///
    /// Zero, negative, and non-finite deltas are skipped without touching
    /// the window.
    pub fn record_frame(&mut self, delta_seconds: f32) {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            self.skipped += 1;
            log::trace!("FrameSampler: skipped degenerate delta {delta_seconds}");
            return;
        }

        // Saturates for sub-nanosecond deltas.
        let fps = (1.0 / delta_seconds).round() as u32;
        self.window.push(FrameSample { fps, delta_seconds });
    }

    /// Mean FPS over the window, or `None` until the window is full.
    pub fn average_fps(&self) -> Option<f32> {
        if !self.window.is_full() {
            return None;
        }

        let count = self.window.count() as f32;
        match self.sampling {
            FpsSampling::PerFrame => {
                let sum: f32 = self.window.iter().map(|s| s.fps as f32).sum();
                Some(sum / count)
            }
            FpsSampling::WallClock => {
                let elapsed: f32 = self.window.iter().map(|s| s.delta_seconds).sum();
                (elapsed > 0.0).then(|| count / elapsed)
            }
        }
    }

    /// Starts a fresh window. Used after a degradation step so the new level
    /// is judged on its own frames.
    pub fn reset(&mut self) {
        self.window.clear();
    }

    /// Returns `true` once `average_fps` yields a value.
    pub fn is_ready(&self) -> bool {
        self.window.is_full()
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.window.count()
    }

    /// Returns `true` if no sample is held.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Number of samples required for an estimate.
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// The estimation mode.
    pub fn sampling(&self) -> FpsSampling {
        self.sampling
    }

    /// Frames rejected as degenerate since creation.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped
    }

    /// FPS of the most recent recorded frame.
    pub fn latest_fps(&self) -> Option<u32> {
        self.window.latest().map(|s| s.fps)
    }

    /// Lowest per-frame FPS in the window.
    pub fn min_fps(&self) -> Option<u32> {
        self.window.iter().map(|s| s.fps).min()
    }

    /// Highest per-frame FPS in the window.
    pub fn max_fps(&self) -> Option<u32> {
        self.window.iter().map(|s| s.fps).max()
    }

    /// Per-frame FPS values in arrival order.
    pub fn samples(&self) -> Vec<u32> {
        self.window.iter().map(|s| s.fps).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prism_core::ConfigError;

    fn feed(sampler: &mut FrameSampler, fps: &[u32]) {
        for &f in fps {
            sampler.record_frame(1.0 / f as f32);
        }
    }

    #[test]
    fn test_rejects_empty_window() {
        assert!(matches!(
            FrameSampler::new(0),
            Err(ConfigError::InvalidWindowSize(0))
        ));
    }

    #[test]
    fn test_rejects_oversized_window() {
        use prism_core::config::MAX_WINDOW_SIZE;

        let sampler = FrameSampler::new(MAX_WINDOW_SIZE).unwrap();
        assert_eq!(sampler.window_size(), MAX_WINDOW_SIZE);
        assert!(matches!(
            FrameSampler::new(usize::MAX),
            Err(ConfigError::InvalidWindowSize(usize::MAX))
        ));
    }

    #[test]
    fn test_fps_is_rounded_reciprocal() {
        let mut sampler = FrameSampler::new(10).unwrap();
        sampler.record_frame(0.025);
        assert_eq!(sampler.latest_fps(), Some(40));
        sampler.record_frame(0.05);
        assert_eq!(sampler.latest_fps(), Some(20));
    }

    #[test]
    fn test_no_average_until_window_full() {
        let mut sampler = FrameSampler::new(10).unwrap();
        for i in 0..9 {
            sampler.record_frame(1.0 / 60.0);
            assert_eq!(sampler.average_fps(), None, "after {} samples", i + 1);
        }
        sampler.record_frame(1.0 / 60.0);
        assert!(sampler.is_ready());
        assert_eq!(sampler.average_fps(), Some(60.0));
    }

    #[test]
    fn test_average_tracks_most_recent_window() {
        let mut sampler = FrameSampler::new(4).unwrap();
        feed(&mut sampler, &[10, 20, 30, 40, 50, 60]);

        assert_eq!(sampler.samples(), vec![30, 40, 50, 60]);
        assert_relative_eq!(sampler.average_fps().unwrap(), 45.0);
        assert_eq!(sampler.min_fps(), Some(30));
        assert_eq!(sampler.max_fps(), Some(60));
    }

    #[test]
    fn test_degenerate_deltas_are_skipped() {
        let mut sampler = FrameSampler::new(3).unwrap();
        feed(&mut sampler, &[30, 30, 60]);
        let before = sampler.average_fps();

        sampler.record_frame(0.0);
        sampler.record_frame(-0.016);
        sampler.record_frame(f32::NAN);
        sampler.record_frame(f32::INFINITY);

        assert_eq!(sampler.average_fps(), before);
        assert_eq!(sampler.len(), 3);
        assert_eq!(sampler.skipped_frames(), 4);
    }

    #[test]
    fn test_reset_starts_new_cycle() {
        let mut sampler = FrameSampler::new(2).unwrap();
        feed(&mut sampler, &[60, 60]);
        assert!(sampler.is_ready());

        sampler.reset();
        assert!(sampler.is_empty());
        assert_eq!(sampler.average_fps(), None);
        assert_eq!(sampler.window_size(), 2);
    }

    #[test]
    fn test_wall_clock_resists_single_frame_jitter() {
        // Nine 10ms frames and one 1µs hitch.
        let mut per_frame = FrameSampler::new(10).unwrap();
        let mut wall_clock = FrameSampler::with_sampling(10, FpsSampling::WallClock).unwrap();
        for sampler in [&mut per_frame, &mut wall_clock] {
            for _ in 0..9 {
                sampler.record_frame(0.01);
            }
            sampler.record_frame(0.000_001);
        }

        // 9 * 100 + 1_000_000 over 10 frames.
        assert_relative_eq!(per_frame.average_fps().unwrap(), 100_090.0, max_relative = 1e-4);
        // 10 frames over ~90ms.
        assert_relative_eq!(wall_clock.average_fps().unwrap(), 111.1, max_relative = 1e-3);
    }

    #[test]
    fn test_from_config() {
        let config = MonitorConfig {
            window_size: 5,
            sampling: FpsSampling::WallClock,
            ..MonitorConfig::default()
        };
        let sampler = FrameSampler::from_config(&config).unwrap();
        assert_eq!(sampler.window_size(), 5);
        assert_eq!(sampler.sampling(), FpsSampling::WallClock);
    }
}
