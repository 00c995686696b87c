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

//! Monotonic frame clock for hosts that do not supply their own deltas.

use std::time::{Duration, Instant};

/// Measures the time between consecutive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_time: Instant,
    last_tick: Instant,
}

impl FrameClock {
    /// Creates a new clock. The first delta is measured from this moment.
    #[inline]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_tick: now,
        }
    }

    /// Returns the seconds elapsed since the previous call (or since creation)
    /// and restarts the interval.
    #[inline]
    pub fn delta(&mut self) -> f32 {
        self.delta_at(Instant::now())
    }

    /// Same as [`delta`](Self::delta), measured against an explicit `now`.
    ///
    /// A `now` earlier than the previous tick yields `0.0`.
    pub fn delta_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick);
        self.last_tick = self.last_tick.max(now);
        delta.as_secs_f32()
    }

    /// Total time since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
