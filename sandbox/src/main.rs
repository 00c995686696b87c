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

//! Drives an adaptive placeholder scene from a real-time loop whose per-frame
//! cost keeps growing, so the monitor has to step quality down.
//!
//! Usage: `sandbox [config.json]`

use anyhow::{Context, Result};
use prism_control::MonitoredScene;
use prism_core::{FrameClock, MonitorConfig, QualityLevel, SceneDetail, SceneVariant};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const TOTAL_FRAMES: u32 = 180;
/// Frame at which the artificial load starts ramping up.
const RAMP_START: u32 = 30;
const BASE_COST_MS: f32 = 8.0;
const PEAK_COST_MS: f32 = 60.0;

/// Placeholder floating icosphere, one instance per quality level.
struct FloatingModel {
    level: QualityLevel,
    detail: SceneDetail,
    rotation_y: f32,
    /// Cost in milliseconds of rendering one frame at full detail.
    pressure_ms: Rc<Cell<f32>>,
}

impl FloatingModel {
    fn new(level: QualityLevel, pressure_ms: &Rc<Cell<f32>>) -> Self {
        Self {
            level,
            detail: level.detail(),
            rotation_y: 0.0,
            pressure_ms: Rc::clone(pressure_ms),
        }
    }

    fn triangle_count(&self) -> u32 {
        20 * 4u32.pow(self.detail.geometry_subdivisions)
    }
}

impl SceneVariant for FloatingModel {
    fn label(&self) -> &str {
        self.level.as_str()
    }

    fn detail(&self) -> SceneDetail {
        self.detail
    }

    fn render(&mut self, delta_seconds: f32) {
        self.rotation_y += delta_seconds * 0.5;

        let share =
            self.detail.particle_count as f32 / SceneDetail::default().particle_count as f32;
        let cost_ms = self.pressure_ms.get() * share;
        std::thread::sleep(Duration::from_secs_f32(cost_ms / 1000.0));

        log::trace!(
            "{}: {} triangles, {} particles, rot={:.2}",
            self.label(),
            self.triangle_count(),
            self.detail.particle_count,
            self.rotation_y
        );
    }
}

fn load_config() -> Result<MonitorConfig> {
    match std::env::args().nth(1) {
        Some(path) => MonitorConfig::from_file(&path)
            .with_context(|| format!("loading monitor configuration from '{path}'")),
        None => Ok(MonitorConfig {
            show_stats: true,
            ..MonitorConfig::default()
        }),
    }
}

fn pressure_at(frame: u32) -> f32 {
    let ramp = frame.saturating_sub(RAMP_START) as f32 * 0.5;
    (BASE_COST_MS + ramp).min(PEAK_COST_MS)
}

fn main() -> Result<()> {
    prism_telemetry::logging::init();

    let config = load_config()?;
    log::info!(
        "Sandbox: threshold={} FPS, window={} frames.",
        config.threshold_fps,
        config.window_size
    );

    let pressure = Rc::new(Cell::new(BASE_COST_MS));
    let mut scene = MonitoredScene::adaptive(
        config,
        FloatingModel::new(QualityLevel::High, &pressure),
        FloatingModel::new(QualityLevel::Medium, &pressure),
        FloatingModel::new(QualityLevel::Low, &pressure),
    )?;
    scene
        .monitor_mut()
        .set_issue_handler(|change| log::warn!("Performance issue: {}", change.describe()));
    let levels = scene.monitor_mut().subscribe();

    let mut clock = FrameClock::new();
    for frame in 0..TOTAL_FRAMES {
        pressure.set(pressure_at(frame));
        scene.frame(clock.delta());

        for level in levels.try_iter() {
            log::info!("Sandbox: scene now renders at {level} quality.");
        }
    }

    if let Some(stats) = scene.monitor().stats() {
        log::info!("Sandbox: stats {}", stats.summary());
    }
    scene.unmount();

    println!("{}", scene.monitor().history().to_json()?);
    log::info!(
        "Sandbox: finished after {:.1}s at {} quality.",
        clock.elapsed().as_secs_f32(),
        scene.quality()
    );
    Ok(())
}
