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

//! Maps a quality level to one of three scene variants.

use prism_core::{QualityLevel, QualityScene, SceneVariant};

/// Pure lookup from [`QualityLevel`] to a variant.
#[derive(Debug, Clone)]
pub struct AdaptiveSceneSelector<V> {
    high: V,
    medium: V,
    low: V,
}

impl<V> AdaptiveSceneSelector<V> {
    /// Creates a selector over the three variants.
    pub fn new(high: V, medium: V, low: V) -> Self {
        Self { high, medium, low }
    }

    /// The variant to mount at `level`.
    pub fn select(&self, level: QualityLevel) -> &V {
        match level {
            QualityLevel::High => &self.high,
            QualityLevel::Medium => &self.medium,
            QualityLevel::Low => &self.low,
        }
    }

    /// Mutable access to the variant for `level`.
    pub fn select_mut(&mut self, level: QualityLevel) -> &mut V {
        match level {
            QualityLevel::High => &mut self.high,
            QualityLevel::Medium => &mut self.medium,
            QualityLevel::Low => &mut self.low,
        }
    }

    /// Consumes the selector, returning `(high, medium, low)`.
    pub fn into_parts(self) -> (V, V, V) {
        (self.high, self.medium, self.low)
    }
}

/// A [`QualityScene`] that renders whichever variant matches the quality it
/// is handed.
#[derive(Debug)]
pub struct AdaptiveScene<V: SceneVariant> {
    selector: AdaptiveSceneSelector<V>,
    mounted: Option<QualityLevel>,
}

impl<V: SceneVariant> AdaptiveScene<V> {
    /// Creates an adaptive scene. Nothing is mounted until the first render.
    pub fn new(high: V, medium: V, low: V) -> Self {
        Self {
            selector: AdaptiveSceneSelector::new(high, medium, low),
            mounted: None,
        }
    }

    /// The level whose variant rendered last.
    pub fn mounted(&self) -> Option<QualityLevel> {
        self.mounted
    }

    /// The variant rendered last.
    pub fn mounted_variant(&self) -> Option<&V> {
        self.mounted.map(|level| self.selector.select(level))
    }

    /// The underlying selector.
    pub fn selector(&self) -> &AdaptiveSceneSelector<V> {
        &self.selector
    }
}

impl<V: SceneVariant> QualityScene for AdaptiveScene<V> {
    fn render(&mut self, quality: QualityLevel, delta_seconds: f32) {
        let variant = self.selector.select_mut(quality);
        if self.mounted != Some(quality) {
            log::debug!(
                "AdaptiveScene: mounting '{}' for {quality} quality.",
                variant.label()
            );
            self.mounted = Some(quality);
        }
        variant.render(delta_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::SceneDetail;

    #[derive(Debug)]
    struct CountingVariant {
        label: &'static str,
        level: QualityLevel,
        frames: u32,
    }

    impl CountingVariant {
        fn new(label: &'static str, level: QualityLevel) -> Self {
            Self {
                label,
                level,
                frames: 0,
            }
        }
    }

    impl SceneVariant for CountingVariant {
        fn label(&self) -> &str {
            self.label
        }

        fn detail(&self) -> SceneDetail {
            self.level.detail()
        }

        fn render(&mut self, _delta_seconds: f32) {
            self.frames += 1;
        }
    }

    fn adaptive() -> AdaptiveScene<CountingVariant> {
        AdaptiveScene::new(
            CountingVariant::new("sphere-hi", QualityLevel::High),
            CountingVariant::new("sphere-mid", QualityLevel::Medium),
            CountingVariant::new("sphere-lo", QualityLevel::Low),
        )
    }

    #[test]
    fn test_select_is_pure_lookup() {
        let selector = AdaptiveSceneSelector::new("high", "medium", "low");
        assert_eq!(*selector.select(QualityLevel::High), "high");
        assert_eq!(*selector.select(QualityLevel::Medium), "medium");
        assert_eq!(*selector.select(QualityLevel::Low), "low");
        assert_eq!(*selector.select(QualityLevel::Medium), "medium");
        assert_eq!(selector.into_parts(), ("high", "medium", "low"));
    }

    #[test]
    fn test_variants_shed_detail() {
        let scene = adaptive();
        let high = scene.selector().select(QualityLevel::High).detail();
        let low = scene.selector().select(QualityLevel::Low).detail();
        assert!(high.particle_count > low.particle_count);
    }

    #[test]
    fn test_renders_only_selected_variant() {
        let mut scene = adaptive();
        assert_eq!(scene.mounted(), None);

        scene.render(QualityLevel::High, 0.016);
        scene.render(QualityLevel::High, 0.016);
        scene.render(QualityLevel::Medium, 0.016);

        assert_eq!(scene.mounted(), Some(QualityLevel::Medium));
        assert_eq!(scene.mounted_variant().map(|v| v.label()), Some("sphere-mid"));
        assert_eq!(scene.selector().select(QualityLevel::High).frames, 2);
        assert_eq!(scene.selector().select(QualityLevel::Medium).frames, 1);
        assert_eq!(scene.selector().select(QualityLevel::Low).frames, 0);
    }
}
