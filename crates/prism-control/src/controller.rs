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

//! One-way quality degradation driven by averaged FPS.
//!
//! The controller walks `High -> Medium -> Low` and never climbs back within
//! its lifetime. Every below-threshold sample above `Low` steps down and
//! notifies straight away, so the controller alone does not wait between
//! steps. The one-step-per-window cycle lives in
//! [`PerformanceMonitor`](crate::PerformanceMonitor), which clears its sampler
//! after each step so the new level is judged on a full window of its own.
//!
//! `Low` is terminal: the first low sample there only raises the flag, and
//! every later sample is ignored.

use crossbeam_channel::{Receiver, Sender};
use prism_core::config::validate_threshold;
use prism_core::{ConfigResult, QualityChange, QualityLevel};

/// Callback invoked once per degradation step.
pub type IssueHandler = Box<dyn FnMut(&QualityChange)>;

/// Single writer of the current [`QualityLevel`].
pub struct QualityController {
    threshold_fps: f32,
    level: QualityLevel,
    flagged: bool,
    transitions: u32,
    on_issue: Option<IssueHandler>,
    subscribers: Vec<Sender<QualityLevel>>,
}

impl QualityController {
    /// Creates a controller at `High` with the given FPS floor.
    pub fn new(threshold_fps: f32) -> ConfigResult<Self> {
        validate_threshold(threshold_fps)?;
        Ok(Self {
            threshold_fps,
            level: QualityLevel::High,
            flagged: false,
            transitions: 0,
            on_issue: None,
            subscribers: Vec::new(),
        })
    }

    /// Registers the notification sink, replacing any previous one.
    pub fn with_issue_handler(mut self, handler: impl FnMut(&QualityChange) + 'static) -> Self {
        self.set_issue_handler(handler);
        self
    }

    /// Registers the notification sink, replacing any previous one.
    pub fn set_issue_handler(&mut self, handler: impl FnMut(&QualityChange) + 'static) {
        self.on_issue = Some(Box::new(handler));
    }

    /// Returns a channel that receives the new level after every step.
    pub fn subscribe(&mut self) -> Receiver<QualityLevel> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Feeds one averaged FPS value.
    ///
    /// Returns the step taken, if any. Non-finite values are ignored.
    pub fn on_sample(&mut self, average_fps: f32) -> Option<QualityChange> {
        if !average_fps.is_finite() || average_fps >= self.threshold_fps || self.flagged {
            return None;
        }

        let Some(next) = self.level.next_lower() else {
            self.flagged = true;
            log::debug!(
                "QualityController: avg {average_fps:.1} FPS below {:.1} at lowest quality.",
                self.threshold_fps
            );
            return None;
        };

        let change = QualityChange {
            from: self.level,
            to: next,
            average_fps,
        };
        self.level = next;
        self.transitions += 1;

        log::info!("Performance: Reduced quality to {next}");
        log::debug!("QualityController: {}", change.describe());

        if let Some(handler) = self.on_issue.as_mut() {
            handler(&change);
        }
        self.subscribers.retain(|tx| tx.send(next).is_ok());

        Some(change)
    }

    /// Drops the sink and disconnects every subscriber.
    pub fn release(&mut self) {
        self.on_issue = None;
        self.subscribers.clear();
    }

    /// The current level.
    pub fn level(&self) -> QualityLevel {
        self.level
    }

    /// The configured FPS floor.
    pub fn threshold(&self) -> f32 {
        self.threshold_fps
    }

    /// Returns `true` once a below-threshold sample has been seen at `Low`.
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Number of steps taken so far (0 to 2).
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Number of live subscribers as of the last step.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for QualityController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityController")
            .field("threshold_fps", &self.threshold_fps)
            .field("level", &self.level)
            .field("flagged", &self.flagged)
            .field("transitions", &self.transitions)
            .field("has_issue_handler", &self.on_issue.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::ConfigError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_controller(threshold: f32) -> (QualityController, Rc<RefCell<Vec<QualityChange>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let controller = QualityController::new(threshold)
            .unwrap()
            .with_issue_handler(move |change| sink.borrow_mut().push(*change));
        (controller, seen)
    }

    #[test]
    fn test_rejects_invalid_threshold() {
        assert!(matches!(
            QualityController::new(0.0),
            Err(ConfigError::InvalidThreshold(_))
        ));
        assert!(QualityController::new(-1.0).is_err());
    }

    #[test]
    fn test_starts_high() {
        let controller = QualityController::new(30.0).unwrap();
        assert_eq!(controller.level(), QualityLevel::High);
        assert_eq!(controller.transitions(), 0);
        assert!(!controller.is_flagged());
    }

    #[test]
    fn test_healthy_samples_change_nothing() {
        let (mut controller, seen) = counting_controller(30.0);
        assert_eq!(controller.on_sample(60.0), None);
        assert_eq!(controller.on_sample(30.0), None);
        assert_eq!(controller.level(), QualityLevel::High);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_steps_down_once_per_sample_to_low() {
        let (mut controller, seen) = counting_controller(30.0);

        let first = controller.on_sample(15.0).unwrap();
        assert_eq!(first.from, QualityLevel::High);
        assert_eq!(first.to, QualityLevel::Medium);

        let second = controller.on_sample(15.0).unwrap();
        assert_eq!(second.to, QualityLevel::Low);

        assert_eq!(controller.on_sample(15.0), None);
        assert_eq!(controller.on_sample(5.0), None);
        assert_eq!(controller.level(), QualityLevel::Low);
        assert!(controller.is_flagged());
        assert_eq!(controller.transitions(), 2);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_flag_is_only_raised_at_low() {
        let (mut controller, _) = counting_controller(30.0);

        controller.on_sample(15.0);
        assert_eq!(controller.level(), QualityLevel::Medium);
        assert!(!controller.is_flagged());

        // No window between steps here: the next low sample steps again.
        assert!(controller.on_sample(15.0).is_some());
        assert_eq!(controller.level(), QualityLevel::Low);
        assert!(!controller.is_flagged());

        controller.on_sample(15.0);
        assert!(controller.is_flagged());
    }

    #[test]
    fn test_level_never_rises() {
        let (mut controller, _) = counting_controller(30.0);
        let mut previous = controller.level();
        for fps in [60.0, 20.0, 90.0, 120.0, 25.0, 144.0, 10.0, 240.0] {
            controller.on_sample(fps);
            assert!(controller.level() <= previous);
            previous = controller.level();
        }
        assert_eq!(controller.level(), QualityLevel::Low);
    }

    #[test]
    fn test_non_finite_samples_are_ignored() {
        let (mut controller, seen) = counting_controller(30.0);
        assert_eq!(controller.on_sample(f32::NAN), None);
        assert_eq!(controller.on_sample(f32::NEG_INFINITY), None);
        assert_eq!(controller.level(), QualityLevel::High);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_subscribers_receive_levels() {
        let mut controller = QualityController::new(30.0).unwrap();
        let rx = controller.subscribe();

        controller.on_sample(10.0);
        controller.on_sample(10.0);
        controller.on_sample(10.0);

        let received: Vec<QualityLevel> = rx.try_iter().collect();
        assert_eq!(received, vec![QualityLevel::Medium, QualityLevel::Low]);
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut controller = QualityController::new(30.0).unwrap();
        let kept = controller.subscribe();
        drop(controller.subscribe());
        assert_eq!(controller.subscriber_count(), 2);

        controller.on_sample(10.0);
        assert_eq!(controller.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(QualityLevel::Medium));
    }

    #[test]
    fn test_release_disconnects_subscribers() {
        let (mut controller, seen) = counting_controller(30.0);
        let rx = controller.subscribe();
        controller.release();

        controller.on_sample(10.0);
        assert!(seen.borrow().is_empty());
        assert!(rx.recv().is_err());
    }
}
