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

//! History of degradation steps taken during a scene's lifetime.

use prism_core::{QualityChange, QualityLevel};
use serde::{Deserialize, Serialize};

/// A recorded degradation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index of the frame (1-based) on which the step happened.
    pub frame: u64,
    /// The step itself.
    #[serde(flatten)]
    pub change: QualityChange,
}

/// Append-only log of [`QualityChange`]s.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceLog {
    entries: Vec<HistoryEntry>,
}

impl PerformanceLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step observed on `frame`.
    pub fn record(&mut self, frame: u64, change: QualityChange) {
        log::debug!("PerformanceLog: frame {frame}: {}", change.describe());
        self.entries.push(HistoryEntry { frame, change });
    }

    /// All recorded steps, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The level reached by the most recent step, if any.
    pub fn last_level(&self) -> Option<QualityLevel> {
        self.entries.last().map(|e| e.change.to)
    }

    /// Pretty-printed JSON report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
