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

//! Fixed-capacity FIFO storage for per-frame samples.

/// A circular buffer whose capacity is chosen at runtime.
///
/// Once full, every push overwrites the oldest sample.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    data: Vec<T>,
    index: usize,
    count: usize,
}

impl<T: Default + Copy> SampleWindow<T> {
    /// Creates an empty window holding at most `capacity` samples.
    ///
    /// `capacity` must be non-zero; callers validate it beforehand.
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "sample window capacity must be non-zero");
        Self {
            data: vec![T::default(); capacity.max(1)],
            index: 0,
            count: 0,
        }
    }

    /// Pushes a new value, evicting the oldest if full.
    pub fn push(&mut self, value: T) {
        let capacity = self.data.len();
        self.data[self.index] = value;
        self.index = (self.index + 1) % capacity;
        if self.count < capacity {
            self.count += 1;
        }
    }

    /// Number of samples currently held.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Maximum number of samples held.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` once the window holds `capacity` samples.
    pub fn is_full(&self) -> bool {
        self.count == self.data.len()
    }

    /// Returns `true` if no sample is held.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drops every sample. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index = 0;
        self.count = 0;
    }

    /// The most recently pushed value.
    pub fn latest(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        let capacity = self.data.len();
        self.data.get((self.index + capacity - 1) % capacity)
    }

    /// Iterates in chronological order (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (left, right) = self.data.split_at(self.index);
        let older: &[T] = if self.is_full() { right } else { &[] };
        older.iter().chain(left.iter())
    }
}
