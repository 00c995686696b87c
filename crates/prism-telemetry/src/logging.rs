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

//! Process-wide logger setup.

use env_logger::Env;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global `env_logger` backend.
///
/// Honors `RUST_LOG`, falling back to [`DEFAULT_FILTER`]. Calling this more
/// than once is harmless: later calls leave the installed logger in place.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Installs the global logger with a custom fallback filter.
pub fn init_with_filter(default_filter: &str) {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized (fallback filter '{default_filter}').");
    }
}
