// SPDX-License-Identifier: Apache-2.0

use crate::frame::DEFAULT_MAX_STRING_LEN;

/// Construction-time knobs for a [`crate::Grader`].
///
/// Mirrors the teacher's `CrashtrackerConfiguration`/`CrashtrackerReceiverConfig`
/// builder-style constructors: a `Default` baseline plus chainable setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraderConfig {
    /// Emit a diagnostic line for passing assertions too, not only failing
    /// ones.
    pub verbose: bool,
    /// Wall-clock budget, per block invocation, enforced only once a
    /// point-bearing block has been entered somewhere on the current path.
    pub time_limit_ms: u32,
    /// Cap on a `STRING` frame's declared length (§9 open question).
    pub max_string_len: u32,
}

impl Default for GraderConfig {
    fn default() -> Self {
        GraderConfig {
            verbose: false,
            time_limit_ms: 1000,
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}

impl GraderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_time_limit_ms(mut self, time_limit_ms: u32) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    pub fn with_max_string_len(mut self, max_string_len: u32) -> Self {
        self.max_string_len = max_string_len;
        self
    }
}
