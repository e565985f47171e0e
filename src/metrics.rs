// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::{Add, AddAssign};

/// Running totals for a subtree of the block tree.
///
/// Field-wise addition forms a commutative monoid with [`Metrics::default`]
/// as the identity — folding sibling metrics in any order yields the same
/// result (§8 invariant 2).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub total_points: u32,
    pub earned_points: u32,
    pub total_tests: u32,
    pub passed_tests: u32,
    pub failed_tests: u32,
    pub total_assertions: u32,
    pub passed_assertions: u32,
}

impl Add for Metrics {
    type Output = Metrics;

    fn add(self, rhs: Metrics) -> Metrics {
        Metrics {
            total_points: self.total_points + rhs.total_points,
            earned_points: self.earned_points + rhs.earned_points,
            total_tests: self.total_tests + rhs.total_tests,
            passed_tests: self.passed_tests + rhs.passed_tests,
            failed_tests: self.failed_tests + rhs.failed_tests,
            total_assertions: self.total_assertions + rhs.total_assertions,
            passed_assertions: self.passed_assertions + rhs.passed_assertions,
        }
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Metrics) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tests: {}/{} [Failed {} test(s)]",
            self.passed_tests, self.total_tests, self.failed_tests
        )?;
        writeln!(f, "Points: {}/{}", self.earned_points, self.total_points)?;
        write!(
            f,
            "Assertions: {}/{}",
            self.passed_assertions, self.total_assertions
        )
    }
}

/// Three-valued per-block outcome.
///
/// Distinguishes a block that made no assertions at all (`Unset`) from one
/// that asserted and never failed (`Pass`); `Fail` absorbs everything.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    Unset,
    Pass,
    Fail,
}

impl Verdict {
    /// Combine two verdicts per §4.5: `Fail` absorbs, `Pass` beats `Unset`.
    pub fn combine(self, other: Verdict) -> Verdict {
        use Verdict::*;
        match (self, other) {
            (Fail, _) | (_, Fail) => Fail,
            (Unset, x) => x,
            (x, Unset) => x,
            (Pass, Pass) => Pass,
        }
    }

    /// The conservative default applied when a verdict must be resolved to
    /// a concrete pass/fail (e.g. a zero-point block's final `BOOL` frame,
    /// or the root's exit status): `Unset` resolves to `Fail`.
    pub fn resolve(self) -> bool {
        matches!(self, Verdict::Pass)
    }
}
