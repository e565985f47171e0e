// SPDX-License-Identifier: Apache-2.0

//! The assertion API (§4.6, component G): `require` and the `equal` sugar
//! built on top of it.

use crate::frame::{write_frame, Frame};
use crate::grader::Grader;
use crate::metrics::Verdict;

impl Grader {
    /// `require(description, condition)` per §4.6.
    pub fn require(&mut self, description: impl AsRef<str>, condition: bool) {
        let description = description.as_ref();
        self.state.metrics.total_assertions += 1;

        if condition {
            self.state.metrics.passed_assertions += 1;
            self.state.verdict = self.state.verdict.combine(Verdict::Pass);
        } else {
            self.state.verdict = Verdict::Fail;
        }

        if !condition || self.config.verbose {
            let tag = if condition { "PASS: " } else { "FAIL: " };
            let message = format!("{}{tag}{description}\n\n", self.stack_prefix());
            self.emit(message);
        }
    }

    /// `equal(description, lhs, rhs)`: sugar for `require(description, lhs == rhs)`.
    pub fn equal<T: PartialEq>(&mut self, description: impl AsRef<str>, lhs: T, rhs: T) {
        self.require(description, lhs == rhs);
    }

    /// Send a diagnostic string upward, or print it directly at the root.
    fn emit(&self, message: String) {
        if self.is_root() {
            print!("{message}");
            let _ = std::io::Write::flush(&mut std::io::stdout());
        } else {
            let snd_fd = self
                .state
                .snd_fd
                .as_ref()
                .expect("nested process always has a snd_fd");
            let _ = write_frame(snd_fd, &Frame::Str(message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraderConfig;

    #[test]
    fn require_true_counts_as_pass_and_stays_quiet_unless_verbose() {
        let mut grader = Grader::new(GraderConfig::new());
        grader.require("a true thing", true);
        assert_eq!(grader.state.metrics.total_assertions, 1);
        assert_eq!(grader.state.metrics.passed_assertions, 1);
        assert_eq!(grader.state.verdict, Verdict::Pass);
    }

    #[test]
    fn require_false_fails_regardless_of_prior_pass() {
        let mut grader = Grader::new(GraderConfig::new());
        grader.require("ok so far", true);
        grader.require("this breaks it", false);
        assert_eq!(grader.state.metrics.total_assertions, 2);
        assert_eq!(grader.state.metrics.passed_assertions, 1);
        assert_eq!(grader.state.verdict, Verdict::Fail);
    }

    #[test]
    fn equal_delegates_to_require() {
        let mut grader = Grader::new(GraderConfig::new());
        grader.equal("two plus two", 2 + 2, 4);
        assert_eq!(grader.state.verdict, Verdict::Pass);
        grader.equal("a lie", 2 + 2, 5);
        assert_eq!(grader.state.verdict, Verdict::Fail);
    }
}
