// SPDX-License-Identifier: Apache-2.0

use std::os::fd::OwnedFd;

use crate::config::GraderConfig;
use crate::metrics::{Metrics, Verdict};

/// Per-process state carried across the whole lifetime of a block frame
/// (§3 "Block frame"). Duplicated wholesale by `fork()` into every
/// descendant; [`crate::child`] is responsible for resetting the fields
/// that must not simply be inherited (`metrics`, `verdict`).
pub(crate) struct BlockState {
    pub(crate) description_stack: Vec<String>,
    pub(crate) level: u32,
    pub(crate) verdict: Verdict,
    pub(crate) metrics: Metrics,
    pub(crate) points_specified: bool,
    /// Write end of the pipe toward this process's own parent. `None` only
    /// at the root, which has nobody to report to.
    pub(crate) snd_fd: Option<OwnedFd>,
}

impl Default for BlockState {
    fn default() -> Self {
        BlockState {
            description_stack: Vec::new(),
            level: 0,
            verdict: Verdict::Unset,
            metrics: Metrics::default(),
            points_specified: false,
            snd_fd: None,
        }
    }
}

/// The author-facing grader (§6 "External interfaces").
///
/// Construct one per top-level run, describe the block tree with
/// [`Grader::scenario`]/[`Grader::given`]/[`Grader::when`]/[`Grader::then`]
/// (and their point-bearing variants), assert inside leaf blocks with
/// [`Grader::require`]/[`Grader::equal`], and read [`Grader::status`] after
/// the outermost block returns.
pub struct Grader {
    pub(crate) config: GraderConfig,
    pub(crate) state: BlockState,
}

impl Default for Grader {
    /// A `Grader` built from `GraderConfig::default()`.
    fn default() -> Self {
        Grader::new(GraderConfig::default())
    }
}

impl Grader {
    pub fn new(config: GraderConfig) -> Self {
        Grader {
            config,
            state: BlockState::default(),
        }
    }

    /// `true` at the outermost process (§4.7): the one process that never
    /// ran as a forked child.
    pub(crate) fn is_root(&self) -> bool {
        self.state.level == 0
    }

    /// The newline-joined ancestor description stack, used as the prefix
    /// of every diagnostic emitted from inside this process (§3).
    pub(crate) fn stack_prefix(&self) -> String {
        if self.state.description_stack.is_empty() {
            String::new()
        } else {
            self.state.description_stack.join("\n") + "\n"
        }
    }

    pub fn scenario(&mut self, description: impl Into<String>, body: impl FnOnce(&mut Grader)) {
        self.run_block(0, format!("Scenario: {}", description.into()), body);
    }

    pub fn given(&mut self, description: impl Into<String>, body: impl FnOnce(&mut Grader)) {
        self.run_block(0, format!("Given: {}", description.into()), body);
    }

    pub fn when(&mut self, description: impl Into<String>, body: impl FnOnce(&mut Grader)) {
        self.run_block(0, format!("When: {}", description.into()), body);
    }

    pub fn then(&mut self, description: impl Into<String>, body: impl FnOnce(&mut Grader)) {
        self.run_block(0, format!("Then: {}", description.into()), body);
    }

    pub fn scenario_points(
        &mut self,
        points: u32,
        description: impl Into<String>,
        body: impl FnOnce(&mut Grader),
    ) {
        self.run_block(points, format!("Scenario: {}", description.into()), body);
    }

    pub fn given_points(
        &mut self,
        points: u32,
        description: impl Into<String>,
        body: impl FnOnce(&mut Grader),
    ) {
        self.run_block(points, format!("Given: {}", description.into()), body);
    }

    pub fn when_points(
        &mut self,
        points: u32,
        description: impl Into<String>,
        body: impl FnOnce(&mut Grader),
    ) {
        self.run_block(points, format!("When: {}", description.into()), body);
    }

    pub fn then_points(
        &mut self,
        points: u32,
        description: impl Into<String>,
        body: impl FnOnce(&mut Grader),
    ) {
        self.run_block(points, format!("Then: {}", description.into()), body);
    }

    /// Exit status per §6/§4.7: 0 iff the root verdict is `Pass`, else 1.
    pub fn status(&self) -> i32 {
        if self.state.verdict.resolve() {
            0
        } else {
            1
        }
    }

    /// Prints the final metrics summary (§6 "Standard output format").
    /// Only meaningful — and only ever called by the harness itself — at
    /// the root.
    pub(crate) fn print_summary(&self) {
        println!(
            "IMPORTANT NOTE: reports below do not necessarily mean all tests ran. \
             See any error messages above!"
        );
        println!("{}", self.state.metrics);
    }
}

