// SPDX-License-Identifier: Apache-2.0

//! `proctor` — a sandboxed, BDD-style grading harness.
//!
//! An author describes a tree of nested, point-weighted blocks
//! (`scenario`/`given`/`when`/`then`) containing [`Grader::require`]/
//! [`Grader::equal`] assertions. Every block runs in its own forked child
//! process (§4.2), so a crash, a runaway loop, or any other process-fatal
//! fault inside one block cannot lose points already earned elsewhere in
//! the tree, or take down the rest of the run.
//!
//! Architecturally this is two parts:
//! 1. A block operator ([`block`]) that forks, then dispatches into
//!    either the child runner ([`child`]) or the parent supervisor
//!    ([`parent`]) depending on which side of the fork we ended up on.
//!    The parent waits for the child bounded by a wall-clock time limit
//!    (only enforced once a point-bearing block is somewhere on the
//!    current path) and kills its process group on timeout.
//! 2. An upward IPC protocol ([`frame`]) over the per-block pipe: typed,
//!    length-delimited frames carrying a child's folded metrics, its
//!    pass/fail verdict, and deferred diagnostic strings, which a parent
//!    either forwards further up or — at the root — prints.
//!
//! Building the block tree itself is a thin wrapper over [`Grader::scenario`]/
//! [`Grader::given`]/[`Grader::when`]/[`Grader::then`]; see `demos/` for
//! worked examples.

mod assert;
mod block;
mod child;
mod config;
mod error;
mod frame;
mod grader;
mod metrics;
mod parent;

pub use config::GraderConfig;
pub use error::GraderError;
pub use frame::{Frame, DEFAULT_MAX_STRING_LEN};
pub use grader::Grader;
pub use metrics::{Metrics, Verdict};

impl Grader {
    /// Prints the final summary and returns the process exit status
    /// (§4.7, root lifecycle). Call this once, after the outermost block
    /// has returned, from the author's `main`.
    pub fn finish(&self) -> i32 {
        self.print_summary();
        self.status()
    }
}
