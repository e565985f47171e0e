// SPDX-License-Identifier: Apache-2.0

use std::io;

/// Errors that abort the whole run rather than simply failing a block.
///
/// An author-level assertion failure is never represented here: it only
/// ever flips a [`crate::Verdict`] to `Fail`. These variants are reserved
/// for conditions from which a block cannot recover on its own, such as a
/// corrupt IPC stream or the inability to fork a child at all.
#[derive(Debug, thiserror::Error)]
pub enum GraderError {
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("failed to fork child process: {0}")]
    Fork(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GraderError>;
