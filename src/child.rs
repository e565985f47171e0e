// SPDX-License-Identifier: Apache-2.0

//! The child runner (§4.3, component B): runs one block body inside a
//! freshly forked child.

use tracing::debug;

use crate::frame::{write_frame, Frame};
use crate::grader::Grader;
use crate::metrics::Verdict;

/// Entered in the freshly forked child. Never returns: the child always
/// exits at the end, whether body() completed normally or (if we get this
/// far at all) something about the run is broken.
pub(crate) fn run(grader: &mut Grader, points: u32, body: impl FnOnce(&mut Grader)) -> ! {
    grader.state.level += 1;
    debug!(level = grader.state.level, points, "entering block body");
    grader.state.points_specified = grader.state.points_specified || (points != 0);
    grader.state.metrics = Default::default();
    grader.state.verdict = Verdict::Unset;

    if grader.state.points_specified && points != 0 {
        grader.state.metrics.total_tests += 1;
        grader.state.metrics.total_points += points;
    }

    // A body that segfaults, divides by zero, or otherwise raises a
    // process-fatal fault never returns from this call; the process dies
    // by signal and `crate::parent` observes that from the other side of
    // the pipe. A Rust panic unwinds and this process exits non-zero,
    // which the parent treats the same way as a fatal signal (§4.4).
    body(grader);

    if grader.state.points_specified {
        if points == 0 {
            let snd_fd = grader
                .state
                .snd_fd
                .as_ref()
                .expect("child always has a snd_fd");
            let _ = write_frame(snd_fd, &Frame::Bool(grader.state.verdict.resolve()));
        } else if grader.state.verdict.resolve() {
            grader.state.metrics.earned_points += points;
            grader.state.metrics.passed_tests += 1;
        } else {
            grader.state.metrics.failed_tests += 1;
        }
    }

    let snd_fd = grader
        .state
        .snd_fd
        .as_ref()
        .expect("child always has a snd_fd");
    let _ = write_frame(snd_fd, &Frame::Metrics(grader.state.metrics));

    grader.state.snd_fd = None; // closes the write end (OwnedFd drop)
    std::process::exit(0);
}
