// SPDX-License-Identifier: Apache-2.0

//! The parent supervisor (§4.4, component C): waits for one forked child,
//! bounded by a wall-clock limit, then drains and folds its frames.

use std::io::{self, Write};
use std::os::fd::OwnedFd;
use std::time::{Duration, Instant};

use nix::sys::signal::{kill, Signal};
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::Pid;
use tracing::{debug, error, warn};

use crate::frame::{read_frame, write_frame, Frame};
use crate::grader::Grader;
use crate::metrics::Verdict;

const POLL_INTERVAL: Duration = Duration::from_micros(500);

/// Bound on how long we'll keep polling to reap a killed child before
/// giving up and moving on (it will still get reaped eventually, just not
/// necessarily by us) — mirrors the teacher's `receiver_finish`, which
/// SIGKILLs a runaway receiver and then calls `reap_child_non_blocking` for
/// a bounded grace period rather than blocking on `waitpid(pid, None)`.
const REAP_GRACE: Duration = Duration::from_millis(1000);

/// Entered with a live `rcv_fd`, the child's pid, the block's point weight,
/// and the inherited description stack already on `grader`.
pub(crate) fn run(grader: &mut Grader, points: u32, child: Pid, rcv_fd: OwnedFd) {
    grader.state.points_specified = grader.state.points_specified || (points != 0);
    debug!(pid = child.as_raw(), points, "supervising block child");

    let diagnostic = wait_for_child(grader, child);

    drain(grader, &rcv_fd);

    emit_upward(grader, points, diagnostic);
}

/// Phase 1 — wait loop. Returns an extra diagnostic line if the child
/// died abnormally or was killed for exceeding the time limit.
fn wait_for_child(grader: &Grader, child: Pid) -> Option<String> {
    let start = Instant::now();
    loop {
        match waitpid(child, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => {
                if grader.state.points_specified
                    && start.elapsed() > Duration::from_millis(grader.config.time_limit_ms as u64)
                {
                    // Kill the whole process group so grandchildren die too.
                    warn!(pid = child.as_raw(), limit_ms = grader.config.time_limit_ms, "block exceeded time limit, killing process group");
                    let _ = kill(Pid::from_raw(-child.as_raw()), Signal::SIGKILL);
                    reap_child_non_blocking(child, REAP_GRACE);
                    return Some(format!(
                        "The following test exceeded the time limit of {}ms\n{}\n",
                        grader.config.time_limit_ms,
                        grader.stack_prefix()
                    ));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Ok(WaitStatus::Exited(_, 0)) => return None,
            Ok(WaitStatus::Exited(_, code)) => {
                warn!(pid = child.as_raw(), code, "block child exited non-zero");
                return Some(format!(
                    "The following test failed to run! Status code: {}\n{}\n",
                    code,
                    grader.stack_prefix()
                ));
            }
            Ok(WaitStatus::Signaled(_, signal, _)) => {
                warn!(pid = child.as_raw(), %signal, "block child died by signal");
                return Some(format!(
                    "The following test failed to run! Status code: {} ({})\n{}\n",
                    signal as i32,
                    signal,
                    grader.stack_prefix()
                ));
            }
            Ok(_) => std::thread::sleep(POLL_INTERVAL),
            Err(nix::errno::Errno::ECHILD) => return None,
            Err(e) => {
                error!("error waiting for child: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Poll (non-blockingly) for up to `grace` for a just-`SIGKILL`ed child to
/// be reaped. Gives up silently after `grace` elapses: the child is dead or
/// dying either way, and the drain phase below only needs every copy of the
/// pipe's write end closed, which happens at process death regardless of
/// whether we're the one who reaps it.
fn reap_child_non_blocking(child: Pid, grace: Duration) {
    let start = Instant::now();
    loop {
        match waitpid(child, Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => {
                if start.elapsed() > grace {
                    warn!(pid = child.as_raw(), "gave up reaping killed child after grace period");
                    return;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Ok(_) | Err(nix::errno::Errno::ECHILD) => return,
            Err(e) => {
                warn!(pid = child.as_raw(), "error reaping killed child: {e}");
                return;
            }
        }
    }
}

/// Phase 2 — drain every frame the child (and anything it forwarded) sent
/// before exiting, folding it into this process's own accumulators.
fn drain(grader: &mut Grader, rcv_fd: &OwnedFd) {
    loop {
        match read_frame(rcv_fd, grader.config.max_string_len) {
            Ok(Some(Frame::Str(s))) => emit_string(grader, &s),
            Ok(Some(Frame::Metrics(m))) => grader.state.metrics += m,
            Ok(Some(Frame::Bool(b))) => {
                let incoming = if b { Verdict::Pass } else { Verdict::Fail };
                grader.state.verdict = grader.state.verdict.combine(incoming);
            }
            Ok(None) => break,
            Err(e) => {
                error!("IPC protocol error: {e}");
                std::process::exit(1);
            }
        }
    }
}

/// Phase 3 — surface any timeout/signal diagnostic and, if nested, fold
/// the crashed block's credit and forward the cumulative verdict upward.
fn emit_upward(grader: &mut Grader, points: u32, diagnostic: Option<String>) {
    if let Some(diag) = &diagnostic {
        if grader.state.points_specified && points != 0 {
            grader.state.metrics.total_points += points;
            grader.state.metrics.total_tests += 1;
            grader.state.metrics.failed_tests += 1;
        }
        grader.state.verdict = grader.state.verdict.combine(Verdict::Fail);
        emit_string(grader, diag);
    }

    if !grader.is_root() {
        let snd_fd = grader
            .state
            .snd_fd
            .as_ref()
            .expect("nested process always has a snd_fd");
        let _ = write_frame(snd_fd, &Frame::Bool(grader.state.verdict.resolve()));
    }
}

/// Print at root, otherwise forward to our own parent (§4.4 "root-vs-nested rule").
fn emit_string(grader: &Grader, s: &str) {
    if grader.is_root() {
        print!("{s}");
        let _ = io::stdout().flush();
    } else {
        let snd_fd = grader
            .state
            .snd_fd
            .as_ref()
            .expect("nested process always has a snd_fd");
        let _ = write_frame(snd_fd, &Frame::Str(s.to_string()));
    }
}
