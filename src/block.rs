// SPDX-License-Identifier: Apache-2.0

//! The block operator (§4.2, component D): the single entry point invoked
//! per `scenario`/`given`/`when`/`then`.

use std::io;

use nix::unistd::{fork, setpgid, ForkResult, Pid};
use tracing::{debug, error};

use crate::child;
use crate::error::GraderError;
use crate::grader::Grader;
use crate::parent;

impl Grader {
    /// `run_block(points, description, body)` per §4.2.
    ///
    /// 1. Push `description`.
    /// 2. Create a pipe.
    /// 3. Fork.
    /// 4. Child: close the read end, install the write end as `snd_fd`,
    ///    hand off to the child runner.
    /// 5. Parent: put the child in its own process group, close the write
    ///    end, install the read end, hand off to the parent supervisor.
    /// 6. Pop the description stack on return.
    pub(crate) fn run_block(
        &mut self,
        points: u32,
        description: String,
        body: impl FnOnce(&mut Grader),
    ) {
        self.state.description_stack.push(description);

        let (rcv_fd, snd_fd) = match nix::unistd::pipe() {
            Ok(ends) => ends,
            Err(e) => {
                error!("failed to create pipe for block: {e}");
                std::process::exit(1);
            }
        };

        // Safety: this process is single-threaded from proctor's point of
        // view at every call site a block body is expected to invoke
        // run_block from; the child performs only async-signal-safe-ish
        // work (fd bookkeeping) before recursing into ordinary Rust code.
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                // Make the child its own process group leader, named after
                // its own pid, so a timeout kill (`kill(-pid, SIGKILL)`)
                // reaches it and every grandchild it forks (§4.2, §5). Done
                // on both sides of the fork (here and in the parent branch
                // below) to close the race where the parent tries to signal
                // the group before the child has set it.
                let _ = setpgid(Pid::from_raw(0), Pid::from_raw(0));
                drop(rcv_fd);
                self.state.snd_fd = Some(snd_fd);
                child::run(self, points, body);
                unreachable!("child::run always exits the process");
            }
            Ok(ForkResult::Parent { child }) => {
                let _ = setpgid(child, child);
                debug!(pid = child.as_raw(), "forked block child");
                drop(snd_fd);
                parent::run(self, points, child, rcv_fd);
                self.state.description_stack.pop();
            }
            Err(e) => {
                let err = GraderError::Fork(io::Error::from(e));
                error!("{err}");
                std::process::exit(1);
            }
        }
    }
}
