// SPDX-License-Identifier: Apache-2.0

//! Length-delimited IPC frames exchanged over a per-block pipe (§3, §4.1).
//!
//! Four tag bytes: `STRING` (diagnostic text), `METRICS` (a folded
//! [`Metrics`] record), `BOOL` (a child's final verdict), and end-of-stream
//! (the peer closed its write end — decoded as `Ok(None)`, never a tag
//! byte on the wire).

use std::io;
use std::os::fd::AsFd;

use nix::errno::Errno;

use crate::error::{GraderError, Result};
use crate::metrics::Metrics;

/// Default cap on a `STRING` frame's declared length (§9 open question).
pub const DEFAULT_MAX_STRING_LEN: u32 = 16 * 1024 * 1024;

const TAG_STRING: u8 = 0;
const TAG_METRICS: u8 = 1;
const TAG_BOOL: u8 = 2;

/// One unit of upward IPC (§3 "IPC frames").
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Str(String),
    Metrics(Metrics),
    Bool(bool),
}

/// Loop a `read` until `buf` is fully populated or the peer closes early.
///
/// Returns `Ok(false)` on a clean EOF at a frame boundary (zero bytes read
/// on the very first call); a short read partway through a frame is a
/// protocol error, since the sender always writes a whole frame.
fn read_exact(fd: &impl AsFd, buf: &mut [u8]) -> Result<bool> {
    let mut filled = 0;
    while filled < buf.len() {
        match nix::unistd::read(fd, &mut buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    return Ok(false);
                }
                return Err(GraderError::Protocol(
                    "short read: peer closed mid-frame".into(),
                ));
            }
            Ok(n) => filled += n,
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(GraderError::Io(io::Error::from(e))),
        }
    }
    Ok(true)
}

fn write_all(fd: &impl AsFd, buf: &[u8]) -> Result<()> {
    let mut sent = 0;
    while sent < buf.len() {
        match nix::unistd::write(fd, &buf[sent..]) {
            Ok(0) => return Ok(()), // reader gone; best-effort per §4.1
            Ok(n) => sent += n,
            Err(Errno::EINTR) => continue,
            Err(Errno::EPIPE) => return Ok(()),
            Err(e) => return Err(GraderError::Io(io::Error::from(e))),
        }
    }
    Ok(())
}

/// Best-effort write: failures are swallowed (§4.1 writer contract) except
/// the ones that indicate the process itself is unusable.
pub fn write_frame(fd: &impl AsFd, frame: &Frame) -> Result<()> {
    match frame {
        Frame::Str(s) => {
            let bytes = s.as_bytes();
            let len = bytes.len() as u32;
            write_all(fd, &[TAG_STRING])?;
            write_all(fd, &len.to_le_bytes())?;
            write_all(fd, bytes)
        }
        Frame::Metrics(m) => {
            write_all(fd, &[TAG_METRICS])?;
            write_all(fd, &m.total_points.to_ne_bytes())?;
            write_all(fd, &m.earned_points.to_ne_bytes())?;
            write_all(fd, &m.total_tests.to_ne_bytes())?;
            write_all(fd, &m.passed_tests.to_ne_bytes())?;
            write_all(fd, &m.failed_tests.to_ne_bytes())?;
            write_all(fd, &m.total_assertions.to_ne_bytes())?;
            write_all(fd, &m.passed_assertions.to_ne_bytes())
        }
        Frame::Bool(b) => write_all(fd, &[TAG_BOOL, if *b { 1 } else { 0 }]),
    }
}

/// Reads exactly one frame, or `Ok(None)` at a clean end-of-stream.
pub fn read_frame(fd: &impl AsFd, max_string_len: u32) -> Result<Option<Frame>> {
    let mut tag = [0u8; 1];
    if !read_exact(fd, &mut tag)? {
        return Ok(None);
    }
    match tag[0] {
        TAG_STRING => {
            let mut len_bytes = [0u8; 4];
            read_exact(fd, &mut len_bytes)?;
            let len = u32::from_le_bytes(len_bytes);
            if len > max_string_len {
                return Err(GraderError::Protocol(format!(
                    "STRING frame of {len} bytes exceeds cap of {max_string_len} bytes"
                )));
            }
            let mut payload = vec![0u8; len as usize];
            read_exact(fd, &mut payload)?;
            let s = String::from_utf8(payload)
                .map_err(|e| GraderError::Protocol(format!("invalid utf-8 payload: {e}")))?;
            Ok(Some(Frame::Str(s)))
        }
        TAG_METRICS => {
            let mut fields = [0u32; 7];
            for field in fields.iter_mut() {
                let mut buf = [0u8; 4];
                read_exact(fd, &mut buf)?;
                *field = u32::from_ne_bytes(buf);
            }
            Ok(Some(Frame::Metrics(Metrics {
                total_points: fields[0],
                earned_points: fields[1],
                total_tests: fields[2],
                passed_tests: fields[3],
                failed_tests: fields[4],
                total_assertions: fields[5],
                passed_assertions: fields[6],
            })))
        }
        TAG_BOOL => {
            let mut b = [0u8; 1];
            read_exact(fd, &mut b)?;
            Ok(Some(Frame::Bool(b[0] != 0)))
        }
        other => Err(GraderError::Protocol(format!("unknown frame tag {other}"))),
    }
}
