//! Subprocess output capture
//!
//! Runs a program with stdout piped into a [`FlagBuffer`] and stderr sent to
//! the null device. Every failure mode collapses into a `false` result; the
//! underlying cause is only visible through `tracing`.

use crate::buffer::FlagBuffer;
use std::ffi::OsStr;
use std::io::{self, Read};
use std::process::{Child, Command, Stdio};
use thiserror::Error;
use tracing::{debug, trace};

/// Size of each read from the child's stdout
pub const READ_CHUNK: usize = 1024;

#[derive(Debug, Error)]
enum CaptureError {
    #[error("could not execute '{program}': {error}")]
    Spawn { program: String, error: io::Error },

    #[error("could not read output of '{program}': {error}")]
    Read { program: String, error: io::Error },

    #[error("could not wait for '{program}': {error}")]
    Wait { program: String, error: io::Error },
}

/// Run `program` with `args`, appending its stdout to `output`.
///
/// Exactly one trailing newline is stripped from the captured text. Returns
/// `true` only if the child exited normally with status zero. On failure
/// `output` may hold partial output; callers roll back to their own mark.
pub fn capture_process<I, S>(program: &str, args: I, output: &mut FlagBuffer) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    match run_capture(program, args, output) {
        Ok(success) => success,
        Err(error) => {
            debug!(%error, "capture failed");
            false
        }
    }
}

fn run_capture<I, S>(
    program: &str,
    args: I,
    output: &mut FlagBuffer,
) -> Result<bool, CaptureError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|error| CaptureError::Spawn {
            program: program.to_string(),
            error,
        })?;

    let start = output.len();
    if let Err(error) = read_stdout(&mut child, output) {
        // Reap the child so it does not linger after a broken read
        let _ = child.kill();
        let _ = child.wait();
        return Err(CaptureError::Read {
            program: program.to_string(),
            error,
        });
    }

    if output.len() > start && output.last() == Some(b'\n') {
        output.truncate(output.len() - 1);
    }

    let status = child.wait().map_err(|error| CaptureError::Wait {
        program: program.to_string(),
        error,
    })?;

    trace!(
        program,
        %status,
        captured = output.len() - start,
        "process finished"
    );

    // `success` is false for signal termination as well as non-zero codes
    Ok(status.success())
}

fn read_stdout(child: &mut Child, output: &mut FlagBuffer) -> io::Result<()> {
    let Some(mut stdout) = child.stdout.take() else {
        return Ok(());
    };

    loop {
        let mark = output.len();
        let read = match stdout.read(output.reserve_tail(READ_CHUNK)) {
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                output.truncate(mark);
                continue;
            }
            Err(error) => {
                output.truncate(mark);
                return Err(error);
            }
        };

        output.truncate(mark + read);
        if read == 0 {
            return Ok(());
        }
    }
}
