//! ProcessRunner trait and ExecRunner (sync subprocess wrapper).
//! The trait is the seam for mock injection in tests.

use std::io::{self, Read};
use std::process::{Command, Stdio};

use crate::error::TmuxError;

/// Runs a program to completion and returns its combined output.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &str, args: &[&str]) -> Result<Vec<u8>, TmuxError>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, command: &str, args: &[&str]) -> Result<Vec<u8>, TmuxError> {
        (**self).run(command, args)
    }
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for Box<T> {
    fn run(&self, command: &str, args: &[&str]) -> Result<Vec<u8>, TmuxError> {
        (**self).run(command, args)
    }
}

/// Real runner using `std::process::Command`.
///
/// Each call spawns a fresh process, so the runner holds no state and is
/// `Send + Sync`. stdout and stderr share one pipe, so the combined output
/// keeps the order in which the process wrote it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecRunner;

impl ProcessRunner for ExecRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<Vec<u8>, TmuxError> {
        tracing::debug!(command, ?args, "spawning");
        let (mut reader, writer) = io::pipe()?;
        let mut child = {
            let mut cmd = Command::new(command);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone()?)
                .stderr(writer);
            cmd.spawn().map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    TmuxError::NotFound(command.to_string())
                } else {
                    TmuxError::Io(e)
                }
            })?
            // `cmd` drops here and closes our copies of the write end.
        };

        let mut combined = Vec::new();
        reader.read_to_end(&mut combined)?;
        let status = child.wait()?;

        if !status.success() {
            let status = status
                .code()
                .map(|c| format!("exit code {c}"))
                .unwrap_or_else(|| "signal".into());
            tracing::warn!(command, %status, "command failed");
            return Err(TmuxError::CommandFailed {
                command: command.to_string(),
                status,
                output: combined,
            });
        }

        Ok(combined)
    }
}
