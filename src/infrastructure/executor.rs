//! System command executor.
//!
//! Spawns commands directly with captured output, no shell involved.
//! stdin stays attached to the terminal so that credential prompts from
//! `git push` or the platform CLI still work.

use std::process::{Command, Stdio};

use crate::domain::command::CommandLine;
use crate::domain::ports::{CommandExecutor, ExecOutput};

/// Executor backed by `std::process::Command`.
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&self, command: &CommandLine) -> ExecOutput {
        let output = Command::new(command.program())
            .args(command.argv())
            .stdin(Stdio::inherit())
            .output();

        match output {
            Ok(out) => ExecOutput {
                success: out.status.success(),
                code: out.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&out.stdout).to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            },
            // A missing binary is a failed command, not a fault; the
            // guard decides what happens next.
            Err(err) => ExecOutput::spawn_failure(format!(
                "failed to spawn `{}`: {}",
                command.program(),
                err
            )),
        }
    }
}
