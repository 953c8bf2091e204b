//! Domain ports.
//!
//! Two traits sit at the process boundary: one spawns external commands,
//! one asks the operator a yes/no question. Infrastructure provides the
//! real implementations; tests provide scripted ones.

use crate::domain::command::CommandLine;

/// Outcome of one external command invocation.
///
/// Failure is data here, never an error. A non-zero exit status, and
/// even a binary that could not be spawned at all, comes back as
/// `success == false` with whatever output was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub success: bool,
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Failure result for a command that never ran.
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: -1,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// Spawns one external command and reports how it went.
pub trait CommandExecutor {
    fn run(&self, command: &CommandLine) -> ExecOutput;
}

/// Asks the operator a yes/no question.
pub trait Prompter {
    /// Returns the operator's answer. Anything that prevents getting an
    /// answer (end-of-input, non-interactive stdin) is a "no".
    fn ask(&self, prompt: &str) -> bool;
}
