//! Confirm-or-abort command execution.
//!
//! The single error-handling policy of the whole pipeline lives here: a
//! guarded command that fails does not raise. With no prompt the failure
//! is tolerated outright; with a prompt the operator decides whether the
//! run keeps going. Declining aborts the process. Nothing is rolled
//! back either way, because the command may already have mutated the
//! remote platform.

use crate::domain::command::CommandLine;
use crate::domain::ports::{CommandExecutor, Prompter};
use crate::error::{SkiffError, SkiffResult};
use crate::ui::Reporter;

/// Runs one external command and, when it fails, asks the operator
/// whether the pipeline should continue.
pub struct GuardedRunner<'a> {
    executor: &'a dyn CommandExecutor,
    prompter: &'a dyn Prompter,
    reporter: Reporter,
}

impl<'a> GuardedRunner<'a> {
    pub fn new(
        executor: &'a dyn CommandExecutor,
        prompter: &'a dyn Prompter,
        reporter: Reporter,
    ) -> Self {
        Self {
            executor,
            prompter,
            reporter,
        }
    }

    /// Execute `command`. On failure, `prompt` is put to the operator as
    /// a yes/no question; a "no" (or no way to answer) becomes
    /// [`SkiffError::Aborted`]. A successful command never consults the
    /// operator.
    pub fn run(&self, command: &CommandLine, prompt: Option<&str>) -> SkiffResult<()> {
        self.reporter.command(command);
        let result = self.executor.run(command);

        if result.success {
            return Ok(());
        }

        self.reporter.failure(&result);
        match prompt {
            None => Ok(()),
            Some(question) => {
                if self.prompter.ask(question) {
                    Ok(())
                } else {
                    Err(SkiffError::Aborted)
                }
            }
        }
    }
}
