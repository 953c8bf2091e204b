//! Operator prompting.

use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;

/// Prompter backed by the controlling terminal.
///
/// When stdin is not a terminal there is no operator to ask, so the
/// answer is "no". This makes unattended runs fail closed at the first
/// declined guard instead of hanging on a prompt.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str) -> bool {
        if !std::io::stdin().is_terminal() {
            return false;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .unwrap_or(false)
    }
}

/// Prompter for `--yes` runs: every continue-anyway question is
/// answered affirmatively without touching the terminal.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn ask(&self, _prompt: &str) -> bool {
        true
    }
}
