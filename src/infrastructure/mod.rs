//! Infrastructure: real process spawning and terminal prompting.

pub mod executor;
pub mod prompter;

pub use executor::SystemExecutor;
pub use prompter::{AssumeYes, TerminalPrompter};
