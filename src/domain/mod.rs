//! Domain layer: command values and the ports the pipeline runs against.

pub mod command;
pub mod ports;

pub use command::{CommandLine, RunContext};
pub use ports::{CommandExecutor, ExecOutput, Prompter};
