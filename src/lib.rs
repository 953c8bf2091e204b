//! Skiff - deployment bootstrapper for Heroku-style platforms
//!
//! Skiff wraps a platform CLI (such as Heroku's) and a web framework's
//! remote management commands to bring a production app up from nothing:
//! create the app, install add-ons, set config vars, push code, migrate
//! the database, publish static assets, and validate monitoring.
//!
//! Every risky step runs through a guarded executor: when the underlying
//! command fails, the operator decides at the terminal whether the
//! pipeline keeps going or stops.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{GuardedRunner, Pipeline};
pub use config::Config;
pub use domain::command::{CommandLine, RunContext};
pub use domain::ports::{CommandExecutor, ExecOutput, Prompter};
pub use error::{SkiffError, SkiffResult};
pub use infrastructure::{AssumeYes, SystemExecutor, TerminalPrompter};
pub use ui::Reporter;
