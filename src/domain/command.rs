//! Typed command construction.
//!
//! Commands are an explicit program plus argument vector, spawned without
//! a shell. App names, addon identifiers, and config values are never
//! re-interpreted by an interpolation layer.

use std::fmt;

use crate::config::Config;
use crate::error::{SkiffError, SkiffResult};

/// One external command, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    /// Space-joined rendering for prompts and diagnostics. Not suitable
    /// for re-parsing; spawning always uses the structured form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Immutable per-invocation settings for talking to the remote platform.
///
/// Built once from [`Config`] at process start; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct RunContext {
    platform_exe: String,
    run_prefix: Vec<String>,
    git_remote: String,
    git_branch: String,
}

impl RunContext {
    pub fn from_config(config: &Config) -> SkiffResult<Self> {
        let run_prefix: Vec<String> = config
            .platform
            .run
            .split_whitespace()
            .map(String::from)
            .collect();

        if config.platform.executable.is_empty() || run_prefix.is_empty() {
            return Err(SkiffError::InvalidConfig {
                path: "skiff.toml".into(),
                message: "platform.executable and platform.run must be non-empty".to_string(),
            });
        }

        Ok(Self {
            platform_exe: config.platform.executable.clone(),
            run_prefix,
            git_remote: config.deploy.git_remote.clone(),
            git_branch: config.deploy.branch.clone(),
        })
    }

    /// Start a platform CLI command (`heroku ...`).
    pub fn platform(&self) -> CommandLine {
        CommandLine::new(self.platform_exe.as_str())
    }

    /// Build a framework management command behind the remote run prefix
    /// (`heroku run python manage.py ...`).
    pub fn manage<I, S>(&self, args: I) -> CommandLine
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine::new(self.run_prefix[0].as_str())
            .args(self.run_prefix[1..].iter().cloned())
            .args(args)
    }

    /// Build the code push command (`git push <remote> <branch>`).
    pub fn push(&self) -> CommandLine {
        CommandLine::new("git")
            .arg("push")
            .arg(self.git_remote.as_str())
            .arg(self.git_branch.as_str())
    }
}
