//! Terminal output helpers.
//!
//! Human-oriented only: Skiff is an interactive tool and prints for the
//! operator, not for machines.

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::domain::command::CommandLine;
use crate::domain::ports::ExecOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "JENKINS_HOME", "BUILDKITE", "CIRCLECI"];
    KEYS.iter().any(|k| get_env(k).is_some())
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    KEYS.iter().any(|k| {
        get_env(k)
            .map(|v| v.to_lowercase().contains("utf"))
            .unwrap_or(false)
    })
}

/// Per-step progress output for the deployment pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
    unicode: bool,
}

impl Reporter {
    pub fn new(caps: TerminalCapabilities) -> Self {
        Self {
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    /// Plain ASCII, uncolored output. Used in tests.
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    fn arrow(&self) -> &'static str {
        if self.unicode {
            "→"
        } else {
            "->"
        }
    }

    fn cross(&self) -> String {
        let s = if self.unicode { "✗" } else { "x" };
        if self.color {
            s.red().to_string()
        } else {
            s.to_string()
        }
    }

    /// Announce a step before it runs.
    pub fn command(&self, command: &CommandLine) {
        println!("{} {}", self.arrow(), command);
    }

    /// Report a failed step with its captured stderr.
    pub fn failure(&self, result: &ExecOutput) {
        println!("{} failed (exit status {})", self.cross(), result.code);
        for line in result.stderr.lines() {
            println!("    {}", line);
        }
    }

    /// Echo captured output from a completed management command.
    pub fn output(&self, result: &ExecOutput) {
        for line in result.stdout.lines() {
            println!("  {}", line);
        }
    }
}
