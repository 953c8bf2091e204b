//! The deployment pipeline: bootstrap, destroy, and standalone steps.
//!
//! Bootstrap is a fixed linear chain with no branching and no retry.
//! Each guarded step delegates its continue-or-abort decision to
//! [`GuardedRunner`]; the database and static-file steps call the
//! executor directly, so their failures surface as raw step errors.
//! Re-running bootstrap replays the whole chain against whatever state
//! the platform is in; idempotence is the operator's responsibility.

use crate::application::guard::GuardedRunner;
use crate::config::Config;
use crate::domain::command::{CommandLine, RunContext};
use crate::domain::ports::{CommandExecutor, Prompter};
use crate::error::{SkiffError, SkiffResult};
use crate::ui::Reporter;

pub struct Pipeline<'a> {
    ctx: &'a RunContext,
    config: &'a Config,
    executor: &'a dyn CommandExecutor,
    prompter: &'a dyn Prompter,
    reporter: Reporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        ctx: &'a RunContext,
        config: &'a Config,
        executor: &'a dyn CommandExecutor,
        prompter: &'a dyn Prompter,
        reporter: Reporter,
    ) -> Self {
        Self {
            ctx,
            config,
            executor,
            prompter,
            reporter,
        }
    }

    fn guard(&self) -> GuardedRunner<'a> {
        GuardedRunner::new(self.executor, self.prompter, self.reporter)
    }

    /// Run an unguarded step: failure is an error, not a question.
    fn step(&self, command: &CommandLine) -> SkiffResult<()> {
        self.reporter.command(command);
        let result = self.executor.run(command);
        if result.success {
            self.reporter.output(&result);
            Ok(())
        } else {
            self.reporter.failure(&result);
            Err(SkiffError::StepFailed {
                command: command.to_string(),
                code: result.code,
            })
        }
    }

    /// Bring a new app all the way up: create it, install add-ons, set
    /// config vars, push code, sync and migrate the database, publish
    /// static assets, and validate monitoring.
    pub fn bootstrap(&self, app_name: Option<&str>) -> SkiffResult<()> {
        let guard = self.guard();

        self.create_app(app_name)?;

        for addon in &self.config.addons {
            guard.run(
                &self.ctx.platform().arg("addons:add").arg(addon.as_str()),
                Some(&format!(
                    "Couldn't add {} to your app, continue anyway?",
                    addon
                )),
            )?;
        }

        for var in &self.config.vars {
            guard.run(
                &self.ctx.platform().arg("config:add").arg(var.as_str()),
                Some(&format!("Couldn't set {} on your app, continue anyway?", var)),
            )?;
        }

        guard.run(
            &self.ctx.push(),
            Some("Couldn't push your application, continue anyway?"),
        )?;

        self.syncdb()?;
        self.migrate(None)?;
        self.collectstatic()?;
        self.compress()?;

        guard.run(
            &self
                .ctx
                .manage(["newrelic-admin", "validate-config", "-", "stdout"]),
            Some("Couldn't validate monitoring, continue anyway?"),
        )?;

        Ok(())
    }

    /// Create a new app, platform-named when `name` is not given.
    pub fn create_app(&self, name: Option<&str>) -> SkiffResult<()> {
        let mut command = self.ctx.platform().arg("create");
        if let Some(name) = name {
            command = command.arg(name);
        }
        self.guard()
            .run(&command, Some("Couldn't create the app, continue anyway?"))
    }

    /// Destroy the remote application. Deliberately unprompted on our
    /// side; the platform's own confirmation is the only gate.
    pub fn destroy(&self) -> SkiffResult<()> {
        self.step(&self.ctx.platform().arg("apps:destroy"))
    }

    /// Non-interactive database sync on the platform.
    pub fn syncdb(&self) -> SkiffResult<()> {
        self.step(&self.ctx.manage(["syncdb", "--noinput"]))
    }

    /// Apply migrations, site-wide or scoped to one named app.
    pub fn migrate(&self, app: Option<&str>) -> SkiffResult<()> {
        let command = match app {
            Some(app) => self.ctx.manage(["migrate", app, "--noinput"]),
            None => self.ctx.manage(["migrate", "--noinput"]),
        };
        self.step(&command)
    }

    /// Collect static files to the configured storage target.
    pub fn collectstatic(&self) -> SkiffResult<()> {
        self.step(&self.ctx.manage(["collectstatic", "--noinput"]))
    }

    /// Compress published static assets.
    pub fn compress(&self) -> SkiffResult<()> {
        self.step(&self.ctx.manage(["compress"]))
    }
}
