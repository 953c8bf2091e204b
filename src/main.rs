//! Skiff CLI - deployment bootstrapper for Heroku-style platforms
//!
//! Usage: skiff <COMMAND>
//!
//! Commands:
//!   bootstrap      Bring a new app all the way up to production
//!   create         Create a new app on the platform
//!   destroy        Destroy the remote application
//!   syncdb         Sync the remote database
//!   migrate        Apply migrations, site-wide or per app
//!   collectstatic  Publish static files to remote storage
//!   compress       Compress published static assets

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use skiff::application::Pipeline;
use skiff::config::Config;
use skiff::domain::command::RunContext;
use skiff::domain::ports::Prompter;
use skiff::infrastructure::{AssumeYes, SystemExecutor, TerminalPrompter};
use skiff::ui::{detect_capabilities, Reporter};
use skiff::SkiffError;

/// Skiff - deployment bootstrapper for Heroku-style platforms
#[derive(Parser, Debug)]
#[command(name = "skiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Skiff configuration file
    #[arg(short, long, default_value = "skiff.toml")]
    config: PathBuf,

    /// Answer yes to every continue-anyway prompt
    #[arg(short, long)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the app, install add-ons, set config vars, push code,
    /// migrate, publish static assets, and validate monitoring
    Bootstrap {
        /// App name; the platform picks one if omitted
        app_name: Option<String>,
    },

    /// Create a new app, autonamed when no name is given
    Create {
        /// App name; the platform picks one if omitted
        app_name: Option<String>,
    },

    /// Destroy the remote application. This really is permanent
    Destroy,

    /// Run a non-interactive database sync on the platform
    Syncdb,

    /// Apply migrations. Site-wide unless an app is named
    Migrate {
        /// Framework app to migrate
        app: Option<String>,
    },

    /// Collect static files and publish them to remote storage
    Collectstatic,

    /// Compress published static assets
    Compress,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        match err.downcast_ref::<SkiffError>() {
            // The abort diagnostic is a fixed string; print it bare.
            Some(SkiffError::Aborted) => eprintln!("{}", err),
            _ => eprintln!("error: {:#}", err),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default(&cli.config)?;
    let ctx = RunContext::from_config(&config)?;
    let reporter = Reporter::new(detect_capabilities());

    let executor = SystemExecutor;
    let prompter: Box<dyn Prompter> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalPrompter)
    };

    let pipeline = Pipeline::new(&ctx, &config, &executor, prompter.as_ref(), reporter);

    match cli.command {
        Commands::Bootstrap { app_name } => cmd_bootstrap(&pipeline, &config, app_name.as_deref()),
        Commands::Create { app_name } => cmd_create(&pipeline, app_name.as_deref()),
        Commands::Destroy => cmd_destroy(&pipeline),
        Commands::Syncdb => Ok(pipeline.syncdb()?),
        Commands::Migrate { app } => Ok(pipeline.migrate(app.as_deref())?),
        Commands::Collectstatic => Ok(pipeline.collectstatic()?),
        Commands::Compress => Ok(pipeline.compress()?),
    }
}

fn cmd_bootstrap(
    pipeline: &Pipeline,
    config: &Config,
    app_name: Option<&str>,
) -> Result<()> {
    println!("🚀 Skiff Bootstrap");
    match app_name {
        Some(name) => println!("App: {}", name),
        None => println!("App: (platform-assigned)"),
    }
    println!(
        "Steps: create, {} add-ons, {} config vars, push, syncdb, migrate, collectstatic, compress, monitoring",
        config.addons.len(),
        config.vars.len()
    );
    println!();

    pipeline.bootstrap(app_name)?;

    println!();
    println!("✓ Bootstrap complete");
    Ok(())
}

fn cmd_create(pipeline: &Pipeline, app_name: Option<&str>) -> Result<()> {
    println!("📦 Skiff Create");
    Ok(pipeline.create_app(app_name)?)
}

fn cmd_destroy(pipeline: &Pipeline) -> Result<()> {
    println!("🔥 Skiff Destroy");
    println!("This permanently destroys the remote application.");
    Ok(pipeline.destroy()?)
}
