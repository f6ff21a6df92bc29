mod cli;
mod commands;
mod completions;
mod config;
mod error;
mod output;
mod setup;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use folio_core::paths;
use setup::{prepare_core, resolve_db_path};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        error::handle_error(err);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::CliConfig::load();

    // Configure logging: always write to file so stdout stays clean for --format json
    let file_appender = tracing_appender::rolling::daily(paths::logs_dir()?, "folio.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    let format = cli.format;
    let command = match cli.command {
        Commands::Completions { shell } => {
            completions::generate_completions(shell);
            return Ok(());
        }
        Commands::Contact { command } => return commands::contact::run(&config, command, format),
        command => command,
    };

    let db_path = resolve_db_path(cli.db_path, &config)?;
    let core = prepare_core(&db_path)?;

    match command {
        Commands::Status => commands::status::run(&core, &db_path, format),
        Commands::Login(args) => commands::session::login(&core, args, format),
        Commands::Logout => commands::session::logout(&core, format),
        Commands::Project { command } => commands::project::run(&core, command, format),
        Commands::Service { command } => commands::service::run(&core, command, format),
        Commands::Dashboard => commands::dashboard::run(&core, format),
        Commands::Reset { collection } => commands::maintenance::reset(&core, collection, format),
        Commands::Completions { .. } | Commands::Contact { .. } => Ok(()),
    }
}
