use clap::Parser;
use owo_colors::{OwoColorize, Style};
use scheduler_core::db;
use scheduler_core::error::{CoreError, RecurrenceError};
use scheduler_core::recurrence::RecurrenceManager;
use scheduler_core::repository::SqliteRepository;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

use cli::{Cli, Commands};
use commands::CommandContext;
use config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = Config::new();
    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    init_tracing(&log_level);

    let config = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "failed to load configuration, using defaults");
        Config::default()
    });

    let json = cli.json;
    if let Err(e) = run(cli, config).await {
        handle_error(e, json);
        std::process::exit(1);
    }
}

fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn open_repository(config: &Config, manager: RecurrenceManager) -> anyhow::Result<SqliteRepository> {
    let pool = db::establish_connection(&config.database_path).await?;
    Ok(SqliteRepository::new(pool, manager))
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let ctx = CommandContext {
        today: parser::resolve_today(cli.today.as_deref())?,
        json: cli.json,
    };
    let manager = RecurrenceManager::new(config.recurrence.clone());

    let command = match cli.command {
        Commands::Next(command) => return commands::next::next_date(&manager, command, &ctx),
        command => command,
    };

    let repository = open_repository(&config, manager).await?;
    let result = dispatch(&repository, command, &ctx).await;
    // Let pending writes reach the file before the process exits.
    repository.close().await;
    result
}

async fn dispatch(
    repository: &SqliteRepository,
    command: Commands,
    ctx: &CommandContext,
) -> anyhow::Result<()> {
    match command {
        Commands::Next(command) => commands::next::next_date(repository.recurrence(), command, ctx),
        Commands::Add(command) => commands::add::add_task(repository, command, ctx).await,
        Commands::List(command) => commands::list::list_tasks(repository, command, ctx).await,
        Commands::Show(command) => commands::show::show_task(repository, command, ctx).await,
        Commands::Edit(command) => commands::edit::edit_task(repository, command, ctx).await,
        Commands::Done(command) => commands::done::done_task(repository, command, ctx).await,
        Commands::Delete(command) => commands::delete::delete_task(repository, command, ctx).await,
    }
}

fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        println!("{}", views::json::error(&format!("{:#}", err)));
        return;
    }

    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(id) => {
                eprintln!("{} Task with ID '{}' not found.", "Error:".style(error_style), id.yellow());
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::Recurrence(e) => print_recurrence_error(e),
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else if let Some(recurrence_error) = err.downcast_ref::<RecurrenceError>() {
        print_recurrence_error(recurrence_error);
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}

fn print_recurrence_error(err: &RecurrenceError) {
    let error_style = Style::new().red().bold();
    match err {
        RecurrenceError::NoMatchFound { rule, after } => {
            eprintln!(
                "{} Rule '{}' never matches after {}",
                "Error:".style(error_style),
                rule.yellow(),
                after
            );
        }
        other => eprintln!("{} {}", "Error:".style(error_style), other),
    }
}
