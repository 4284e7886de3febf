mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use mealplan::config::{default_config_path, PlannerConfig};

#[derive(Parser)]
#[command(name = "mealplan", version, about = "Generate today's meal plan with a local LLM")]
struct Cli {
    /// Config file (default: ~/.mealplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate, store and send today's meal plan (default)
    Run,
    /// Create the meals table and print the database location
    InitDb,
    /// Show meals from the last few days
    History {
        #[arg(long, default_value_t = 3)]
        days: u32,
    },
    /// Send a test WhatsApp message
    NotifyTest,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = PlannerConfig::load_from(&config_path)?;

    mealplan::logging::init(&config.logging, &config.resolved_log_dir());
    if !config_path.exists() {
        tracing::info!("no config file at {}, using defaults", config_path.display());
    }

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            if let Err(e) = mealplan::plan::run_daily_plan(&config).await {
                tracing::error!(error = %e, "meal plan run failed");
                std::process::exit(1);
            }
        }
        Command::InitDb => cli::init_db(&config)?,
        Command::History { days } => cli::history(&config, days)?,
        Command::NotifyTest => cli::notify_test(&config).await?,
    }

    Ok(())
}
