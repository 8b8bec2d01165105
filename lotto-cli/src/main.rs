mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::CliConfig;
use lotto_core::LottoError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lottery number generator and draw checker")]
#[command(version)]
struct Cli {
    /// Data directory holding config.json, tickets.json and draws.json
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one random set of six numbers
    Generate(commands::GenerateArgs),

    /// Generate nine sets that together cover every number 1-49
    System(commands::GenerateArgs),

    /// Check a user's tickets against draws in a date window
    Check(commands::CheckArgs),

    /// Check an ad-hoc set of numbers against draws in a date window
    Compare(commands::CompareArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_engine={},lotto_core={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(CliConfig::default_data_dir);

    let config = match CliConfig::load(&data_dir).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Generate(args) => commands::handle_generate(args),
        Commands::System(args) => commands::handle_system(args),
        Commands::Check(args) => commands::handle_check(args, &config).await,
        Commands::Compare(args) => commands::handle_compare(args, &config).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<LottoError>() {
            Some(LottoError::RangeTooWide { days, max }) => {
                eprintln!("Error: Date range too wide");
                eprintln!("Requested: {} days, Allowed: {} days", days, max);
                eprintln!("Narrow --from/--to or raise max_range_days in config.json");
            }
            Some(LottoError::InvalidNumbers(_)) => {
                eprintln!("Error: {}", e);
                eprintln!("Give six distinct numbers from 1 to 49, e.g. \"5,14,23,29,37,41\"");
            }
            Some(LottoError::Serialization(_)) => {
                eprintln!("Error: {:#}", e);
                eprintln!("Expected a JSON array of tickets or draws, each with six distinct numbers in 1-49");
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
