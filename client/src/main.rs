mod bot_turn;
mod config;
mod input;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};
use tokio::io::BufReader;

use config::get_config_manager;
use runner::{GameRunner, RunnerSettings};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax computer player")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config file. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `display.result_delay_ms` from the config file.
    #[arg(long)]
    result_delay_ms: Option<u64>,

    /// Search the computer's options on a single task.
    #[arg(long)]
    sequential_search: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(args.config).get_config()?;
    if let Some(delay) = args.result_delay_ms {
        config.display.result_delay_ms = delay;
    }
    if args.sequential_search {
        config.search.parallel = false;
    }
    config.validate()?;
    log!("Starting with config {:?}", config);

    let mut runner = GameRunner::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        RunnerSettings::from(&config),
    );
    runner.run().await?;

    log!("Session over, score {}", runner.state().score);
    Ok(())
}
