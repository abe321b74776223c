mod bot_controller;
mod config;
mod input;
mod session;

use std::time::Duration;

use clap::Parser;
use snake_common::{SessionRng, log, logger};
use tokio::io::BufReader;
use tokio::sync::mpsc;

use session::{SnakeSession, SnakeSessionSettings};

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    /// Let the built-in bot steer instead of waiting for input.
    #[arg(long)]
    autopilot: bool,

    /// Save the effective config back to `--config`.
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = config::get_config_manager(&args.config);
    let config = config_manager.get_config()?;
    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", args.config);
    }

    let settings = SnakeSessionSettings::from_config(&config, args.autopilot)?;
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Seed: {}", rng.seed());

    let runtime = tokio::runtime::Runtime::new()?;
    let summary = runtime.block_on(async {
        let (sender, receiver) = mpsc::unbounded_channel();
        let reader = tokio::spawn(input::read_commands(
            BufReader::new(tokio::io::stdin()),
            sender,
        ));
        let summary = SnakeSession::run(settings, rng, receiver).await;
        reader.abort();
        summary
    });
    // stdin reads block a runtime thread that never finishes on its own
    runtime.shutdown_timeout(Duration::from_millis(100));

    for (index, game) in summary.games.iter().enumerate() {
        log!(
            "Game {}: score {} in {} ticks ({:?})",
            index + 1,
            game.score,
            game.ticks,
            game.end
        );
    }
    log!("Best score: {} (seed {})", summary.best_score(), summary.seed);

    Ok(())
}
