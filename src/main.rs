use anyhow::Result;
use clap::Parser;
use snake_arcade::game::{GameConfig, GameEngine};
use snake_arcade::logging;
use snake_arcade::modes::HumanMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Snake arcade game for the terminal")]
struct Cli {
    /// JSON file overriding game tunables (board size, speeds, thresholds)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// Disable logging entirely
    #[arg(long)]
    no_log: bool,

    /// Seed for food and obstacle placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = (!cli.no_log).then_some(cli.log_file.as_path());
    logging::init(log_file)?;

    let config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    info!(seed = ?cli.seed, config = ?cli.config, "starting snake arcade");

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    info!(high_score = human_mode.session().high_score(), "goodbye");
    Ok(())
}
