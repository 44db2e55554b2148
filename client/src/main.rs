mod config;
mod offline;
mod state;
mod ui;

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode};
use common::{log, logger};

use config::{get_config_manager, ClientConfig};
use offline::{run_tictactoe_game, RunnerSettings};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Terminal tic-tac-toe against a friend or the computer")]
struct Args {
    /// friend or computer
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium, hard or insane
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(prefix: Option<String>, log_file: Option<&str>) {
    let Some(log_file) = log_file else {
        logger::init_logger(prefix);
        return;
    };

    if let Err(e) = logger::init_file_logger(prefix.clone(), Path::new(log_file)) {
        eprintln!("{}", e);
        logger::init_logger(prefix);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (ClientConfig::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    init_logging(prefix, config.log_file.as_deref());

    let config_loaded = config_error.is_none();
    if let Some(e) = config_error {
        log!("Ignoring config file: {}", e);
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let settings = RunnerSettings {
        mode: args.mode.unwrap_or(config.mode),
        difficulty: args.difficulty.unwrap_or(config.difficulty),
        bot_delay_ms: config.bot_delay_ms,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let final_settings = run_tictactoe_game(&mut input, &mut output, settings, &mut rng)?;

    // An unreadable config file is left as is for the user to fix.
    if config_loaded {
        let updated = ClientConfig {
            mode: final_settings.mode,
            difficulty: final_settings.difficulty,
            ..config
        };
        if let Err(e) = config_manager.set_config(&updated) {
            log!("Failed to save config: {}", e);
        }
    }

    Ok(())
}
