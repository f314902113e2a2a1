mod config;
mod game_state;
mod input;
mod scoreboard;
mod session;

use std::io::{self, BufRead, Write};

use clap::Parser;
use common::config::Validate;
use common::{log, logger};

use config::{CONFIG_FILE, FirstPlayerMode, get_config_manager, validate_player_name};
use session::Session;

const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a computer that never loses")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Your name, overrides the config file
    #[arg(long)]
    name: Option<String>,

    /// Who moves first, overrides the config file
    #[arg(long, value_enum)]
    first: Option<FirstPlayerMode>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = get_config_manager(&args.config)
        .get_config()
        .inspect_err(|e| log!("Failed to load {}: {}", args.config, e))?;

    if let Some(first) = args.first {
        config.first_player = first;
    }
    if let Some(name) = args.name {
        config.player_name = Some(name.trim().to_string());
    }
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();

    let player_name = match config.player_name {
        Some(name) => name,
        None => prompt_player_name(&mut input, &mut stdout.lock())?,
    };

    log!(
        "Starting session for {} ({:?} moves first)",
        player_name,
        config.first_player
    );

    let mut session = Session::new(
        input,
        stdout.lock(),
        player_name,
        config.first_player,
        config.show_cell_numbers,
    );
    session.run()?;

    Ok(())
}

fn prompt_player_name(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    loop {
        write!(output, "Enter your name [{}]: ", DEFAULT_PLAYER_NAME)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(DEFAULT_PLAYER_NAME.to_string());
        }

        let name = line.trim();
        if name.is_empty() {
            return Ok(DEFAULT_PLAYER_NAME.to_string());
        }
        match validate_player_name(name) {
            Ok(()) => return Ok(name.to_string()),
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}
