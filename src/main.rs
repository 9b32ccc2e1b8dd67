use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use connect_four::config::GameConfig;
use connect_four::engine::{ComputerPlayer, GameEngine, HumanPlayer, MoveSource};
use connect_four::error::AppError;
use connect_four::game::Disc;
use connect_four::ui::{Console, UserIo};

/// Console Connect Four.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML config file with board dimensions
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override the number of columns
    #[arg(long)]
    cols: Option<usize>,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    config.validate()?;
    log::debug!("playing on a {}x{} board", config.rows, config.cols);

    let mut console = Console::stdio();
    console.say("Let's Play Connect 4!")?;

    let Some((first, second)) = setup_players(&mut console)? else {
        return Ok(()); // input ended during setup
    };

    let mut engine = GameEngine::new(&config, first, second)?;
    engine.run(&mut console)?;
    Ok(())
}

/// Prompt for player names and the opponent mode (second human vs. easy
/// computer). Returns `None` if the input stream ends mid-setup.
fn setup_players<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<(Box<dyn MoveSource>, Box<dyn MoveSource>)>> {
    let Some(name) = console.ask("Player One please enter your name: ")? else {
        return Ok(None);
    };
    let first: Box<dyn MoveSource> =
        Box::new(HumanPlayer::new(name_or(&name, "Player One"), Disc::Red));

    let Some(answer) =
        console.ask("Do you want to play with an easy computer opponent? (y/n): ")?
    else {
        return Ok(None);
    };

    let second: Box<dyn MoveSource> = if answer.trim().eq_ignore_ascii_case("y") {
        Box::new(ComputerPlayer::new("Computer", Disc::Yellow))
    } else {
        let Some(name) = console.ask("Player Two please enter your name: ")? else {
            return Ok(None);
        };
        Box::new(HumanPlayer::new(name_or(&name, "Player Two"), Disc::Yellow))
    };

    Ok(Some((first, second)))
}

fn name_or(entry: &str, fallback: &str) -> String {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
