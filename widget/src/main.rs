//! Draw a chess position in the terminal and apply edits to it

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use env_logger::Env;
use log::{debug, error};
use widget::{Action, ChessBoard, Config, TextRenderer};

#[derive(Debug, Parser)]
#[command(name = "chess-board", version, about)]
struct Args {
    /// The starting position as FEN, or `start`
    ///
    /// Overrides the position from the config file.
    #[arg(long)]
    fen: Option<String>,

    /// Draw pieces as Unicode chess symbols
    #[arg(long)]
    unicode: bool,

    /// Draw the board after every action, not just at the end
    #[arg(long)]
    each: bool,

    /// A YAML config file
    #[arg(long, env = "CHESS_BOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Edits to apply in order: `e2-e4`, `e4=Q`, `e4=`, `clear` or `fen:<FEN>`
    actions: Vec<Action>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let mut options = config.render;
    options.unicode |= args.unicode;
    let fen = args.fen.unwrap_or(config.position);

    let mut board = ChessBoard::from_fen(&fen, TextRenderer::new(), options)?;
    for action in &args.actions {
        debug!("Applying {action:?}");
        board.apply(action)?;
        if args.each {
            println!("{}", board.renderer().frame());
        }
    }
    if !args.each {
        print!("{}", board.renderer().frame());
    }
    println!("{}", board.fen());
    Ok(())
}

fn main() -> ExitCode {
    let env = Env::default().filter_or("CHESS_BOARD_LOG", "info");
    env_logger::Builder::from_env(env).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
