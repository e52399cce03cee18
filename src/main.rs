//! Gomoku AI Engine CLI
//!
//! Play against the engine in a terminal, or ask it for a move in a given
//! position.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use log::LevelFilter;

use gomoku::{
    apply_move, AIEngine, Board, Difficulty, GameSession, GameStatus, Pos, SearchConfig, Stone,
    BOARD_SIZE,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log output (-v debug, -vv trace); RUST_LOG also works
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against the engine
    Play {
        /// Search depth, 1 (easy) to 4 (expert)
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
        difficulty: u8,

        /// Let the engine play Black and move first
        #[arg(long, default_value_t = false)]
        ai_first: bool,
    },
    /// Print the engine's move after a sequence of moves
    Suggest {
        /// Moves as "row,col;row,col;...", alternating from Black
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Search depth in plies
        #[arg(short, long, default_value_t = 2)]
        depth: u8,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Play { difficulty, ai_first } => play(Difficulty::try_from(difficulty)?, ai_first),
        Command::Suggest { moves, depth } => suggest(&moves, depth),
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn play(difficulty: Difficulty, ai_first: bool) -> Result<(), Box<dyn Error>> {
    let human = if ai_first { Stone::White } else { Stone::Black };
    let mut game = GameSession::new(difficulty, human)?;

    println!("===========================================");
    println!("       Gomoku - {} (you play {})", difficulty.display_name(), human.symbol());
    println!("===========================================");
    println!("Enter moves as `row col`; also `undo`, `reset`, `level N`, `quit`.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if game.is_ai_turn() {
            run_ai(&mut game)?;
        }
        print_board(game.board());
        if report_status(game.status()) {
            println!("Type `reset` for a new game or `quit` to exit.");
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["quit" | "q" | "exit"] => return Ok(()),
            ["undo"] => {
                if let Err(e) = game.undo() {
                    println!("Cannot undo: {e}");
                }
            }
            ["reset"] => game.reset(),
            ["level", n] => match n.parse::<u8>().ok().map(Difficulty::try_from) {
                Some(Ok(level)) => {
                    game.set_difficulty(level);
                    println!("Difficulty: {}", level.display_name());
                }
                _ => println!("Difficulty must be 1 to 4"),
            },
            [row, col] => match parse_pos(row, col) {
                Some(pos) => {
                    if let Err(e) = game.play(pos) {
                        println!("{e}");
                    }
                }
                None => println!("Row and column must be numbers 0 to {}", BOARD_SIZE - 1),
            },
            _ => println!("Unrecognised input: {line}"),
        }
    }
}

fn run_ai(game: &mut GameSession) -> Result<(), Box<dyn Error>> {
    match game.ai_move()? {
        Some(pos) => {
            print!("AI plays ({}, {})", pos.row, pos.col);
            if let Some(result) = game.last_ai_result() {
                print!(
                    " [{}ms, {} nodes, {} cutoffs, score {}]",
                    result.time_ms, result.nodes, result.stats.beta_cutoffs, result.score
                );
            }
            println!();
        }
        None => println!("AI has no move"),
    }
    Ok(())
}

/// Print the game result; true once the game is over.
fn report_status(status: &GameStatus) -> bool {
    match status {
        GameStatus::InProgress => false,
        GameStatus::Won { winner, line } => {
            let cells: Vec<String> = line.iter().map(|p| format!("({}, {})", p.row, p.col)).collect();
            println!("{} wins: {}", winner.symbol(), cells.join(" "));
            true
        }
        GameStatus::Draw => {
            println!("Draw");
            true
        }
    }
}

fn suggest(moves: &str, depth: u8) -> Result<(), Box<dyn Error>> {
    let mut board = Board::new();
    let mut side = Stone::Black;

    for token in moves.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        let pos = token
            .split_once(',')
            .and_then(|(r, c)| parse_pos(r.trim(), c.trim()))
            .ok_or_else(|| format!("bad move `{token}`, expected row,col"))?;
        apply_move(&mut board, pos, side)?;
        side = side.opponent();
    }

    print_board(&board);

    let mut engine = AIEngine::with_config(SearchConfig::with_depth(depth));
    let result = engine.get_move_with_stats(&mut board, side)?;
    match result.best_move {
        Some(pos) => {
            println!("{} plays: ({}, {})", side.symbol(), pos.row, pos.col);
            println!("  Score: {}", result.score);
            println!("  Depth: {}", result.depth);
            println!("  Time: {}ms", result.time_ms);
            println!("  Nodes: {}", result.nodes);
            println!(
                "  Cutoffs: {} ({:.1}% on first move)",
                result.stats.beta_cutoffs,
                result.stats.first_move_rate()
            );
        }
        None => println!("No move available (board full)"),
    }
    Ok(())
}

fn parse_pos(row: &str, col: &str) -> Option<Pos> {
    Pos::try_new(row.parse().ok()?, col.parse().ok()?)
}

fn print_board(board: &Board) {
    let last = board.last_move().map(|m| m.pos);
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!("{c:>3}");
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{r:>3}");
        for c in 0..BOARD_SIZE {
            let pos = Pos::new(r as u8, c as u8);
            let symbol = board.get(pos).symbol();
            if last == Some(pos) {
                print!("[{symbol}]");
            } else {
                print!(" {symbol} ");
            }
        }
        println!();
    }
}
