use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    terminal::Status, Agent, GameState, MinimaxAgent, Player, SearchConfig, SearchMode,
};

mod display;
mod players;
mod simulate;

use players::{HumanPlayer, RandomPlayer};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans sharing the keyboard
    TwoPlayer,
    /// Play against plain minimax
    Minimax,
    /// Play against minimax with alpha-beta pruning
    AlphaBeta,
}

impl Mode {
    /// The search the engine runs in this mode, `None` when no engine plays
    fn search_mode(self) -> Option<SearchMode> {
        match self {
            Mode::TwoPlayer => None,
            Mode::Minimax => Some(SearchMode::Minimax),
            Mode::AlphaBeta => Some(SearchMode::AlphaBeta),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "connect4",
    about = "Play Connect 4 against a depth-bounded minimax agent"
)]
struct Args {
    /// Who is playing
    #[arg(long, value_enum, default_value_t = Mode::AlphaBeta)]
    mode: Mode,

    /// Plies the AI looks ahead
    #[arg(long, default_value_t = 5)]
    depth: usize,

    /// Let the AI play first
    #[arg(long)]
    ai_first: bool,

    /// Play this many AI vs random games instead of an interactive game,
    /// needs an AI mode
    #[arg(long)]
    simulate: Option<usize>,

    /// Compare node counts of minimax and alpha-beta over one game, whatever the mode
    #[arg(long)]
    compare: bool,

    /// Seed for the random player and the random fallback
    #[arg(long, default_value_t = 1u64)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(games) = args.simulate {
        let search_mode = match args.mode.search_mode() {
            Some(search_mode) => search_mode,
            None => bail!("--simulate needs --mode minimax or --mode alpha-beta"),
        };
        let config = SearchConfig::new(args.depth, search_mode);
        return simulate::simulate(config, games, args.seed);
    }
    if args.compare {
        return simulate::compare(args.depth, args.seed);
    }

    println!("Welcome to Connect 4\n");

    // two humans never consult the engine, the config is only a placeholder
    let search_mode = args.mode.search_mode().unwrap_or(SearchMode::AlphaBeta);
    let config = SearchConfig::new(args.depth, search_mode);

    let mut state = GameState::new();
    let mut fallback = RandomPlayer::new(args.seed);
    loop {
        play_game(&mut state, &args, config, &mut fallback)?;
        if !ask_yes_no("Play again? y/n: ")? {
            break;
        }
        state.reset();
    }
    Ok(())
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin().read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play_game(
    state: &mut GameState,
    args: &Args,
    config: SearchConfig,
    fallback: &mut RandomPlayer,
) -> Result<()> {
    let mut human = HumanPlayer;
    let mut engine = MinimaxAgent::new(config);

    // game loop
    loop {
        display::show(state.board());

        match state.status() {
            Status::Playing => {}
            Status::PlayerOneWin => {
                println!("Player 1 wins!");
                return Ok(());
            }
            Status::PlayerTwoWin => {
                println!("Player 2 wins!");
                return Ok(());
            }
            Status::Draw => {
                println!("Draw!");
                return Ok(());
            }
        }

        let engine_turn = args.mode != Mode::TwoPlayer
            && (state.current_player() == Player::PlayerOne) == args.ai_first;

        let next_move = if engine_turn {
            println!("{} is thinking...", engine.name());
            stdout().flush()?;

            match engine.get_move(state) {
                Ok(column) => {
                    if let Some((result, elapsed)) = engine.last_search() {
                        println!(
                            "AI selected column {} in {:.4} seconds, nodes evaluated: {}",
                            column + 1,
                            elapsed.as_secs_f64(),
                            result.node_count
                        );
                    }
                    column
                }
                Err(err) => {
                    println!("AI could not find a valid move ({}).", err);
                    println!("Fallback: choosing a random valid column.");
                    fallback.pick(state)?
                }
            }
        } else {
            human.get_move(state)?
        };

        if let Err(err) = state.play_checked(next_move) {
            println!("{}", err);
            // try the move again
            continue;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_player_mode_has_no_engine() {
        assert_eq!(Mode::TwoPlayer.search_mode(), None);
        assert_eq!(Mode::Minimax.search_mode(), Some(SearchMode::Minimax));
        assert_eq!(Mode::AlphaBeta.search_mode(), Some(SearchMode::AlphaBeta));
    }

    #[test]
    fn parses_simulation_flags() {
        let args = Args::try_parse_from(["connect4", "--mode", "two-player", "--simulate", "3"])
            .unwrap();
        assert_eq!(args.mode, Mode::TwoPlayer);
        assert_eq!(args.simulate, Some(3));
        assert!(args.mode.search_mode().is_none());
    }
}
