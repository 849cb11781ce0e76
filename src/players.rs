use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{Agent, EngineError, GameState, WIDTH};

/// Reads 1-indexed columns from stdin, asking again until a legal one is given
pub struct HumanPlayer;

impl Agent for HumanPlayer {
    fn get_move(&mut self, state: &GameState) -> Result<usize, EngineError> {
        loop {
            print!("Player {} move input > ", state.current_player().number());
            stdout()
                .flush()
                .map_err(|err| EngineError::InputUnavailable(err.to_string()))?;

            let mut input_str = String::new();
            let read = stdin()
                .read_line(&mut input_str)
                .map_err(|err| EngineError::InputUnavailable(err.to_string()))?;
            if read == 0 {
                return Err(EngineError::InputUnavailable("end of input".to_string()));
            }

            match input_str.trim().parse::<usize>() {
                Ok(column @ 1..=WIDTH) if state.board().is_valid_move(column - 1) => {
                    return Ok(column - 1)
                }
                Ok(column) => println!("Invalid move, column {} is not playable", column),
                Err(_) => println!("Invalid number: {}", input_str.trim()),
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}

/// Picks uniformly among the legal columns
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random legal column, used both as a player and as a fallback
    pub fn pick(&mut self, state: &GameState) -> Result<usize, EngineError> {
        state
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoLegalMoves)
    }
}

impl Agent for RandomPlayer {
    fn get_move(&mut self, state: &GameState) -> Result<usize, EngineError> {
        self.pick(state)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
