/// Errors surfaced by the board, the game state and the agents.
///
/// None of these are fatal to the process; the driver decides whether to
/// re-prompt, fall back to another move or end the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid move, column {column} {reason}")]
    InvalidColumn { column: usize, reason: ColumnFault },

    #[error("no legal moves, the game is already over")]
    NoLegalMoves,

    #[error("search depth {max_depth} cannot choose a move")]
    DepthMisconfiguration { max_depth: usize },

    #[error("Invalid position, game is over")]
    GameOver,

    #[error("could not parse '{0}' as a valid move")]
    UnparsableMove(char),

    #[error("move input unavailable: {0}")]
    InputUnavailable(String),
}

/// Why a column was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFault {
    OutOfRange,
    Full,
}

impl std::fmt::Display for ColumnFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnFault::OutOfRange => write!(f, "out of range"),
            ColumnFault::Full => write!(f, "full"),
        }
    }
}

impl EngineError {
    pub fn out_of_range(column: usize) -> Self {
        EngineError::InvalidColumn {
            column,
            reason: ColumnFault::OutOfRange,
        }
    }

    pub fn full(column: usize) -> Self {
        EngineError::InvalidColumn {
            column,
            reason: ColumnFault::Full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_column_display() {
        assert_eq!(
            EngineError::full(3).to_string(),
            "Invalid move, column 3 full"
        );
        assert_eq!(
            EngineError::out_of_range(9).to_string(),
            "Invalid move, column 9 out of range"
        );
    }

    #[test]
    fn depth_display() {
        let err = EngineError::DepthMisconfiguration { max_depth: 0 };
        assert_eq!(err.to_string(), "search depth 0 cannot choose a move");
    }
}
