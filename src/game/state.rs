use crate::error::GameError;

use super::board::{Board, Position, LINE_LENGTH};
use super::player::Player;
use super::snapshot::BoardSnapshot;

/// Whether a finished game still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Only range and fullness are checked; moves after a win are accepted
    /// and never change the recorded winner.
    #[default]
    Permissive,
    /// Moves are rejected with [`GameError::GameOver`] once the game is won
    /// or drawn.
    StopAtGameOver,
}

/// Typed game status for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Player },
    Won(Player),
    Draw,
}

/// A single game of Connect Four. Mutated in place and reused across
/// games through [`GameState::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Player,
    last_mover: Option<Player>,
    winner: Option<Player>,
    winning_line: Option<[Position; LINE_LENGTH]>,
    policy: MovePolicy,
}

impl GameState {
    /// Create an empty `rows` x `columns` game with Red to move.
    pub fn new(rows: usize, columns: usize) -> Result<Self, GameError> {
        Self::with_policy(rows, columns, MovePolicy::default())
    }

    pub fn with_policy(
        rows: usize,
        columns: usize,
        policy: MovePolicy,
    ) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::new(rows, columns)?,
            current_turn: Player::Red, // Red starts
            last_mover: None,
            winner: None,
            winning_line: None,
            policy,
        })
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Drop the current player's disc into `column` and return where it
    /// landed.
    ///
    /// After the disc lands the turn passes to the other player and, unless
    /// a winner is already recorded, the board is scanned for a line of the
    /// mover's discs. The scan covers the whole board on every move, which
    /// costs O(rows * columns); boards are small and moves human-paced.
    pub fn submit_move(&mut self, column: isize) -> Result<Position, GameError> {
        let col = match usize::try_from(column) {
            Ok(col) if col < self.columns() => col,
            _ => {
                tracing::debug!(column, "move rejected: column out of range");
                return Err(GameError::ColumnOutOfRange {
                    column,
                    columns: self.columns(),
                });
            }
        };

        if self.policy == MovePolicy::StopAtGameOver && self.is_game_over() {
            tracing::debug!(column, "move rejected: game over");
            return Err(GameError::GameOver);
        }

        let mover = self.current_turn;
        let row = self.board.drop_disc(col, mover).inspect_err(|_| {
            tracing::debug!(column, "move rejected: column full");
        })?;

        self.last_mover = Some(mover);
        self.current_turn = mover.other();
        tracing::debug!(row, column, player = mover.name(), "disc placed");

        if self.winner.is_none() {
            if let Some(line) = self.board.find_line(mover) {
                self.winner = Some(mover);
                self.winning_line = Some(line);
                tracing::info!(player = mover.name(), "game won");
            } else if self.board.is_full() {
                tracing::info!("game drawn");
            }
        }

        Ok(Position::new(row, col))
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.is_game_over() {
            None
        } else {
            Some(self.current_turn)
        }
    }

    /// Player who made the most recent accepted move
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// True once someone has won or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.board.is_full()
    }

    /// The recorded winner. `None` both while playing and after a draw.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The four cells that won the game, if it has been won.
    pub fn winning_line(&self) -> Option<[Position; LINE_LENGTH]> {
        self.winning_line
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress {
                to_move: self.current_turn,
            },
        }
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Columns that can still take a disc
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Copy of the current grid
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Back to an empty board with Red to move. Dimensions and move policy
    /// are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Player::Red;
        self.last_mover = None;
        self.winner = None;
        self.winning_line = None;
        tracing::debug!(rows = self.rows(), columns = self.columns(), "game reset");
    }
}
