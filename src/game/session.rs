use std::fmt;

use tracing::{debug, info, warn};

use super::{win, Board, Cell, Player, PlayerId, Position};
use crate::error::{GameError, ReplayError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Why a drop was turned down. These are normal game events, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ColumnFull,
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ColumnFull => f.write_str("column is full"),
            Rejection::GameOver => f.write_str("game already over"),
        }
    }
}

/// One accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: PlayerId,
}

/// Result of [`GameSession::drop_piece`], handed back to the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    pub accepted: bool,
    /// Row the piece landed in, when accepted.
    pub row: Option<usize>,
    pub status: GameStatus,
    pub rejection: Option<Rejection>,
}

impl DropOutcome {
    fn accepted(row: usize, status: GameStatus) -> Self {
        DropOutcome {
            accepted: true,
            row: Some(row),
            status,
            rejection: None,
        }
    }

    fn rejected(reason: Rejection, status: GameStatus) -> Self {
        DropOutcome {
            accepted: false,
            row: None,
            status,
            rejection: Some(reason),
        }
    }
}

/// Start a new game on a standard 7x6 board. Player one moves first.
pub fn new_game(player1: Player, player2: Player) -> GameSession {
    GameSession::new(player1, player2)
}

/// One game: owns its board, tracks whose turn it is and when the game ends.
///
/// Status moves from `InProgress` to `Won` or `Tied` exactly once; after that
/// every drop is rejected with [`Rejection::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    status: GameStatus,
    moves: Vec<Move>,
}

impl GameSession {
    pub fn new(player1: Player, player2: Player) -> Self {
        Self::with_board(player1, player2, Board::new())
    }

    /// Start a game on a board of custom dimensions.
    pub fn with_size(
        player1: Player,
        player2: Player,
        width: usize,
        height: usize,
    ) -> Result<Self, GameError> {
        Ok(Self::with_board(player1, player2, Board::with_size(width, height)?))
    }

    fn with_board(player1: Player, player2: Player, board: Board) -> Self {
        debug!(
            width = board.width(),
            height = board.height(),
            player1 = %player1.name,
            player2 = %player2.name,
            "new game"
        );
        GameSession {
            board,
            players: [player1, player2],
            current: PlayerId::One,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Rebuild a 7x6 session by dropping into `columns` in order, alternating
    /// players from player one.
    pub fn replay(
        player1: Player,
        player2: Player,
        columns: &[usize],
    ) -> Result<Self, ReplayError> {
        Self::new(player1, player2).replay_columns(columns)
    }

    /// Continue this session with `columns`, stopping at the first invalid
    /// or rejected drop. Use on a [`with_size`](Self::with_size) session to
    /// replay games on custom boards.
    pub fn replay_columns(mut self, columns: &[usize]) -> Result<Self, ReplayError> {
        for (index, &column) in columns.iter().enumerate() {
            let outcome = self
                .drop_piece(column)
                .map_err(|source| ReplayError::Invalid { index, source })?;
            if let Some(reason) = outcome.rejection {
                return Err(ReplayError::Rejected {
                    index,
                    column,
                    reason,
                });
            }
        }
        Ok(self)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// An out-of-range column is an error. A full column or a finished game
    /// yields a rejected outcome and leaves the session untouched.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, GameError> {
        let target = self.board.drop_target(column)?;

        if self.is_terminal() {
            warn!(column, status = ?self.status, "drop rejected: game already over");
            return Ok(DropOutcome::rejected(Rejection::GameOver, self.status));
        }

        let Some(row) = target else {
            warn!(column, player = %self.current, "drop rejected: column is full");
            return Ok(DropOutcome::rejected(Rejection::ColumnFull, self.status));
        };

        let player = self.current;
        self.board.place(row, column, player)?;
        self.moves.push(Move { row, column, player });
        debug!(%player, row, column, "piece dropped");

        // Win is checked before tie: a winning last move is a win.
        if win::has_line_through(&self.board, row, column) {
            self.status = GameStatus::Won(player);
            info!(winner = %player, moves = self.moves.len(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves.len(), "game tied");
        } else {
            self.current = player.other();
        }

        Ok(DropOutcome::accepted(row, self.status))
    }

    /// Player to move; once the game is won this stays on the winner.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board.cell_at(row, column)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Accepted moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The four cells that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; win::LINE_LENGTH]> {
        match self.status {
            GameStatus::Won(player) => win::winning_line(&self.board, player),
            _ => None,
        }
    }
}
