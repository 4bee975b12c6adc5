/// A move that `transition` refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("cell ({row}, {col}) is outside of the board")]
    OutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("cell ({row}, {col}) is already occupied")]
    Occupied {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}

/// `utility` was asked to score a game that is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("utility is only defined for terminal boards")]
pub struct NotTerminalError;

/// Failed to parse a [`Board`](crate::board::Board) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("{found:?} is not a valid tic-tac-toe cell")]
    InvalidChar {
        /// The offending character.
        found: char,
    },
    /// The text described the wrong number of cells.
    #[display("expected 9 cells, found {count}")]
    WrongCellCount {
        /// How many cells were read.
        count: usize,
    },
    /// The base-3 key does not describe a 3x3 board.
    #[display("{key} is not a valid board key")]
    InvalidKey {
        /// The rejected key.
        key: u16,
    },
}

/// Any error this crate can produce.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum Error {
    /// See [`IllegalMoveError`].
    IllegalMove(IllegalMoveError),
    /// See [`NotTerminalError`].
    NotTerminal(NotTerminalError),
    /// See [`ParseBoardError`].
    ParseBoard(ParseBoardError),
    /// A strategy returned no move while the game was still running.
    #[display("no move was chosen for a game in progress")]
    #[from(skip)]
    NoMoveChosen,
}
