//! The rules of tic-tac-toe as pure functions of a [`Board`].
//!
//! Nothing here keeps state between calls: whose turn it is, which moves are
//! legal and who has won are all read off the marks on the board.

use crate::board::{Board, Cell, Move, SIZE, Symbol};
use crate::error::{IllegalMoveError, NotTerminalError};
use std::collections::BTreeSet;

/// The eight lines that win the game: three rows, three columns, two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The score of a finished game from `X`'s point of view.
///
/// Variants are declared in ascending order, so `Ord` compares them as their
/// numeric values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Utility {
    /// `O` completed a line.
    OWins = -1,
    /// The board filled up without a line.
    Draw = 0,
    /// `X` completed a line.
    XWins = 1,
}

impl Utility {
    /// The utility as an integer in `{-1, 0, 1}`.
    pub fn value(self) -> i8 {
        self as i8
    }
}

/// The state of a game derived from its board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// A line was completed.
    Win(Symbol),
    /// The board is full and nobody has won.
    Draw,
}

/// Returns the empty starting board.
pub fn initial() -> Board {
    Board::new()
}

/// Returns the mark that moves next.
///
/// `O` moves whenever it has fewer marks than `X`; otherwise `X` does.
pub fn turn(board: &Board) -> Symbol {
    if board.count(Symbol::O) < board.count(Symbol::X) {
        Symbol::O
    } else {
        Symbol::X
    }
}

/// Returns every empty cell.
///
/// The set iterates in row-major order. Check [`terminal`] first: a won board
/// may still have empty cells.
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns the board after the side to move plays `mv`.
///
/// The input board is left unchanged.
pub fn transition(board: &Board, mv: Move) -> Result<Board, IllegalMoveError> {
    let Move { row, col } = mv;
    if !mv.in_bounds() {
        tracing::debug!(row, col, "rejected move outside of the board");
        return Err(IllegalMoveError::OutOfBounds { row, col });
    }

    if board.get(row, col) != Some(Cell::Empty) {
        tracing::debug!(row, col, "rejected move onto an occupied cell");
        return Err(IllegalMoveError::Occupied { row, col });
    }

    Ok(board.with(mv, Cell::Occupied(turn(board))))
}

/// Returns the mark filling a complete row, column or diagonal, if any.
///
/// Every line is checked on every call, so malformed boards are judged the
/// same way as reachable ones. If more than one mark has a line, the first
/// line in row, column, diagonal order wins.
pub fn winner(board: &Board) -> Option<Symbol> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

fn line_owner(board: &Board, line: &[(usize, usize); SIZE]) -> Option<Symbol> {
    let [a, b, c] = line.map(|(row, col)| board.get(row, col).and_then(Cell::symbol));
    let owner = a?;
    (b == Some(owner) && c == Some(owner)).then_some(owner)
}

/// Returns `true` once somebody has won or no empty cell is left.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.empty_cells() == 0
}

/// Scores a finished game: `+1` for an `X` win, `-1` for an `O` win, `0` for a draw.
pub fn utility(board: &Board) -> Result<Utility, NotTerminalError> {
    match outcome(board) {
        Outcome::Win(Symbol::X) => Ok(Utility::XWins),
        Outcome::Win(Symbol::O) => Ok(Utility::OWins),
        Outcome::Draw => Ok(Utility::Draw),
        Outcome::InProgress => Err(NotTerminalError),
    }
}

/// Classifies the board as won, drawn or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(symbol) => Outcome::Win(symbol),
        None if board.empty_cells() == 0 => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
