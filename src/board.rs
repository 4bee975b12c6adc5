use crate::error::ParseBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The number of rows and columns of the board.
pub const SIZE: usize = 3;

/// The number of distinct base-3 board keys, `3^9`.
const KEY_SPACE: u16 = 19683;

/// One of the two marks a player places.
///
/// `X` always moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The first player.
    X,
    /// The second player.
    O,
}

impl Symbol {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the uppercase character used to render this mark.
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single square of the grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// The square holds a mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns `true` if no mark is on this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark on this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(symbol) => symbol.as_char(),
        }
    }

    fn from_char(c: char) -> Result<Self, ParseBoardError> {
        match c {
            'x' | 'X' => Ok(Cell::Occupied(Symbol::X)),
            'o' | 'O' => Ok(Cell::Occupied(Symbol::O)),
            '.' | '_' | '-' => Ok(Cell::Empty),
            found => Err(ParseBoardError::InvalidChar { found }),
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Occupied(symbol)
    }
}

/// A (row, column) coordinate pair, each in `0..3`.
///
/// Moves order row-major, so a sorted collection of moves walks the board
/// left to right, top to bottom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The row, counted from the top.
    pub row: usize,
    /// The column, counted from the left.
    pub col: usize,
}

impl Move {
    /// Makes a new [`Move`]. Range is checked when the move is applied.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if both coordinates lie on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// The row-major index of this move, `row * 3 + col`.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable 3x3 tic-tac-toe grid.
///
/// Boards are plain values: every rule that "changes" a board hands back a
/// new one and leaves its input alone.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from its rows, top to bottom.
    pub const fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterates every cell together with its coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Move::new(row, col), cell))
        })
    }

    /// Counts the marks of `symbol` on the board.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(symbol))
            .count()
    }

    /// Counts the empty cells.
    pub fn empty_cells(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// Returns a copy of this board with `cell` written at `mv`.
    ///
    /// Callers check bounds first.
    pub(crate) fn with(mut self, mv: Move, cell: Cell) -> Self {
        self.cells[mv.row][mv.col] = cell;
        self
    }

    /// Packs the board into a base-3 number.
    ///
    /// Every cell contributes `t * 3^i`, where `i` is its row-major index and
    /// `t` is 0 for empty, 1 for `X` and 2 for `O`. `3^9 < u16::MAX`, so the
    /// whole board fits.
    pub fn key(&self) -> u16 {
        self.cells()
            .map(|(mv, cell)| {
                let t = match cell {
                    Cell::Empty => 0,
                    Cell::Occupied(Symbol::X) => 1,
                    Cell::Occupied(Symbol::O) => 2,
                };
                t * 3u16.pow(mv.index() as u32)
            })
            .sum()
    }

    /// Unpacks a board made by [`Board::key`].
    pub fn from_key(key: u16) -> Result<Self, ParseBoardError> {
        if key >= KEY_SPACE {
            return Err(ParseBoardError::InvalidKey { key });
        }

        let mut board = Self::new();
        let mut rest = key;
        for index in 0..SIZE * SIZE {
            let cell = match rest % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Symbol::X),
                _ => Cell::Occupied(Symbol::O),
            };
            board = board.with(Move::new(index / SIZE, index % SIZE), cell);
            rest /= 3;
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(Cell::from_char)
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount { count: cells.len() });
        }

        Ok(cells
            .into_iter()
            .enumerate()
            .fold(Board::new(), |board, (index, cell)| {
                board.with(Move::new(index / SIZE, index % SIZE), cell)
            }))
    }
}
