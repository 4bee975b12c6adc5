use crate::board::{Board, Cell, Move, Symbol};
use crate::rules::{Utility, legal_moves, turn, utility};
use std::collections::HashMap;
use tracing::instrument;

/// Which way a side pushes the utility.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// Plays for the highest utility (`X`).
    Maximizer,
    /// Plays for the lowest utility (`O`).
    Minimizer,
}

impl Role {
    /// Returns the role of the side playing `symbol`.
    pub fn for_symbol(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Role::Maximizer,
            Symbol::O => Role::Minimizer,
        }
    }

    /// Returns the role of the opponent.
    pub fn other(self) -> Self {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }

    /// Returns `true` if `candidate` is strictly better than `best` for this role.
    pub fn prefers(self, candidate: Utility, best: Utility) -> bool {
        match self {
            Role::Maximizer => candidate > best,
            Role::Minimizer => candidate < best,
        }
    }
}

/// The result of a full search from one board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// The utility reached when both sides play perfectly.
    pub value: Utility,
    /// The move that reaches `value`. `None` on a terminal board.
    pub best_move: Option<Move>,
    /// The number of positions evaluated, the root included.
    pub nodes: u64,
}

/// An exhaustive minimax searcher.
///
/// Every search walks the whole game tree below the given board. Ties between
/// equally good moves go to the first one in row-major order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Minimax {
    use_transposition_table: bool,
}

impl Default for Minimax {
    fn default() -> Self {
        MinimaxBuilder::new().build()
    }
}

/// A builder for creating instances of [`Minimax`].
#[derive(Debug, Clone)]
pub struct MinimaxBuilder {
    use_transposition_table: bool,
}

impl MinimaxBuilder {
    /// Creates a new builder with memoisation enabled.
    pub fn new() -> Self {
        Self {
            use_transposition_table: true,
        }
    }

    /// Enables or disables memoising positions within one search.
    ///
    /// The table only saves work; values and moves are the same either way.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }

    /// Builds the [`Minimax`] instance with the configured parameters.
    pub fn build(self) -> Minimax {
        Minimax::new(self.use_transposition_table)
    }
}

impl Default for MinimaxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Minimax {
    /// Returns a new builder for [`Minimax`].
    pub fn builder() -> MinimaxBuilder {
        MinimaxBuilder::new()
    }

    /// Creates a new searcher.
    ///
    /// It is recommended to use the builder via `Minimax::builder()` instead.
    pub fn new(use_transposition_table: bool) -> Self {
        Self {
            use_transposition_table,
        }
    }

    /// Returns `true` if searches memoise positions.
    pub fn uses_transposition_table(&self) -> bool {
        self.use_transposition_table
    }

    /// Searches the full tree below `board` for the side to move.
    #[instrument(level = "debug", skip(self, board), fields(key = board.key()))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut search = Search::new(self.use_transposition_table);
        let (value, best_move) = search.evaluate(board, Role::for_symbol(turn(board)));
        tracing::debug!(
            value = value.value(),
            best_move = ?best_move,
            nodes = search.nodes,
            "search finished"
        );

        SearchReport {
            value,
            best_move,
            nodes: search.nodes,
        }
    }

    /// Returns the move the side to move should play, or `None` once the game is over.
    pub fn optimal_move(&self, board: &Board) -> Option<Move> {
        self.search(board).best_move
    }

    /// Returns the value of every legal move, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn move_values(&self, board: &Board) -> Vec<(Move, Utility)> {
        if utility(board).is_ok() {
            return Vec::new();
        }

        let role = Role::for_symbol(turn(board));
        let mut search = Search::new(self.use_transposition_table);
        successors(board)
            .map(|(mv, next)| (mv, search.evaluate(&next, role.other()).0))
            .collect()
    }

    /// Returns the line both sides play from `board` to the end of the game.
    pub fn principal_variation(&self, board: &Board) -> Vec<Move> {
        let mut line = Vec::new();
        let mut current = *board;
        while let Some(mv) = self.optimal_move(&current) {
            // The search only returns empty cells, so the move is written directly.
            current = current.with(mv, Cell::Occupied(turn(&current)));
            line.push(mv);
        }

        line
    }
}

/// Returns the optimal move for the side to move using a default [`Minimax`].
pub fn optimal_move(board: &Board) -> Option<Move> {
    Minimax::default().optimal_move(board)
}

/// Every legal move paired with the board it produces, in row-major order.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mover = Cell::Occupied(turn(board));
    legal_moves(board)
        .into_iter()
        .map(move |mv| (mv, board.with(mv, mover)))
}

/// State of one search call.
struct Search {
    table: Option<HashMap<(u16, Role), (Utility, Option<Move>)>>,
    nodes: u64,
}

impl Search {
    fn new(use_transposition_table: bool) -> Self {
        Self {
            table: use_transposition_table.then(HashMap::new),
            nodes: 0,
        }
    }

    /// Returns the minimax value of `board` with `role` to play, and the move that achieves it.
    fn evaluate(&mut self, board: &Board, role: Role) -> (Utility, Option<Move>) {
        let key = (board.key(), role);
        if let Some(hit) = self.table.as_ref().and_then(|table| table.get(&key)) {
            tracing::trace!(key = key.0, "transposition hit");
            return *hit;
        }

        self.nodes += 1;
        let result = match utility(board) {
            Ok(score) => (score, None),
            Err(_) => self.best_child(board, role),
        };

        if let Some(table) = self.table.as_mut() {
            table.insert(key, result);
        }

        result
    }

    fn best_child(&mut self, board: &Board, role: Role) -> (Utility, Option<Move>) {
        let mut best: Option<(Utility, Move)> = None;
        for (mv, next) in successors(board) {
            let (value, _) = self.evaluate(&next, role.other());
            if best.is_none_or(|(best_value, _)| role.prefers(value, best_value)) {
                best = Some((value, mv));
            }
        }

        match best {
            Some((value, mv)) => (value, Some(mv)),
            // A non-terminal board always has an empty cell.
            None => (Utility::Draw, None),
        }
    }
}
