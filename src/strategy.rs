use crate::board::{Board, Move};
use crate::minimax::Minimax;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::rules::{legal_moves, terminal};

/// Something that picks moves for one side of a game.
pub trait Strategy {
    /// Returns the move to play on `board`, or `None` if the game is over.
    ///
    /// A returned move must be one of `legal_moves(board)`.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

impl Strategy for Minimax {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.optimal_move(board)
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Default, Clone)]
pub struct RandomStrategy<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomStrategy<K> {
    /// Makes a strategy drawing from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<K: RandomGenerator> Strategy for RandomStrategy<K> {
    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        if terminal(board) {
            return None;
        }
        let moves: Vec<Move> = legal_moves(board).into_iter().collect();
        self.random.choose(&moves).copied()
    }
}
