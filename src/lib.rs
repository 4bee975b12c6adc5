//! A small and exact minimax engine for 3x3 tic-tac-toe.
//!
//! The crate has two layers. The rules in [`rules`] are pure functions of an
//! immutable [`Board`]: whose turn it is, which moves are legal, what a move
//! produces and who has won. The searcher in [`minimax`] walks the complete
//! game tree below a board and returns the move that guarantees the best
//! result against a perfect opponent.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::{initial, optimal_move, terminal, transition, utility, Utility};
//!
//! // Let both sides play perfectly from the empty board
//! let mut board = initial();
//! while let Some(mv) = optimal_move(&board) {
//!     board = transition(&board, mv).expect("the engine only plays legal moves");
//! }
//!
//! // Perfect play always ends in a draw
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), Ok(Utility::Draw));
//! ```
//!
//! Searches can be configured through [`Minimax::builder`]:
//!
//! ```rust
//! use minimax_ttt::{Board, Minimax, Move};
//!
//! let board: Board = "XX.\nOO.\n...".parse().unwrap();
//! let engine = Minimax::builder().with_transposition_table(false).build();
//!
//! let report = engine.search(&board);
//! assert_eq!(report.best_move, Some(Move::new(0, 2)));
//! ```

/// Contains the board, cell, mark and move value types.
pub mod board;
/// Contains the error types returned by the rules and the game driver.
pub mod error;
/// Contains the fully scored game tree.
pub mod game_tree;
/// The core search module, containing the `Minimax` implementation.
pub mod minimax;
/// Contains the driver that plays two strategies against each other.
pub mod play;
/// Contains traits and implementations for random number generation.
pub mod random;
pub mod rules;
/// Contains the `Strategy` trait and its implementations.
pub mod strategy;

pub use board::{Board, Cell, Move, Symbol};
pub use error::{Error, IllegalMoveError, NotTerminalError, ParseBoardError};
pub use game_tree::{GameNode, GameTree};
pub use minimax::{Minimax, MinimaxBuilder, Role, SearchReport, optimal_move};
pub use play::{GameRecord, play_game};
pub use rules::{
    Outcome, Utility, initial, legal_moves, outcome, terminal, transition, turn, utility, winner,
};
pub use strategy::{RandomStrategy, Strategy};
