use crate::board::{Board, Move};
use crate::error::Error;
use crate::rules::{Outcome, initial, outcome, terminal, transition};
use crate::strategy::Strategy;
use tracing::instrument;

/// A finished game between two strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Every move played, `X` first.
    pub moves: Vec<Move>,
    /// The board the game ended on.
    pub final_board: Board,
    /// How the game ended.
    pub outcome: Outcome,
}

/// Plays a full game from the empty board, `x` moving first.
///
/// Fails if a strategy hands back a move that is not legal, or gives up
/// before the game is over.
#[instrument(level = "debug", skip_all)]
pub fn play_game<X, O>(x: &mut X, o: &mut O) -> Result<GameRecord, Error>
where
    X: Strategy + ?Sized,
    O: Strategy + ?Sized,
{
    let mut board = initial();
    let mut moves = Vec::with_capacity(9);
    let mut x_to_move = true;

    while !terminal(&board) {
        let choice = if x_to_move {
            x.choose_move(&board)
        } else {
            o.choose_move(&board)
        };

        let Some(mv) = choice else {
            tracing::debug!(plies = moves.len(), "strategy gave up on a live game");
            return Err(Error::NoMoveChosen);
        };
        board = transition(&board, mv)?;
        moves.push(mv);
        x_to_move = !x_to_move;
    }

    let outcome = outcome(&board);
    tracing::debug!(?outcome, plies = moves.len(), "game over");

    Ok(GameRecord {
        moves,
        final_board: board,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Symbol;
    use crate::error::IllegalMoveError;
    use crate::minimax::Minimax;
    use crate::random::CustomNumberGenerator;
    use crate::strategy::RandomStrategy;

    struct Stubborn;

    impl Strategy for Stubborn {
        fn choose_move(&mut self, _board: &Board) -> Option<Move> {
            Some(Move::new(1, 1))
        }
    }

    struct Resigning;

    impl Strategy for Resigning {
        fn choose_move(&mut self, _board: &Board) -> Option<Move> {
            None
        }
    }

    #[test]
    fn perfect_self_play_draws() {
        let record = play_game(&mut Minimax::default(), &mut Minimax::default()).unwrap();
        assert_eq!(record.outcome, Outcome::Draw);
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.final_board.empty_cells(), 0);
    }

    #[test]
    fn minimax_never_loses_to_random_play() {
        for seed in 0..40 {
            let mut engine = Minimax::default();
            let mut random = RandomStrategy::new(CustomNumberGenerator::new(seed));

            let as_x = play_game(&mut engine, &mut random).unwrap();
            assert_ne!(as_x.outcome, Outcome::Win(Symbol::O), "seed {seed}");

            let as_o = play_game(&mut random, &mut engine).unwrap();
            assert_ne!(as_o.outcome, Outcome::Win(Symbol::X), "seed {seed}");
        }
    }

    #[test]
    fn illegal_choice_is_an_error() {
        let err = play_game(&mut Stubborn, &mut Stubborn).unwrap_err();
        assert_eq!(
            err,
            Error::IllegalMove(IllegalMoveError::Occupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn resigning_early_is_an_error() {
        let err = play_game(&mut Minimax::default(), &mut Resigning).unwrap_err();
        assert_eq!(err, Error::NoMoveChosen);
    }
}
