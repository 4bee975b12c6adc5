extern crate minimax_ttt;

use minimax_ttt::random::StandardRandomGenerator;
use minimax_ttt::{Minimax, Outcome, RandomStrategy, Symbol, initial, play_game, transition};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Print the value of every opening move
    let engine = Minimax::default();
    for (mv, value) in engine.move_values(&initial()) {
        println!("Move: {} = {:+}", mv, value.value());
    }

    // Let the engine play itself and show the game
    let line = engine.principal_variation(&initial());
    let mut board = initial();
    for mv in &line {
        board = transition(&board, *mv).expect("principal variation is legal");
        println!("{}\n", board);
    }

    let record = play_game(&mut Minimax::default(), &mut Minimax::default())
        .expect("minimax only plays legal moves");
    println!("Self-play ended as {:?}", record.outcome);
    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.moves, line);

    // The engine must never lose to random play, on either side
    let mut random = RandomStrategy::new(StandardRandomGenerator);
    for _ in 0..20 {
        let as_x = play_game(&mut Minimax::default(), &mut random).expect("legal game");
        assert_ne!(as_x.outcome, Outcome::Win(Symbol::O));

        let as_o = play_game(&mut random, &mut Minimax::default()).expect("legal game");
        assert_ne!(as_o.outcome, Outcome::Win(Symbol::X));
    }

    println!("The engine never lost.");
}
