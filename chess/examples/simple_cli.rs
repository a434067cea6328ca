// Simple command-line application to play chess against the greedy strategy

use duelchess::game::Game;
use duelchess::strategy::{Greedy, Human};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("You are WHITE. Enter squares as x,y with 0-based digits, e.g. 4,1.");

    let mut game = Game::new(Box::new(Human::new()), Box::new(Greedy::new()));
    let outcome = game.play().unwrap();

    println!();
    println!("Game finished: {}", outcome);
    println!("The game took {} plies.", game.moves().len());
}
