// Play a series of games between the random and greedy strategies and
// report who won how often

use clap::Parser;
use duelchess::game;
use duelchess::strategy::{Greedy, Random, Strategy};

#[derive(Parser)]
#[command(about = "Random vs greedy over many games, colors alternating")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: u32,

    /// Log every ply of every game
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let tally = game::play_series(
        args.games,
        || Box::new(Random::new()) as Box<dyn Strategy>,
        || Box::new(Greedy::new()) as Box<dyn Strategy>,
    )
    .expect("a generated move was rejected by the board");

    println!("Random won {} times.", tally.first);
    println!("Greedy won {} times.", tally.second);
    println!("{} games were drawn.", tally.draws);
}
