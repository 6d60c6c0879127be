//! Pig at the terminal.
//!
//! Seats two players, human or computer, and races to 100 points.
//! Pass --timed to put 60 seconds on the clock instead.

use clap::Parser;
use robopig::gameplay::{Engine, Kind, Player, Timed};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Who takes seat 1: 'human' or 'computer'
    #[arg(long, default_value = "human")]
    player1: Kind,
    /// Who takes seat 2: 'human' or 'computer'
    #[arg(long, default_value = "human")]
    player2: Kind,
    /// End the game after 60 seconds, highest score standing wins
    #[arg(long)]
    timed: bool,
}

fn main() {
    robopig::log();
    let args = Args::parse();
    let one = Player::new(args.player1, 1);
    let two = Player::new(args.player2, 2);
    log::info!("seating {} vs {}", one.name(), two.name());
    let mut engine = Engine::new(one, two);
    match args.timed {
        true => {
            Timed::new(engine).play();
        }
        false => {
            engine.play();
        }
    }
}
