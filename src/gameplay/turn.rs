/// How a turn ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    /// rolled the bust face; the accumulator is forfeit.
    Busted,
    /// banked the accumulator onto the seat's score.
    Held(Points),
}

/// One turn resolved to completion: the seat rolls until it busts or its
/// actor banks. Points live in the turn accumulator until a Hold; a bust
/// discards them without touching the banked score.
pub struct Turn {
    total: Points,
}

impl Turn {
    pub fn new() -> Self {
        Self { total: 0 }
    }

    pub fn resolve(
        mut self,
        rolls: &mut impl Iterator<Item = Pips>,
        player: &mut Player,
    ) -> Outcome {
        'rolling: loop {
            let roll = rolls.next().expect("dice roll forever");
            println!("{} rolled a {}", player.name(), roll);
            if roll == BUST {
                println!(
                    "{}",
                    format!("{} busted and forfeits {} points", player.name(), self.total).red()
                );
                return Outcome::Busted;
            }
            self.total += Points::from(roll);
            println!("turn total is {}", self.total);
            let decision = player.decide(self.total);
            println!("{} {}", player.name(), decision);
            match decision {
                Decision::Roll => continue 'rolling,
                Decision::Hold => {
                    player.bank(self.total);
                    println!(
                        "{} banks {} for a score of {}",
                        player.name(),
                        self.total,
                        player.score()
                    );
                    return Outcome::Held(self.total);
                }
            }
        }
    }
}


use super::Points;
use super::decision::Decision;
use super::player::Player;
use crate::dice::BUST;
use crate::dice::Pips;
use colored::*;
