/// Runs a match to completion: two seats alternating turns over a shared
/// die until one banks GOAL points.
pub struct Engine {
    die: Die,
    players: [Player; 2],
    pointer: usize,
}

impl Engine {
    pub fn new(one: Player, two: Player) -> Self {
        Self {
            die: Die::default(),
            players: [one, two],
            pointer: 0,
        }
    }

    pub fn play(&mut self) -> &Player {
        println!("{}", "Starting Pig, the game!".bold());
        while self.has_turns() {
            self.take_turn();
        }
        self.finish()
    }

    /// one complete turn for the pointed seat, then pass the die.
    /// the pointer advances whether the turn banked or busted.
    pub fn take_turn(&mut self) {
        println!("\n{}", "-".repeat(21));
        Turn::new().resolve(&mut self.die, &mut self.players[self.pointer]);
        self.rotate();
    }

    /// the win announcement. seats are scanned in order, so the earlier
    /// seat would be reported if both somehow stood at GOAL.
    pub fn finish(&self) -> &Player {
        let winner = self.winner().expect("the match only ends with a winner seated");
        println!(
            "{}",
            format!("{} wins with {} points!", winner.name(), winner.score())
                .green()
                .bold()
        );
        log::info!("game over");
        winner
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.has_won())
    }
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|p| p.has_won())
    }

    fn has_turns(&self) -> bool {
        !self.is_over()
    }
    fn rotate(&mut self) {
        self.pointer = (self.pointer + 1) % self.players.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::GOAL;
    use crate::gameplay::Points;
    use crate::gameplay::player::Kind;

    fn robots() -> Engine {
        Engine::new(
            Player::new(Kind::Computer, 1),
            Player::new(Kind::Computer, 2),
        )
    }

    #[test]
    fn the_pointer_alternates_every_turn() {
        let mut engine = robots();
        assert_eq!(engine.pointer, 0);
        engine.take_turn();
        assert_eq!(engine.pointer, 1);
        engine.take_turn();
        assert_eq!(engine.pointer, 0);
    }

    #[test]
    fn no_winner_while_both_sit_below_goal() {
        let mut engine = robots();
        while !engine.is_over() {
            assert!(engine.winner().is_none());
            engine.take_turn();
        }
        assert!(engine.winner().is_some());
    }

    #[test]
    fn robots_finish_with_exactly_one_winner() {
        let mut engine = robots();
        engine.play();
        let scores = engine
            .players()
            .iter()
            .map(|p| p.score())
            .collect::<Vec<Points>>();
        assert!(scores.iter().filter(|s| **s >= GOAL).count() == 1);
        assert!(scores.iter().filter(|s| **s < GOAL).count() == 1);
    }

    #[test]
    fn a_fresh_match_replays_identically() {
        let mut one = robots();
        let mut two = robots();
        let first = one.play().name().to_string();
        let again = two.play().name().to_string();
        assert_eq!(first, again);
        for (a, b) in one.players().iter().zip(two.players().iter()) {
            assert_eq!(a.score(), b.score());
        }
    }

    #[test]
    fn the_earlier_seat_wins_a_double_finish() {
        let mut one = Player::new(Kind::Computer, 1);
        let mut two = Player::new(Kind::Computer, 2);
        one.bank(GOAL);
        two.bank(GOAL);
        let engine = Engine::new(one, two);
        assert_eq!(engine.winner().expect("both finished").name(), "CPU");
    }
}

use super::player::Player;
use super::turn::Turn;
use crate::dice::Die;
use colored::*;
