/// A seat at the table: a name fixed at construction, a banked score that
/// only ever grows during a match, and the Actor who speaks for it.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: Points,
    actor: Rc<dyn Actor>,
}

impl Player {
    /// the factory: seats are named by kind and ordinal.
    pub fn new(kind: Kind, seat: usize) -> Self {
        Self::sit(kind.name(seat), kind.actor())
    }

    /// seat anyone under any name.
    pub fn sit(name: String, actor: Rc<dyn Actor>) -> Self {
        Self {
            name,
            score: 0,
            actor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn has_won(&self) -> bool {
        self.score >= GOAL
    }

    /// bank points won this turn.
    pub fn bank(&mut self, points: Points) {
        self.score += points;
    }
    /// back to zero, for a rematch.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    pub fn decide(&self, total: Points) -> Decision {
        self.actor.decide(self, total)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has a score of {}", self.name, self.score)
    }
}

/// String-tag construction. The validated CLI path never reaches the
/// error arm, but programmatic callers get a typed rejection.
impl TryFrom<(&str, usize)> for Player {
    type Error = Error;
    fn try_from((tag, seat): (&str, usize)) -> Result<Self, Self::Error> {
        Kind::try_from(tag).map(|kind| Self::new(kind, seat))
    }
}

/// Who occupies a seat. Keys both the CLI surface and the factory.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Kind {
    Human,
    Computer,
}

impl Kind {
    fn actor(&self) -> Rc<dyn Actor> {
        match self {
            Kind::Human => Rc::new(Human),
            Kind::Computer => Rc::new(Robot),
        }
    }
    /// humans are "Player N"; a robot in seat 1 is plain "CPU", elsewhere "CPU N".
    fn name(&self, seat: usize) -> String {
        match self {
            Kind::Human => format!("Player {}", seat),
            Kind::Computer => match seat {
                1 => String::from("CPU"),
                n => format!("CPU {}", n),
            },
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = Error;
    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "human" => Ok(Kind::Human),
            "computer" => Ok(Kind::Computer),
            _ => Err(Error::UnknownKind(tag.to_string())),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// The one way seating can fail: a tag that names no Kind.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid player type '{0}', use 'human' or 'computer'")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_first_robot_is_plain_cpu() {
        let player = Player::try_from(("computer", 1)).unwrap();
        assert_eq!(player.name(), "CPU");
    }

    #[test]
    fn later_robots_are_numbered() {
        let player = Player::try_from(("computer", 2)).unwrap();
        assert_eq!(player.name(), "CPU 2");
    }

    #[test]
    fn humans_are_numbered() {
        let player = Player::try_from(("human", 1)).unwrap();
        assert_eq!(player.name(), "Player 1");
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let error = Player::try_from(("robot", 1)).unwrap_err();
        assert_eq!(error, Error::UnknownKind("robot".to_string()));
    }

    #[test]
    fn a_fresh_seat_has_no_points() {
        let player = Player::new(Kind::Computer, 1);
        assert_eq!(player.score(), 0);
        assert!(!player.has_won());
    }

    #[test]
    fn banking_accumulates() {
        let mut player = Player::new(Kind::Computer, 1);
        player.bank(12);
        player.bank(30);
        assert_eq!(player.score(), 42);
    }

    #[test]
    fn reset_zeroes_the_score() {
        let mut player = Player::new(Kind::Computer, 1);
        player.bank(55);
        player.reset();
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn the_goal_line_is_inclusive() {
        let mut player = Player::new(Kind::Computer, 1);
        player.bank(GOAL - 1);
        assert!(!player.has_won());
        player.bank(1);
        assert!(player.has_won());
    }

    #[test]
    fn the_summary_names_the_seat_and_score() {
        let mut player = Player::new(Kind::Human, 2);
        player.bank(37);
        assert_eq!(player.to_string(), "Player 2 has a score of 37");
    }
}

use super::GOAL;
use super::Points;
use super::actor::Actor;
use super::decision::Decision;
use crate::players::human::Human;
use crate::players::robot::Robot;
use std::rc::Rc;
