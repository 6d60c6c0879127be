pub struct Robot;

impl Actor for Robot {
    fn decide(&self, player: &Player, total: Points) -> Decision {
        match total >= self.threshold(player.score()) {
            true => Decision::Hold,
            false => Decision::Roll,
        }
    }
}

impl Robot {
    /// Hold once the accumulator covers the shorter of APPETITE and the
    /// distance left to GOAL. Never asks for more than it can use.
    fn threshold(&self, banked: Points) -> Points {
        std::cmp::min(APPETITE, GOAL.saturating_sub(banked))
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}


use crate::gameplay::actor::Actor;
use crate::gameplay::decision::Decision;
use crate::gameplay::player::Player;
use crate::gameplay::{APPETITE, GOAL, Points};
use std::fmt::Debug;
