/// Decides, at each decision point, whether the seat rolls again or banks.
/// The engine hands over the seat record along with the live accumulator;
/// implementations may block (the terminal) or compute (the robot).
pub trait Actor: Debug {
    fn decide(&self, player: &Player, total: Points) -> Decision;
}

use super::Points;
use super::decision::Decision;
use super::player::Player;
use std::fmt::Debug;
