pub mod actor;
pub use actor::*;

pub mod decision;
pub use decision::*;

pub mod engine;
pub use engine::*;

pub mod player;
pub use player::*;

pub mod timer;
pub use timer::*;

pub mod turn;
pub use turn::*;

/// Banked and turn-accumulated scores.
pub type Points = u16;

/// First seat to bank this many points wins.
pub const GOAL: Points = 100;
/// The robot keeps rolling until its turn accumulator reaches this.
pub const APPETITE: Points = 25;
/// Wall clock allowance for the timed variant.
pub const TIME_LIMIT: std::time::Duration = std::time::Duration::from_secs(60);
