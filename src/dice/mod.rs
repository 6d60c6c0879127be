pub mod die;
pub use die::*;

/// Face value showing on a rolled die.
pub type Pips = u8;

/// Faces on the die.
pub const SIDES: Pips = 6;
/// The face that ends a turn and forfeits its accumulator.
pub const BUST: Pips = 1;
/// Fixed seed, so a fresh match replays the same roll sequence.
pub const SEED: u64 = 0;
