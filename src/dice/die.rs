/// A six-sided die carrying its own seeded generator. One instance serves
/// the whole match, so the roll sequence is fully determined by the seed.
/// Endless iteration via ::next(), or one face at a time via ::roll().
#[derive(Debug, Clone)]
pub struct Die {
    sides: Pips,
    rng: SmallRng,
}

impl Die {
    pub fn new(seed: u64) -> Self {
        Self {
            sides: SIDES,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// uniform over 1..=sides
    pub fn roll(&mut self) -> Pips {
        self.rng.random_range(1..=self.sides)
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(SEED)
    }
}

impl Iterator for Die {
    type Item = Pips;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.roll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_on_the_faces() {
        let die = Die::default();
        for roll in die.take(1000) {
            assert!(roll >= 1);
            assert!(roll <= SIDES);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let one = Die::new(SEED).take(100).collect::<Vec<Pips>>();
        let two = Die::new(SEED).take(100).collect::<Vec<Pips>>();
        assert_eq!(one, two);
    }

    #[test]
    fn different_seeds_diverge() {
        let one = Die::new(0).take(100).collect::<Vec<Pips>>();
        let two = Die::new(1).take(100).collect::<Vec<Pips>>();
        assert_ne!(one, two);
    }
}

use super::Pips;
use super::SEED;
use super::SIDES;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
