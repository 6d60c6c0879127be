/// Wall clock for the timed variant: wound at construction, read between
/// turns.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
    limit: Duration,
}

impl Clock {
    pub fn new(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }
}

/// The 60 second variant: a plain Engine plus a deadline polled before
/// every turn. A turn already underway always runs to completion; the
/// clock only speaks between turns, so a long interactive turn can carry
/// the match past the limit before the check fires.
pub struct Timed {
    engine: Engine,
    clock: Clock,
}

impl Timed {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            clock: Clock::new(TIME_LIMIT),
        }
    }

    pub fn play(&mut self) -> &Player {
        println!(
            "{}",
            format!(
                "Starting timed Pig! {} seconds on the clock",
                self.clock.limit.as_secs()
            )
            .bold()
        );
        while !self.engine.is_over() {
            println!("elapsed {}s", self.clock.elapsed().as_secs());
            if self.clock.expired() {
                return self.buzzer();
            }
            self.engine.take_turn();
        }
        self.engine.finish()
    }

    /// time's up: the standing leader takes it without another turn.
    fn buzzer(&self) -> &Player {
        println!("{}", "Time's up!".red().bold());
        let leader = self.leader();
        println!(
            "{}",
            format!(
                "{} wins with {} points after {} seconds!",
                leader.name(),
                leader.score(),
                self.clock.limit.as_secs()
            )
            .green()
            .bold()
        );
        log::info!("game over");
        leader
    }

    fn leader(&self) -> &Player {
        // max_by_key keeps the last maximum; scanning from the back
        // biases ties toward the earlier seat.
        self.engine
            .players()
            .iter()
            .rev()
            .max_by_key(|p| p.score())
            .expect("two seated players")
    }
}


use super::TIME_LIMIT;
use super::engine::Engine;
use super::player::Player;
use colored::*;
use std::time::Duration;
use std::time::Instant;
