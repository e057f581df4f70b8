/// Timer-gated, randomised obstacle generator.
///
/// Every poll draws one integer in `0..ROLL_RANGE`.  The same draw gates the
/// spawn (it must fall strictly between `GATE_LOW` and `GATE_HIGH`) and picks
/// the sprite (`ALT_KIND_ROLL` gives the alternate kind).  A passing draw
/// still spawns nothing until the cooldown since the last spawn has elapsed.
/// Rejected polls leave the timer untouched apart from scheduling the next
/// poll.

use std::time::Duration;

use rand::Rng;

use crate::config::RunnerConfig;
use crate::entities::ObstacleKind;

pub const ROLL_RANGE: u32 = 10;
pub const GATE_LOW: u32 = 3;
pub const GATE_HIGH: u32 = 7;
pub const ALT_KIND_ROLL: u32 = 5;

/// One uniform draw in `0..ROLL_RANGE`.
pub fn roll(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..ROLL_RANGE)
}

/// Kind selected by a draw, or `None` if the draw is outside the gate.
pub fn kind_for_draw(draw: u32) -> Option<ObstacleKind> {
    if draw > GATE_LOW && draw < GATE_HIGH {
        Some(if draw == ALT_KIND_ROLL {
            ObstacleKind::Rock
        } else {
            ObstacleKind::Cactus
        })
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnTimer {
    interval: Duration,
    cooldown: Duration,
    next_poll: Duration,
    last_spawn: Duration,
}

impl SpawnTimer {
    pub fn new(config: &RunnerConfig) -> Self {
        let mut timer = Self {
            interval: config.spawn_interval(),
            cooldown: config.spawn_cooldown(),
            next_poll: Duration::ZERO,
            last_spawn: Duration::ZERO,
        };
        timer.reset(Duration::ZERO);
        timer
    }

    /// Restart the cadence at `run_start`.  The cooldown counts from the run
    /// start, so the first obstacle can appear no earlier than one cooldown in.
    pub fn reset(&mut self, run_start: Duration) {
        self.next_poll = run_start + self.interval;
        self.last_spawn = run_start;
    }

    pub fn last_spawn(&self) -> Duration {
        self.last_spawn
    }

    pub fn next_poll(&self) -> Duration {
        self.next_poll
    }

    /// Evaluate a single poll at game time `at` with an already-made draw.
    pub fn poll_with_draw(&mut self, at: Duration, draw: u32) -> Option<ObstacleKind> {
        let kind = kind_for_draw(draw)?;
        if at.saturating_sub(self.last_spawn) < self.cooldown {
            return None;
        }
        self.last_spawn = at;
        Some(kind)
    }

    /// Run every poll that has come due by `now`, drawing from `rng` once per
    /// poll.  Returns the kinds spawned, oldest first.  A zero interval polls
    /// once per call.
    pub fn poll(&mut self, now: Duration, rng: &mut impl Rng) -> Vec<ObstacleKind> {
        let mut spawned = Vec::new();
        if self.interval.is_zero() {
            self.next_poll = now;
            spawned.extend(self.poll_with_draw(now, roll(rng)));
            return spawned;
        }
        while self.next_poll <= now {
            let at = self.next_poll;
            self.next_poll += self.interval;
            let draw = roll(rng);
            if let Some(kind) = self.poll_with_draw(at, draw) {
                spawned.push(kind);
            }
        }
        spawned
    }
}
