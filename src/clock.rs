/// Monotonic game-time source.
///
/// Game time only moves when the front-end calls `advance`, so every timer in
/// the simulation (spawn polls, cooldown, deferred end-of-run events) shares
/// one notion of "now" and stays in step if the front-end ever pauses.

use std::time::Duration;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clock {
    now: Duration,
    ticks: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `dt` and return the new "now".
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.now += dt;
        self.ticks += 1;
        self.now
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of `advance` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
