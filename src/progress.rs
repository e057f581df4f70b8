/// Score and scroll speed for the current run.
///
/// Both ramp linearly with no cap.  The state machine only calls `step`
/// while the run is active, which is what freezes them after a crash.

use crate::config::RunnerConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Progress {
    pub score: u64,
    pub speed: f64,
    increment: f64,
    base_speed: f64,
}

impl Progress {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            score: 0,
            speed: config.base_speed,
            increment: config.speed_increment,
            base_speed: config.base_speed,
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = self.base_speed;
    }

    /// One running tick: +1 score, +increment speed.
    pub fn step(&mut self) {
        self.score += 1;
        self.speed += self.increment;
    }
}
