/// One-shot deferred events for the end-of-run sequence.
///
/// Each event carries the run generation it was scheduled under.  A restart
/// bumps the generation, so anything still pending from the previous run is
/// recognised as stale when it comes due and is dropped instead of firing.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Stop the flourish's forward drift and show the game-over banner.
    StopFlourish,
    /// Death animation finished; suspend physics.
    FreezePhysics,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub due: Duration,
    pub generation: u32,
    pub event: Deferred,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, generation: u32, event: Deferred) {
        self.pending.push(Scheduled {
            due,
            generation,
            event,
        });
    }

    /// Remove and return every event due at or before `now`, earliest first.
    pub fn take_due(&mut self, now: Duration) -> Vec<Scheduled> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.pending.retain(|s| {
            if s.due <= now {
                due.push(*s);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|s| s.due);
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
