/// Run state machine and per-tick orchestration.
///
/// `Game` owns every piece of mutable simulation state.  The front-end calls
/// `advance` once per frame with the elapsed time, the sampled input and an
/// RNG handle; all randomness goes through that handle so a seeded RNG gives
/// a reproducible run.
///
/// Within a running tick the order is fixed: input → motion → spawn polls →
/// obstacle scroll/cull → collision → score/speed.  Collision therefore sees
/// the tick's final positions, and a crashing tick does not score.

use std::time::Duration;

use rand::Rng;

use crate::clock::Clock;
use crate::collision;
use crate::config::RunnerConfig;
use crate::entities::{Dino, GameEvent, ObstacleView, RunState, Snapshot, TickInput};
use crate::motion;
use crate::pool::ObstaclePool;
use crate::progress::Progress;
use crate::scheduler::{Deferred, Scheduler};
use crate::spawner::SpawnTimer;

#[derive(Clone, Debug)]
pub struct Game {
    pub dino: Dino,
    pub obstacles: ObstaclePool,
    pub progress: Progress,
    config: RunnerConfig,
    clock: Clock,
    spawner: SpawnTimer,
    scheduler: Scheduler,
    run_state: RunState,
    /// Bumped on every restart; deferred events from older runs are stale.
    generation: u32,
    crashed_at: Duration,
    ground_offset: f64,
    game_over_visible: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

impl Game {
    /// A fresh game waiting in `Idle` for its first start signal.
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            dino: motion::spawn_dino(&config),
            obstacles: ObstaclePool::new(),
            progress: Progress::new(&config),
            spawner: SpawnTimer::new(&config),
            clock: Clock::new(),
            scheduler: Scheduler::new(),
            run_state: RunState::Idle,
            generation: 0,
            crashed_at: Duration::ZERO,
            ground_offset: 0.0,
            game_over_visible: false,
            config,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    pub fn spawner(&self) -> &SpawnTimer {
        &self.spawner
    }

    pub fn pending_deferred(&self) -> usize {
        self.scheduler.len()
    }

    pub fn ground_offset(&self) -> f64 {
        self.ground_offset
    }

    pub fn game_over_visible(&self) -> bool {
        self.game_over_visible
    }

    // ── Transitions ──────────────────────────────────────────────────────────

    /// Idle → Running.  Ignored in any other state.
    pub fn start(&mut self) -> bool {
        if self.run_state != RunState::Idle {
            return false;
        }
        self.reset_run();
        log::debug!("run started at {:?}", self.clock.now());
        true
    }

    /// Ended → Running with a fresh dino, empty pool and reset score/speed.
    /// Ignored in any other state.
    pub fn restart(&mut self) -> bool {
        if self.run_state != RunState::Ended {
            return false;
        }
        self.generation = self.generation.wrapping_add(1);
        self.reset_run();
        log::debug!("run restarted (generation {})", self.generation);
        true
    }

    fn reset_run(&mut self) {
        self.dino = motion::spawn_dino(&self.config);
        self.obstacles.clear();
        self.progress.reset();
        self.spawner.reset(self.clock.now());
        self.ground_offset = 0.0;
        self.game_over_visible = false;
        self.run_state = RunState::Running;
    }

    fn end_run(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        if self.run_state != RunState::Running {
            return;
        }
        self.run_state = RunState::Ended;
        self.crashed_at = now;
        motion::launch_flourish(&mut self.dino, &self.config);
        self.scheduler.schedule(
            now + self.config.flourish_delay(),
            self.generation,
            Deferred::StopFlourish,
        );
        log::debug!("run ended with score {}", self.progress.score);
        events.push(GameEvent::Crashed {
            score: self.progress.score,
        });
    }

    // ── Tick ─────────────────────────────────────────────────────────────────

    /// Advance the simulation by one frame of `dt` game time.
    pub fn advance(
        &mut self,
        dt: Duration,
        input: &TickInput,
        rng: &mut impl Rng,
    ) -> Vec<GameEvent> {
        let now = self.clock.advance(dt);
        let mut events = Vec::new();

        match self.run_state {
            RunState::Idle => {
                if input.primary && self.start() {
                    events.push(GameEvent::Started);
                }
            }
            RunState::Running => self.run_tick(dt, now, input, rng, &mut events),
            RunState::Ended => {
                if input.primary && self.restart() {
                    events.push(GameEvent::Restarted {
                        generation: self.generation,
                    });
                } else {
                    // Only the scripted flourish moves once the run is over.
                    motion::integrate(&mut self.dino, dt, &self.config);
                }
            }
        }

        self.fire_deferred(now, &mut events);
        events
    }

    fn run_tick(
        &mut self,
        dt: Duration,
        now: Duration,
        input: &TickInput,
        rng: &mut impl Rng,
        events: &mut Vec<GameEvent>,
    ) {
        // Up wins over down; an airborne up falls through to the duck check.
        if input.up && motion::jump(&mut self.dino, &self.config) {
            events.push(GameEvent::Jumped);
        } else if input.down && motion::duck(&mut self.dino, &self.config) {
            events.push(GameEvent::Ducked);
        }

        motion::integrate(&mut self.dino, dt, &self.config);

        for kind in self.spawner.poll(now, rng) {
            self.obstacles.spawn_at_edge(kind, &self.config);
            events.push(GameEvent::ObstacleSpawned { kind });
        }

        self.obstacles.tick(self.progress.speed);
        let culled = self.obstacles.cull();
        if culled > 0 {
            events.push(GameEvent::ObstaclesCulled { count: culled });
        }

        if collision::first_hit(&self.dino, &self.obstacles).is_some() {
            self.end_run(now, events);
            return;
        }

        self.ground_offset += self.progress.speed;
        self.progress.step();
    }

    fn fire_deferred(&mut self, now: Duration, events: &mut Vec<GameEvent>) {
        // Firing StopFlourish may schedule FreezePhysics already due.
        loop {
            let due = self.scheduler.take_due(now);
            if due.is_empty() {
                break;
            }
            for scheduled in due {
                if scheduled.generation != self.generation || self.run_state != RunState::Ended {
                    log::trace!(
                        "dropping stale {:?} from generation {}",
                        scheduled.event,
                        scheduled.generation
                    );
                    continue;
                }
                match scheduled.event {
                    Deferred::StopFlourish => {
                        motion::stop_forward(&mut self.dino);
                        self.game_over_visible = true;
                        let anim_end = self.crashed_at + self.config.death_animation();
                        self.scheduler.schedule(
                            anim_end.max(now),
                            self.generation,
                            Deferred::FreezePhysics,
                        );
                        events.push(GameEvent::FlourishStopped);
                    }
                    Deferred::FreezePhysics => {
                        motion::freeze(&mut self.dino);
                        events.push(GameEvent::PhysicsFrozen);
                    }
                }
            }
        }
    }

    // ── Output ───────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dino_x: self.dino.x,
            dino_y: self.dino.y,
            dino_width: self.dino.width,
            dino_height: self.dino.height,
            motion: self.dino.state,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.x,
                    y: o.y,
                    width: o.width,
                    height: o.height,
                    kind: o.kind,
                })
                .collect(),
            score: self.progress.score,
            speed: self.progress.speed,
            run_state: self.run_state,
            ground_offset: self.ground_offset,
            game_over_visible: self.game_over_visible,
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            ground_y: self.config.ground_y,
        }
    }
}
