/// All game entity types — pure data, no logic.
///
/// Coordinates are world units with the origin at the top-left of the
/// visible field and y growing downward.  The ground is a horizontal line
/// at `RunnerConfig::ground_y`; an entity rests on it when its bottom edge
/// equals that line.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
    Running,
    Jumping,
    Falling,
    /// Scripted end-of-run flourish; never left until restart.
    Dying,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleKind {
    Cactus,
    /// Alternate sprite, selected by the exact-centre spawn draw.
    Rock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Ended,
}

// ── The controllable entity ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Dino {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal velocity (units/s).  Zero except during the flourish.
    pub vx: f32,
    /// Vertical velocity (units/s, positive = downward).
    pub vy: f32,
    pub state: MotionState,
    /// Bottom edge touched the ground during the last integration step.
    pub grounded: bool,
    /// Cleared on entry to the dying flourish so the dino drops off-screen.
    pub ground_collider: bool,
    /// Set once the death animation has finished; integration stops.
    pub frozen: bool,
    pub alive: bool,
}

impl Dino {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

// ── Per-tick input and output ─────────────────────────────────────────────────

/// Input sampled by the front-end for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key currently held.
    pub up: bool,
    /// Duck key currently held.
    pub down: bool,
    /// One-shot primary action (click / Enter).  Starts from Idle and
    /// restarts from Ended; ignored while running.
    pub primary: bool,
}

/// Notable things that happened during a tick, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started,
    Jumped,
    Ducked,
    ObstacleSpawned { kind: ObstacleKind },
    ObstaclesCulled { count: usize },
    Crashed { score: u64 },
    FlourishStopped,
    PhysicsFrozen,
    Restarted { generation: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
}

/// Read-only view handed to the renderer each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub dino_x: f32,
    pub dino_y: f32,
    pub dino_width: f32,
    pub dino_height: f32,
    pub motion: MotionState,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub speed: f64,
    pub run_state: RunState,
    /// Horizontal scroll of the ground texture.
    pub ground_offset: f64,
    /// The game-over banner appears once the flourish has played out.
    pub game_over_visible: bool,
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,
}
