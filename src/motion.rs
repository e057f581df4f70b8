/// Vertical kinematics for the dino.
///
/// Velocities are units/s and are integrated with the frame's `dt`
/// (semi-implicit Euler: velocity first, then position).  Jump and duck are
/// gated on ground contact and silently do nothing when not applicable.

use std::time::Duration;

use crate::collision::{on_ground, Aabb};
use crate::config::RunnerConfig;
use crate::entities::{Dino, MotionState};

/// Build the dino in its run-start pose.
pub fn spawn_dino(config: &RunnerConfig) -> Dino {
    Dino {
        x: config.dino_start_x,
        y: config.dino_start_y,
        width: config.dino_width,
        height: config.dino_height,
        vx: 0.0,
        vy: 0.0,
        state: MotionState::Running,
        grounded: false,
        ground_collider: true,
        frozen: false,
        alive: true,
    }
}

/// Launch upward.  Only effective while grounded; returns whether it fired.
pub fn jump(dino: &mut Dino, config: &RunnerConfig) -> bool {
    if !dino.alive || !dino.grounded {
        return false;
    }
    dino.vy = config.jump_impulse;
    dino.grounded = false;
    dino.state = MotionState::Jumping;
    true
}

/// Slam downward to cut hang time.  Only effective while airborne.
pub fn duck(dino: &mut Dino, config: &RunnerConfig) -> bool {
    if !dino.alive || dino.grounded {
        return false;
    }
    dino.vy = config.duck_impulse;
    true
}

/// Integrate one step of gravity and velocity, then clamp to the ground if
/// the ground collider is still active.
pub fn integrate(dino: &mut Dino, dt: Duration, config: &RunnerConfig) {
    if dino.frozen {
        return;
    }
    let secs = dt.as_secs_f32();

    dino.vy += config.gravity * secs;
    dino.x += dino.vx * secs;
    dino.y += dino.vy * secs;

    if dino.ground_collider && on_ground(&Aabb::of_dino(dino), config.ground_y) && dino.vy >= 0.0 {
        dino.y = config.ground_y - dino.height;
        dino.vy = 0.0;
        dino.grounded = true;
    } else {
        dino.grounded = false;
    }

    update_state(dino);
}

fn update_state(dino: &mut Dino) {
    if dino.state == MotionState::Dying {
        return;
    }
    dino.state = if dino.grounded {
        MotionState::Running
    } else if dino.vy < 0.0 {
        MotionState::Jumping
    } else {
        MotionState::Falling
    };
}

/// Enter the dying flourish: a single forward-and-up kick, and the ground no
/// longer catches the dino.
pub fn launch_flourish(dino: &mut Dino, config: &RunnerConfig) {
    dino.alive = false;
    dino.state = MotionState::Dying;
    dino.vx = config.flourish_vx;
    dino.vy = config.flourish_vy;
    dino.ground_collider = false;
    dino.grounded = false;
}

pub fn stop_forward(dino: &mut Dino) {
    dino.vx = 0.0;
}

/// Suspend all further integration.
pub fn freeze(dino: &mut Dino) {
    dino.vx = 0.0;
    dino.vy = 0.0;
    dino.frozen = true;
}
