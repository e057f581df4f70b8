use std::time::Duration;

use dino_runner::config::RunnerConfig;
use dino_runner::entities::*;
use dino_runner::motion::*;

const TICK: Duration = Duration::from_millis(100);

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn grounded_dino(config: &RunnerConfig) -> Dino {
    let mut d = spawn_dino(config);
    d.y = config.ground_y - d.height;
    d.grounded = true;
    d
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_uses_start_pose() {
    let c = RunnerConfig::default();
    let d = spawn_dino(&c);
    assert_eq!((d.x, d.y), (10.0, 100.0));
    assert_eq!((d.width, d.height), (80.0, 80.0));
    assert_eq!(d.state, MotionState::Running);
    assert!(d.alive && d.ground_collider && !d.frozen && !d.grounded);
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_from_ground() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    assert!(jump(&mut d, &c));
    assert_eq!(d.vy, -700.0);
    assert_eq!(d.state, MotionState::Jumping);
    assert!(!d.grounded);
}

#[test]
fn jump_while_airborne_is_ignored() {
    let c = RunnerConfig::default();
    let mut d = spawn_dino(&c);
    d.vy = -120.0;
    d.state = MotionState::Falling;
    let before = d.clone();
    assert!(!jump(&mut d, &c));
    assert_eq!(d, before);
}

#[test]
fn jump_when_dead_is_ignored() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    d.alive = false;
    assert!(!jump(&mut d, &c));
    assert_eq!(d.vy, 0.0);
}

// ── duck ──────────────────────────────────────────────────────────────────────

#[test]
fn duck_in_air_forces_descent() {
    let c = RunnerConfig::default();
    let mut d = spawn_dino(&c);
    d.vy = -400.0;
    assert!(duck(&mut d, &c));
    assert_eq!(d.vy, 500.0);
}

#[test]
fn duck_on_ground_is_ignored() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    assert!(!duck(&mut d, &c));
    assert_eq!(d.vy, 0.0);
}

// ── integrate ─────────────────────────────────────────────────────────────────

#[test]
fn gravity_accelerates_a_falling_dino() {
    let c = RunnerConfig::default();
    let mut d = spawn_dino(&c);
    integrate(&mut d, TICK, &c);
    assert!(approx(d.vy, 150.0));
    assert!(approx(d.y, 115.0));
    assert_eq!(d.state, MotionState::Falling);
    assert!(!d.grounded);
}

#[test]
fn landing_clamps_to_ground() {
    let c = RunnerConfig::default();
    let mut d = spawn_dino(&c);
    d.y = 240.0;
    d.vy = 100.0;
    d.state = MotionState::Falling;
    integrate(&mut d, TICK, &c);
    assert_eq!(d.y, 242.0);
    assert_eq!(d.vy, 0.0);
    assert!(d.grounded);
    assert_eq!(d.state, MotionState::Running);
}

#[test]
fn grounded_dino_stays_put() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    for _ in 0..10 {
        integrate(&mut d, TICK, &c);
    }
    assert_eq!(d.y, 242.0);
    assert!(d.grounded);
}

#[test]
fn jump_rises_then_lands() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    jump(&mut d, &c);
    integrate(&mut d, TICK, &c);
    assert!(approx(d.vy, -550.0));
    assert!(d.y < 242.0);
    assert_eq!(d.state, MotionState::Jumping);

    let mut saw_falling = false;
    for _ in 0..20 {
        integrate(&mut d, TICK, &c);
        saw_falling |= d.state == MotionState::Falling;
    }
    assert!(saw_falling);
    assert!(d.grounded);
    assert_eq!(d.state, MotionState::Running);
}

// ── flourish ──────────────────────────────────────────────────────────────────

#[test]
fn flourish_kicks_forward_and_up() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    launch_flourish(&mut d, &c);
    assert_eq!(d.state, MotionState::Dying);
    assert_eq!((d.vx, d.vy), (300.0, -250.0));
    assert!(!d.alive && !d.ground_collider);

    integrate(&mut d, TICK, &c);
    assert!(approx(d.x, 40.0));
    assert!(approx(d.vy, -100.0));
    assert!(approx(d.y, 232.0));
    assert_eq!(d.state, MotionState::Dying);
}

#[test]
fn flourish_falls_through_ground() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    launch_flourish(&mut d, &c);
    for _ in 0..10 {
        integrate(&mut d, TICK, &c);
    }
    assert!(d.bottom() > c.ground_y);
    assert!(!d.grounded);
}

#[test]
fn stop_forward_keeps_vertical_motion() {
    let c = RunnerConfig::default();
    let mut d = grounded_dino(&c);
    launch_flourish(&mut d, &c);
    stop_forward(&mut d);
    assert_eq!(d.vx, 0.0);
    assert_eq!(d.vy, -250.0);
}

#[test]
fn frozen_dino_does_not_move() {
    let c = RunnerConfig::default();
    let mut d = spawn_dino(&c);
    freeze(&mut d);
    let before = d.clone();
    integrate(&mut d, TICK, &c);
    assert_eq!(d, before);
}
