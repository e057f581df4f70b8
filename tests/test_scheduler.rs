use std::time::Duration;

use dino_runner::clock::Clock;
use dino_runner::config::RunnerConfig;
use dino_runner::progress::Progress;
use dino_runner::scheduler::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[test]
fn clock_accumulates_deltas() {
    let mut clock = Clock::new();
    assert_eq!(clock.now(), Duration::ZERO);
    assert_eq!(clock.advance(ms(16)), ms(16));
    assert_eq!(clock.advance(ms(34)), ms(50));
    assert_eq!(clock.now(), ms(50));
    assert_eq!(clock.ticks(), 2);
}

#[test]
fn clock_zero_delta_still_counts_tick() {
    let mut clock = Clock::new();
    clock.advance(Duration::ZERO);
    assert_eq!(clock.now(), Duration::ZERO);
    assert_eq!(clock.ticks(), 1);
}

// ── Progress ──────────────────────────────────────────────────────────────────

#[test]
fn progress_starts_at_base() {
    let p = Progress::new(&RunnerConfig::default());
    assert_eq!(p.score, 0);
    assert_eq!(p.speed, 4.0);
}

#[test]
fn progress_step_ramps_linearly() {
    let mut p = Progress::new(&RunnerConfig::default());
    for n in 1..=200u64 {
        p.step();
        assert_eq!(p.score, n);
        assert!((p.speed - (4.0 + 0.005 * n as f64)).abs() < 1e-9);
    }
}

#[test]
fn progress_speed_holds_over_long_runs() {
    let mut p = Progress::new(&RunnerConfig::default());
    for _ in 0..200_000 {
        p.step();
    }
    assert_eq!(p.score, 200_000);
    assert!((p.speed - 1004.0).abs() < 1e-6, "{}", p.speed);
}

#[test]
fn progress_reset_restores_base() {
    let mut p = Progress::new(&RunnerConfig::default());
    for _ in 0..50 {
        p.step();
    }
    p.reset();
    assert_eq!(p.score, 0);
    assert_eq!(p.speed, 4.0);
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[test]
fn nothing_due_before_time() {
    let mut s = Scheduler::new();
    s.schedule(ms(500), 0, Deferred::StopFlourish);
    assert!(s.take_due(ms(499)).is_empty());
    assert_eq!(s.len(), 1);
}

#[test]
fn due_events_are_removed_once() {
    let mut s = Scheduler::new();
    s.schedule(ms(500), 3, Deferred::StopFlourish);
    let due = s.take_due(ms(500));
    assert_eq!(
        due,
        vec![Scheduled { due: ms(500), generation: 3, event: Deferred::StopFlourish }]
    );
    assert!(s.is_empty());
    assert!(s.take_due(ms(10_000)).is_empty());
}

#[test]
fn due_events_come_out_earliest_first() {
    let mut s = Scheduler::new();
    s.schedule(ms(600), 0, Deferred::FreezePhysics);
    s.schedule(ms(500), 0, Deferred::StopFlourish);
    s.schedule(ms(900), 0, Deferred::StopFlourish);
    let due: Vec<Deferred> = s.take_due(ms(700)).into_iter().map(|e| e.event).collect();
    assert_eq!(due, vec![Deferred::StopFlourish, Deferred::FreezePhysics]);
    assert_eq!(s.len(), 1);
}
