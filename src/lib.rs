//! Single-lane endless runner.
//!
//! The library holds the simulation core (pure data in `entities`, per-tick
//! logic in `compute` and the component modules) plus the terminal renderer.
//! The binary only polls input, paces frames and draws snapshots.

pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod motion;
pub mod pool;
pub mod progress;
pub mod scheduler;
pub mod spawner;
