//! Simulation engine for INVADERS.
//!
//! Owns the hecs ECS world, runs systems in a fixed per-tick order,
//! and produces `GameSnapshot`s for the presentation layer. Completely
//! headless (no rendering or audio dependency), enabling deterministic
//! testing.

pub mod engine;
pub mod formation;
pub mod runner;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{ConfigError, GameEngine, SimConfig};
pub use invaders_core as core;
