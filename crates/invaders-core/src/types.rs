//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in play-area points.
/// Origin at screen center, x = right, y = up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in points per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle, used for overlap and occupancy tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Position,
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Rect {
    pub fn new(center: Position, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Whether a point lies inside this rectangle (edges inclusive).
    pub fn contains(&self, point: Position) -> bool {
        (point.x - self.center.x).abs() <= self.width / 2.0
            && (point.y - self.center.y).abs() <= self.height / 2.0
    }

    /// Whether two rectangles overlap (touching edges count).
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.center.x - other.center.x).abs() <= (self.width + other.width) / 2.0
            && (self.center.y - other.center.y).abs() <= (self.height + other.height) / 2.0
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
