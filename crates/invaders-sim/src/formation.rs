//! Formation state — shared direction, speed, and reversal bounds for
//! the enemy group.
//!
//! Bounds are derived once from the screen width at setup and never
//! recomputed; an enemy's death does not shrink the travel range.

use invaders_core::constants::{
    ENEMY_COLUMNS, ENEMY_COLUMN_FACTOR, ENEMY_LEFT_MARGIN, ENEMY_SPACING_DIVISOR,
    FORMATION_RIGHT_SLACK, FORMATION_SPEED,
};

/// Horizontal travel direction of the enemy formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationDirection {
    Right,
    Left,
}

impl FormationDirection {
    /// Signed unit step for this direction.
    pub fn sign(self) -> f64 {
        match self {
            FormationDirection::Right => 1.0,
            FormationDirection::Left => -1.0,
        }
    }
}

/// The formation's movement state. One instance per game, owned by the
/// engine; the formation system is its single writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationState {
    pub direction: FormationDirection,
    /// Horizontal step per tick (points). Constant for the whole game.
    pub speed: f64,
    /// Reversal threshold for leftward travel.
    pub left_bound: f64,
    /// Reversal threshold for rightward travel.
    pub right_bound: f64,
}

impl FormationState {
    /// Derive the formation bounds from the screen width.
    ///
    /// The left bound is the leftmost spawn column; the right bound sits
    /// one column pitch past the rightmost spawn column plus slack, so
    /// the group overshoots the grid before reversing.
    pub fn from_screen_width(screen_width: f64) -> Self {
        let spacing = screen_width / ENEMY_SPACING_DIVISOR;
        let start_x = -(screen_width / 2.0) + ENEMY_LEFT_MARGIN;
        Self {
            direction: FormationDirection::Right,
            speed: FORMATION_SPEED,
            left_bound: start_x,
            right_bound: start_x
                + ENEMY_COLUMN_FACTOR * ENEMY_COLUMNS as f64 * spacing
                + FORMATION_RIGHT_SLACK,
        }
    }
}
