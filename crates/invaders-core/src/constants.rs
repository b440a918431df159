//! Simulation constants and tuning parameters.
//!
//! Distances are in play-area points (origin at screen center, y up).

/// Simulation tick rate (Hz), matching the host render cadence.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen ---

/// Default play-area width in points (portrait phone scene).
pub const DEFAULT_SCREEN_WIDTH: f64 = 750.0;

/// Default play-area height in points.
pub const DEFAULT_SCREEN_HEIGHT: f64 = 1334.0;

// --- Ship ---

/// Ship sprite extent (points).
pub const SHIP_WIDTH: f64 = 50.0;
pub const SHIP_HEIGHT: f64 = 25.0;

/// Ship spawn height above the bottom screen edge.
pub const SHIP_BOTTOM_OFFSET: f64 = 100.0;

/// Glide duration for a fresh touch-down reposition (seconds).
pub const SHIP_REPOSITION_SECS: f64 = 0.5;

/// Glide duration for a touch-move tracking update (seconds).
pub const SHIP_TRACK_SECS: f64 = 0.05;

// --- Enemy formation ---

/// Columns per formation row.
pub const ENEMY_COLUMNS: usize = 9;

/// Formation rows.
pub const ENEMY_ROWS: usize = 5;

/// Vertical spacing between formation rows; also the frontline probe
/// distance and the shot spawn offset above the ship.
pub const ENEMY_VERTICAL_SPACING: f64 = 50.0;

/// Column pitch is `ENEMY_COLUMN_FACTOR * screen_width / ENEMY_SPACING_DIVISOR`.
pub const ENEMY_SPACING_DIVISOR: f64 = 16.0;
pub const ENEMY_COLUMN_FACTOR: f64 = 1.5;

/// Leftmost column x offset from the left screen edge.
pub const ENEMY_LEFT_MARGIN: f64 = 30.0;

/// Top row height below the top screen edge.
pub const ENEMY_TOP_OFFSET: f64 = 100.0;

/// Extra travel allowed past the rightmost spawn column before reversal.
pub const FORMATION_RIGHT_SLACK: f64 = 50.0;

/// Horizontal formation speed in points per tick.
pub const FORMATION_SPEED: f64 = 1.0;

/// Enemy sprite extent (points).
pub const ENEMY_WIDTH: f64 = 36.0;
pub const ENEMY_HEIGHT: f64 = 24.0;

// --- Projectiles ---

/// Player shot climb rate (points per second).
pub const SHOT_SPEED: f64 = 500.0;

/// Shot and bomb sprite extent (points, same sprite).
pub const PROJECTILE_WIDTH: f64 = 6.0;
pub const PROJECTILE_HEIGHT: f64 = 14.0;

/// Downward bomb acceleration (points per second squared).
/// 9.8 m/s² at the scene scale of 150 points per meter.
pub const BOMB_GRAVITY: f64 = 1470.0;

/// Wall-clock period between bomb drops (seconds).
pub const BOMB_PERIOD_SECS: f64 = 1.5;

/// Projectiles beyond this |y| are reclaimed by the cleanup pass.
pub const PROJECTILE_Y_LIMIT: f64 = 700.0;

// --- Houses ---

/// Number of houses.
pub const HOUSE_COUNT: usize = 4;

/// Blocks per house side (3×3 grid).
pub const HOUSE_GRID: usize = 3;

/// House pitch is `HOUSE_STEP_FACTOR * screen_width / HOUSE_SPACING_DIVISOR`,
/// starting `HOUSE_START_FACTOR` of one pitch unit in from the left edge.
pub const HOUSE_SPACING_DIVISOR: f64 = 9.0;
pub const HOUSE_START_FACTOR: f64 = 0.5;
pub const HOUSE_STEP_FACTOR: f64 = 2.2;

/// House row height above the ship row.
pub const HOUSE_BOTTOM_OFFSET: f64 = 150.0;

/// Block width and per-row heights (top, middle, bottom), in points.
pub const HOUSE_BLOCK_WIDTH: f64 = 30.0;
pub const HOUSE_ROW_HEIGHTS: [f64; HOUSE_GRID] = [11.0, 25.0, 26.0];

/// Block column x offset from the house anchor, per column index + 1.
pub const HOUSE_COLUMN_PITCH: f64 = 30.0;

// --- Scoring ---

/// Points awarded per destroyed enemy, by tier (1, 2, 3).
pub const TIER1_POINTS: u32 = 30;
pub const TIER2_POINTS: u32 = 20;
pub const TIER3_POINTS: u32 = 10;
