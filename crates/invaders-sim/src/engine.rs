//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `GameSnapshot`s.
//! Completely headless (no rendering or audio dependency), enabling
//! deterministic testing.
//!
//! Per tick, in order: drain the command queue, apply a due bomb drop
//! (the one serialized timer entry point), clean up off-screen
//! projectiles, advance the formation and re-evaluate its bounds, glide
//! the ship, integrate projectiles, resolve collisions, then snapshot.

use std::collections::VecDeque;
use std::time::Duration;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use invaders_core::commands::PlayerCommand;
use invaders_core::components::ShipControl;
use invaders_core::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, HOUSE_COUNT};
use invaders_core::events::GameEvent;
use invaders_core::state::GameSnapshot;
use invaders_core::types::{Position, SimTime};

use crate::formation::FormationState;
use crate::scheduler::BombSchedule;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same bomb targeting.
    pub seed: u64,
    /// Play-area width in points. Must be positive: formation and house
    /// spacing are derived from it.
    pub screen_width: f64,
    /// Play-area height in points. Must be positive.
    pub screen_height: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

/// Setup-time configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen width must be positive, got {0}")]
    ScreenWidth(f64),
    #[error("screen height must be positive, got {0}")]
    ScreenHeight(f64),
}

impl SimConfig {
    /// Reject degenerate screen dimensions before any spacing math runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0) {
            return Err(ConfigError::ScreenWidth(self.screen_width));
        }
        if !(self.screen_height > 0.0) {
            return Err(ConfigError::ScreenHeight(self.screen_height));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: u32,
    house_impacts: [u32; HOUSE_COUNT],
    formation: FormationState,
    bombs: BombSchedule,
    ship: hecs::Entity,
}

impl GameEngine {
    /// Create a new engine and set up the initial world: ship, 5×9
    /// enemy formation, four houses. The bomb schedule starts armed.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut events = Vec::new();
        let ship = world_setup::setup_world(&mut world, &config, &mut events);

        Ok(Self {
            world,
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events,
            score: 0,
            house_impacts: [0; HOUSE_COUNT],
            formation: FormationState::from_screen_width(config.screen_width),
            bombs: BombSchedule::default(),
            ship,
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. `now` is the host's monotonic clock, which paces the
    /// bomb schedule independently of the tick rate.
    pub fn tick(&mut self, now: Duration) -> GameSnapshot {
        self.process_commands();
        self.run_systems(now);
        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.score,
            self.house_impacts,
            events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the per-house impact counters.
    pub fn house_impacts(&self) -> [u32; HOUSE_COUNT] {
        self.house_impacts
    }

    /// Get the formation's movement state.
    pub fn formation(&self) -> FormationState {
        self.formation
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Re-arm the bomb schedule.
    pub fn start_bombing(&mut self) {
        self.bombs.start();
    }

    /// Disarm the bomb schedule, e.g. on scene teardown. A deadline
    /// already pending never fires after this returns.
    pub fn stop_bombing(&mut self) {
        self.bombs.stop();
    }

    /// Whether the bomb schedule is armed.
    pub fn bombing_armed(&self) -> bool {
        self.bombs.is_armed()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetShipTarget { x, pace } => {
                if let Ok(mut control) = self.world.get::<&mut ShipControl>(self.ship) {
                    control.target_x = x;
                    control.remaining_secs = pace.duration_secs();
                }
            }
            PlayerCommand::FireShot => {
                let ship_pos = match self.world.get::<&Position>(self.ship) {
                    Ok(pos) => *pos,
                    Err(_) => return,
                };
                world_setup::spawn_shot(&mut self.world, ship_pos, &mut self.events);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now: Duration) {
        // 1. Bomb drop — the wall-clock timer entry point, serialized
        //    into the tick so its world mutations never race the rest.
        if self.bombs.poll(now) {
            systems::bombardier::run(&mut self.world, &mut self.rng, &mut self.events);
        }
        // 2. Cleanup (off-screen projectiles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        // 3. Formation advance + bounds reversal
        systems::formation::run(&mut self.world, &mut self.formation);
        // 4. Ship glide toward its commanded target
        systems::ship_control::run(&mut self.world);
        // 5. Projectile kinematics
        systems::movement::run(&mut self.world);
        // 6. Collision resolution
        systems::collision::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.score,
            &mut self.house_impacts,
            &mut self.events,
        );
    }

    /// Events accumulated since the last tick (for tests).
    #[cfg(test)]
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Destroy an entity through the buffered despawn path (for tests).
    #[cfg(test)]
    pub fn destroy_entity(&mut self, entity: hecs::Entity) {
        self.despawn_buffer.clear();
        self.despawn_buffer.push(entity);
        systems::despawn_buffered(&mut self.world, &mut self.despawn_buffer, &mut self.events);
    }

    /// Spawn an enemy at an arbitrary position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        tier: invaders_core::enums::EnemyTier,
        position: Position,
    ) -> hecs::Entity {
        world_setup::spawn_enemy(&mut self.world, tier, position, &mut self.events)
    }

    /// Spawn a shot at an arbitrary position (for tests).
    #[cfg(test)]
    pub fn spawn_test_shot(&mut self, position: Position) -> hecs::Entity {
        use invaders_core::constants::ENEMY_VERTICAL_SPACING;
        // spawn_shot offsets upward from a ship position; compensate.
        let from = Position::new(position.x, position.y - ENEMY_VERTICAL_SPACING);
        world_setup::spawn_shot(&mut self.world, from, &mut self.events)
    }

    /// Spawn a bomb at an arbitrary position (for tests).
    #[cfg(test)]
    pub fn spawn_test_bomb(&mut self, position: Position) -> hecs::Entity {
        world_setup::spawn_bomb(&mut self.world, position, &mut self.events)
    }
}
