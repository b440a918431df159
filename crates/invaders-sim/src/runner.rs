//! Game loop thread — runs the engine at the tick rate and pushes
//! snapshots to the presentation layer.
//!
//! Commands arrive via an `mpsc` channel and are queued into the engine
//! at tick boundaries. The thread owns the engine; the host keeps the
//! returned handle to send commands and to shut the loop down. The bomb
//! schedule is paced by an `Instant`-based monotonic clock, so a slow
//! frame never delays a drop cadence.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use invaders_core::commands::PlayerCommand;
use invaders_core::constants::TICK_RATE;
use invaders_core::state::GameSnapshot;

use crate::engine::GameEngine;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands understood by the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Forward a player command to the engine.
    Player(PlayerCommand),
    /// Stop the loop. The bomb schedule is disarmed before exit, so a
    /// pending drop deadline never fires after teardown.
    Shutdown,
}

/// Receives each tick's snapshot. Called from the game loop thread;
/// implementations must not block.
pub trait PresentationSink: Send {
    fn present(&mut self, snapshot: &GameSnapshot);
}

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: mpsc::Sender<LoopCommand>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl GameLoopHandle {
    /// A sender for the loop's command channel.
    pub fn commands(&self) -> mpsc::Sender<LoopCommand> {
        self.commands.clone()
    }

    /// Request shutdown and wait for the loop thread to exit.
    pub fn shutdown(mut self) {
        let _ = self.commands.send(LoopCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Spawn the game loop in a new thread.
pub fn spawn_game_loop(
    engine: GameEngine,
    sink: impl PresentationSink + 'static,
) -> GameLoopHandle {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, &cmd_rx, sink);
        })
        .expect("Failed to spawn game loop thread");

    GameLoopHandle {
        commands: cmd_tx,
        thread: Some(thread),
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: &mpsc::Receiver<LoopCommand>,
    mut sink: impl PresentationSink,
) {
    let epoch = Instant::now();
    let mut next_tick_time = Instant::now();
    tracing::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(command)) => {
                    engine.queue_command(command);
                }
                Ok(LoopCommand::Shutdown) => {
                    engine.stop_bombing();
                    tracing::info!("game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    engine.stop_bombing();
                    tracing::warn!("command channel disconnected, stopping game loop");
                    return;
                }
            }
        }

        // 2. Advance one tick against the monotonic clock
        let snapshot = engine.tick(epoch.elapsed());

        // 3. Hand the snapshot to the presentation layer
        sink.present(&snapshot);

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
