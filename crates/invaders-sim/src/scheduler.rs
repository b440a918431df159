//! Bomb drop schedule — a cancellable wall-clock timer.
//!
//! The drop cadence follows the host's monotonic clock, not the tick
//! rate: a slow or fast render loop changes how often `poll` is called,
//! never how often bombs fall. Firing is applied inside the engine tick,
//! so the drop's world mutations are serialized with everything else.

use std::time::Duration;

use invaders_core::constants::BOMB_PERIOD_SECS;

/// Periodic wall-clock schedule with explicit start/stop.
///
/// After `stop()` the pending deadline is discarded and `poll` never
/// fires again until `start()` re-arms it; a stale deadline is a no-op,
/// not a fault.
#[derive(Debug, Clone)]
pub struct BombSchedule {
    period: Duration,
    armed: bool,
    next_fire: Option<Duration>,
}

impl BombSchedule {
    /// Create an armed schedule. The first drop lands one period after
    /// the first poll.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            armed: true,
            next_fire: None,
        }
    }

    /// Re-arm the schedule. The next drop lands one period after the
    /// next poll.
    pub fn start(&mut self) {
        self.armed = true;
    }

    /// Disarm the schedule and discard any pending deadline.
    pub fn stop(&mut self) {
        self.armed = false;
        self.next_fire = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Check the schedule against the host monotonic clock.
    ///
    /// Returns `true` at most once per call when a period boundary has
    /// passed. The cadence stays anchored to the prior deadline; if
    /// the host was suspended past a full period the deadline is
    /// re-based instead of bursting missed drops.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.armed {
            return false;
        }
        match self.next_fire {
            None => {
                self.next_fire = Some(now + self.period);
                false
            }
            Some(due) if now >= due => {
                let mut next = due + self.period;
                if next <= now {
                    next = now + self.period;
                }
                self.next_fire = Some(next);
                true
            }
            Some(_) => false,
        }
    }
}

impl Default for BombSchedule {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(BOMB_PERIOD_SECS))
    }
}
