//! Wall-clock pacing for the 1 MHz CPU clock.
//!
//! Every emulated cycle represents 1 µs of machine time. The scheduler
//! calls [`Pacer::pace`] periodically; when emulation runs a little ahead
//! of the wall clock the pacer sleeps off the lead. Drift beyond
//! [`MAX_DRIFT`] in either direction (a debugger pause, a suspended
//! laptop, a stalled host) moves the reference point instead, so the
//! machine neither races to catch up nor stalls the wall clock.

use std::time::{Duration, Instant};

/// Emulated duration of one CPU cycle at 1 MHz.
pub const NANOS_PER_CYCLE: u64 = 1_000;

/// How many cycles to run between pacing checks.
pub const CHECK_INTERVAL: u64 = 100;

/// Beyond this much drift, in either direction, resynchronize instead of
/// sleeping or catching up.
pub const MAX_DRIFT: Duration = Duration::from_millis(100);

/// What the scheduler should do at a pacing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceAction {
    /// Slightly ahead of real time: sleep this long.
    Sleep(Duration),
    /// Drifted more than [`MAX_DRIFT`] either way: drop the wait.
    Resync,
    /// Within tolerance, keep running.
    Continue,
}

/// Compare simulated time against elapsed wall time.
#[must_use]
pub fn decide(simulated: Duration, elapsed: Duration) -> PaceAction {
    if simulated > elapsed {
        let lead = simulated - elapsed;
        if lead > MAX_DRIFT {
            PaceAction::Resync
        } else {
            PaceAction::Sleep(lead)
        }
    } else if elapsed - simulated > MAX_DRIFT {
        PaceAction::Resync
    } else {
        PaceAction::Continue
    }
}

/// Tracks the wall-clock reference point for a run of emulation.
pub struct Pacer {
    start: Instant,
    start_cycles: u64,
}

impl Pacer {
    /// Start pacing from the given cycle count.
    #[must_use]
    pub fn new(cycles: u64) -> Self {
        Self {
            start: Instant::now(),
            start_cycles: cycles,
        }
    }

    /// Block until wall time catches up with the given cycle count, or
    /// resynchronize if the host has fallen too far behind.
    pub fn pace(&mut self, cycles: u64) {
        let simulated =
            Duration::from_nanos(cycles.saturating_sub(self.start_cycles) * NANOS_PER_CYCLE);
        let elapsed = self.start.elapsed();
        match decide(simulated, elapsed) {
            PaceAction::Sleep(lead) => spin_sleep::sleep(lead),
            PaceAction::Resync => {
                // Move the reference so `cycles` corresponds to now.
                self.start = Instant::now()
                    .checked_sub(simulated)
                    .unwrap_or_else(Instant::now);
            }
            PaceAction::Continue => {}
        }
    }
}
