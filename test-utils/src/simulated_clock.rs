use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sensor_common::Clock;

struct ClockState {
    now: u64,
    horizon: Option<u64>,
    jitter: Vec<u64>,
    next_jitter: usize,
    parked: bool,
    sleeping: usize,
    generation: u64,
}

/// Deterministic [`Clock`] for tests.
///
/// Sleeping never blocks: it advances simulated time to the requested deadline plus the next
/// value of a cyclic jitter pattern. A sleep whose deadline lies past the horizon parks the
/// calling thread until the horizon is moved, so a test can act at an exact simulated instant.
pub struct SimulatedClock {
    state: Mutex<ClockState>,
    changed: Condvar,
}

impl SimulatedClock {
    pub fn new(horizon: Option<u64>) -> Self {
        Self::with_jitter(horizon, vec![])
    }

    /// `jitter` is added, in order and cyclically, to every deadline reached by a sleep.
    pub fn with_jitter(horizon: Option<u64>, jitter: Vec<u64>) -> Self {
        Self {
            state: Mutex::new(ClockState {
                now: 0,
                horizon,
                jitter,
                next_jitter: 0,
                parked: false,
                sleeping: 0,
                generation: 0,
            }),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Waits until a sleeping thread is parked at the horizon. Returns false on timeout.
    pub fn wait_until_parked(&self, timeout: Duration) -> bool {
        let (state, _) = self
            .changed
            .wait_timeout_while(self.lock(), timeout, |state| !state.parked)
            .unwrap_or_else(PoisonError::into_inner);
        state.parked
    }

    /// Waits until no thread is inside `sleep_millis`. Returns false on timeout.
    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        let (state, _) = self
            .changed
            .wait_timeout_while(self.lock(), timeout, |state| state.sleeping > 0)
            .unwrap_or_else(PoisonError::into_inner);
        state.sleeping == 0
    }

    /// Removes the horizon and lets a parked thread continue.
    pub fn release(&self) {
        self.move_horizon(None);
    }

    /// Moves the horizon to `horizon` and lets a parked thread continue up to it.
    pub fn extend_horizon(&self, horizon: u64) {
        self.move_horizon(Some(horizon));
    }

    fn move_horizon(&self, horizon: Option<u64>) {
        let mut state = self.lock();
        state.horizon = horizon;
        state.parked = false;
        state.generation += 1;
        self.changed.notify_all();
    }

    /// Moves simulated time forward without sleeping.
    pub fn advance(&self, millis: u64) {
        self.lock().now += millis;
    }
}

impl Clock for SimulatedClock {
    fn now_millis(&self) -> u64 {
        self.lock().now
    }

    fn sleep_millis(&self, millis: u64) {
        let mut state = self.lock();
        state.sleeping += 1;
        let deadline = state.now.saturating_add(millis);
        while state.horizon.is_some_and(|horizon| deadline > horizon) {
            log::debug!("Simulated clock parked at {} ms", state.now);
            state.parked = true;
            self.changed.notify_all();
            let generation = state.generation;
            state = self
                .changed
                .wait_while(state, |state| state.generation == generation)
                .unwrap_or_else(PoisonError::into_inner);
        }
        let jitter = if state.jitter.is_empty() {
            0
        } else {
            let jitter = state.jitter[state.next_jitter % state.jitter.len()];
            state.next_jitter += 1;
            jitter
        };
        state.now = deadline.saturating_add(jitter);
        state.sleeping -= 1;
        self.changed.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sleep_advances_with_jitter() {
        let clock = SimulatedClock::with_jitter(None, vec![3, 0]);
        assert_eq!(clock.now_millis(), 0);
        clock.sleep_millis(10);
        assert_eq!(clock.now_millis(), 13);
        clock.sleep_millis(10);
        assert_eq!(clock.now_millis(), 23);
        clock.sleep_millis(10);
        assert_eq!(clock.now_millis(), 36);
    }

    #[test]
    fn test_advance() {
        let clock = SimulatedClock::new(None);
        clock.advance(250);
        assert_eq!(clock.now_millis(), 250);
    }

    #[test]
    fn test_park_at_horizon() {
        let clock = Arc::new(SimulatedClock::new(Some(100)));
        clock.sleep_millis(100);
        assert_eq!(clock.now_millis(), 100);

        let sleeper = {
            let clock = clock.clone();
            std::thread::spawn(move || clock.sleep_millis(50))
        };
        assert!(clock.wait_until_parked(Duration::from_secs(5)));
        assert_eq!(clock.now_millis(), 100);

        clock.release();
        sleeper.join().unwrap();
        assert_eq!(clock.now_millis(), 150);
        assert!(clock.wait_until_idle(Duration::from_secs(1)));
    }

    #[test]
    fn test_extend_horizon() {
        let clock = Arc::new(SimulatedClock::new(Some(100)));
        let sleeper = {
            let clock = clock.clone();
            std::thread::spawn(move || {
                clock.sleep_millis(150);
                clock.sleep_millis(150);
            })
        };
        assert!(clock.wait_until_parked(Duration::from_secs(5)));
        assert_eq!(clock.now_millis(), 0);

        clock.extend_horizon(200);
        assert!(clock.wait_until_parked(Duration::from_secs(5)));
        assert_eq!(clock.now_millis(), 150);

        clock.release();
        sleeper.join().unwrap();
        assert_eq!(clock.now_millis(), 300);
    }

    #[test]
    fn test_wait_until_parked_times_out() {
        let clock = SimulatedClock::new(Some(100));
        assert!(!clock.wait_until_parked(Duration::from_millis(20)));
    }
}
