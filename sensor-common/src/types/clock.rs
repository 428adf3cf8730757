use std::time::{Duration, Instant};

use crate::traits::Clock;

/// Monotonic clock backed by the operating system.
pub struct SystemClock(Instant);

impl SystemClock {
    pub fn new() -> Self {
        Self(Instant::now())
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.0.elapsed().as_millis() as u64
    }

    fn sleep_millis(&self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_now_is_monotonic() {
        let clock = SystemClock::new();
        let t0 = clock.now_millis();
        let t1 = clock.now_millis();
        assert!(t1 >= t0);
    }

    #[test]
    fn test_clock_sleep_advances() {
        let clock = SystemClock::new();
        let t0 = clock.now_millis();
        clock.sleep_millis(20);
        assert!(clock.now_millis() - t0 >= 20);
    }
}
