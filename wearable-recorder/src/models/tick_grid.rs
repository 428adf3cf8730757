/// Grid-anchored tick scheduler.
///
/// Ticks fall on exact multiples of the interval measured from session start. A late
/// check never shifts later ticks; missed ticks are emitted back to back until the grid
/// catches up with the clock.
#[derive(Debug, Clone)]
pub(crate) struct TickGrid {
    interval_ms: u64,
    last_tick_offset_ms: Option<u64>,
}

impl TickGrid {
    /// The first poll is due immediately, at offset zero.
    pub(crate) fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_tick_offset_ms: None,
        }
    }

    /// Offset of the next tick. `None` once the grid runs past `u64::MAX`.
    fn next_deadline(&self) -> Option<u64> {
        match self.last_tick_offset_ms {
            None => Some(0),
            Some(last) => last.checked_add(self.interval_ms),
        }
    }

    /// Returns the offset of the next tick if it is due at `elapsed_ms`, advancing the grid
    /// by exactly one interval.
    pub(crate) fn poll(&mut self, elapsed_ms: u64) -> Option<u64> {
        let deadline = self.next_deadline().filter(|deadline| elapsed_ms >= *deadline)?;
        self.last_tick_offset_ms = Some(deadline);
        Some(deadline)
    }

    /// Milliseconds from `elapsed_ms` until the next tick is due. Zero when already due.
    pub(crate) fn millis_until_due(&self, elapsed_ms: u64) -> u64 {
        self.next_deadline()
            .map_or(u64::MAX, |deadline| deadline.saturating_sub(elapsed_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_immediate() {
        let mut grid = TickGrid::new(1000);
        assert_eq!(grid.millis_until_due(0), 0);
        assert_eq!(grid.poll(0), Some(0));
        assert_eq!(grid.poll(0), None);
    }

    #[test]
    fn test_ticks_stay_on_grid_despite_late_checks() {
        let mut grid = TickGrid::new(100);
        assert_eq!(grid.poll(3), Some(0));
        assert_eq!(grid.poll(99), None);
        assert_eq!(grid.poll(117), Some(100));
        assert_eq!(grid.millis_until_due(117), 83);
        assert_eq!(grid.poll(201), Some(200));
        assert_eq!(grid.poll(299), None);
        assert_eq!(grid.poll(300), Some(300));
    }

    #[test]
    fn test_missed_ticks_are_caught_up() {
        let mut grid = TickGrid::new(100);
        assert_eq!(grid.poll(0), Some(0));
        assert_eq!(grid.poll(350), Some(100));
        assert_eq!(grid.millis_until_due(350), 0);
        assert_eq!(grid.poll(350), Some(200));
        assert_eq!(grid.poll(350), Some(300));
        assert_eq!(grid.poll(350), None);
        assert_eq!(grid.millis_until_due(350), 50);
    }

    #[test]
    fn test_nth_tick_is_n_intervals() {
        let interval = 37;
        let mut grid = TickGrid::new(interval);
        let mut elapsed = 0;
        let mut ticks = Vec::new();
        while ticks.len() < 50 {
            match grid.poll(elapsed) {
                Some(offset) => ticks.push(offset),
                None => elapsed += grid.millis_until_due(elapsed) + (elapsed % 7),
            }
        }
        for (n, offset) in ticks.into_iter().enumerate() {
            assert_eq!(offset, n as u64 * interval);
        }
    }

    #[test]
    fn test_interval_above_i64_range() {
        let interval = 1u64 << 63;
        let mut grid = TickGrid::new(interval);
        assert_eq!(grid.poll(0), Some(0));
        assert_eq!(grid.poll(1_000_000), None);
        assert_eq!(grid.millis_until_due(1_000_000), interval - 1_000_000);
        assert_eq!(grid.poll(interval), Some(interval));
        assert_eq!(grid.poll(u64::MAX), None);
        assert_eq!(grid.millis_until_due(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_max_interval_ticks_once() {
        let mut grid = TickGrid::new(u64::MAX);
        assert_eq!(grid.poll(0), Some(0));
        assert_eq!(grid.poll(0), None);
        assert_eq!(grid.poll(5), None);
        assert_eq!(grid.millis_until_due(5), u64::MAX - 5);
        assert_eq!(grid.poll(u64::MAX), Some(u64::MAX));
        assert_eq!(grid.poll(u64::MAX), None);
    }
}
