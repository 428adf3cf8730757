/// Monotonic time source used to schedule samples.
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_millis(&self) -> u64;
    /// Blocks the calling thread for `millis` milliseconds.
    fn sleep_millis(&self, millis: u64);
}
