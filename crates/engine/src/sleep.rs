//! Frame pacing.

use std::thread;
use std::time::Duration;

/// Blocks between frames. A sleep always runs to completion.
pub trait Sleeper {
    fn sleep_millis(&mut self, ms: u64);
}

impl<S: Sleeper + ?Sized> Sleeper for &mut S {
    fn sleep_millis(&mut self, ms: u64) {
        (**self).sleep_millis(ms)
    }
}

/// Real-time pacing with `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep_millis(&mut self, ms: u64) {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms));
        }
    }
}

/// Returns immediately and remembers every requested delay.
#[derive(Debug, Clone, Default)]
pub struct NoSleep {
    requested: Vec<u64>,
}

impl NoSleep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> &[u64] {
        &self.requested
    }

    pub fn total_ms(&self) -> u64 {
        self.requested.iter().sum()
    }
}

impl Sleeper for NoSleep {
    fn sleep_millis(&mut self, ms: u64) {
        self.requested.push(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sleep_records_requests() {
        let mut s = NoSleep::new();
        s.sleep_millis(25);
        (&mut s).sleep_millis(10);
        assert_eq!(s.requested(), &[25, 10]);
        assert_eq!(s.total_ms(), 35);
    }

    #[test]
    fn thread_sleeper_accepts_zero() {
        ThreadSleeper.sleep_millis(0);
    }
}
