use std::time::{Duration, Instant};

/// Elapsed-time tracker polled by the aggregator
///
/// The time source is injectable so tests can drive it by hand.
pub struct Stopwatch {
    started_at: Instant,
    now_fn: Box<dyn Fn() -> Instant + Send + Sync>,
}

impl Stopwatch {
    /// Start a stopwatch on a custom clock
    pub fn start_with_clock(now_fn: Box<dyn Fn() -> Instant + Send + Sync>) -> Self {
        let started_at = now_fn();
        Self { started_at, now_fn }
    }

    pub fn elapsed(&self) -> Duration {
        (self.now_fn)().saturating_duration_since(self.started_at)
    }

    pub fn restart(&mut self) {
        self.started_at = (self.now_fn)();
    }
}

impl std::fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stopwatch")
            .field("elapsed", &self.elapsed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_restart_resets_elapsed() {
        let now = Arc::new(Mutex::new(Instant::now()));
        let clock = now.clone();
        let mut stopwatch = Stopwatch::start_with_clock(Box::new(move || *clock.lock().unwrap()));

        *now.lock().unwrap() += Duration::from_secs(7);
        assert_eq!(stopwatch.elapsed(), Duration::from_secs(7));

        stopwatch.restart();
        assert_eq!(stopwatch.elapsed(), Duration::ZERO);

        *now.lock().unwrap() += Duration::from_millis(1500);
        assert_eq!(stopwatch.elapsed(), Duration::from_millis(1500));
    }
}
