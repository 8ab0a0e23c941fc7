//! Monotonic timing for the measured phase
//!
//! Thin start/stop wrapper over [`Instant`]. The runner starts it immediately
//! before spawning workers and stops it immediately after the last join, so
//! only the concurrent phase is measured. `Instant` is monotonic, so the
//! elapsed value is non-negative and immune to wall-clock adjustments.

use std::time::Instant;

/// Two-call elapsed-time measurement: `start()` then `stop() -> seconds`.
#[derive(Debug, Default)]
pub struct BenchTimer {
    started: Option<Instant>,
}

impl BenchTimer {
    pub fn new() -> Self {
        Self { started: None }
    }

    /// Begin measuring. Restarts the window if already running.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// End measuring and return elapsed seconds.
    ///
    /// Returns 0.0 when the timer was never started.
    pub fn stop(&mut self) -> f64 {
        match self.started.take() {
            Some(started) => started.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn elapsed_is_non_negative_and_grows() {
        let mut timer = BenchTimer::new();
        timer.start();
        thread::sleep(Duration::from_millis(5));
        let elapsed = timer.stop();
        assert!(elapsed >= 0.005);
    }

    #[test]
    fn stop_without_start_is_zero() {
        let mut timer = BenchTimer::new();
        assert_eq!(timer.stop(), 0.0);
    }

    #[test]
    fn stop_consumes_the_window() {
        let mut timer = BenchTimer::new();
        timer.start();
        let _ = timer.stop();
        assert_eq!(timer.stop(), 0.0);
    }
}
