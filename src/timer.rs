use log::info;
use std::time::{Duration, Instant};

/// Wall-clock stopwatch used for diagnostics only.
#[derive(Debug, Default)]
pub struct ElapsedTimer {
    started: Option<Instant>,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the timer and logs the elapsed time. Returns `None` if it was never started.
    pub fn stop(&mut self) -> Option<Duration> {
        let elapsed = self.started.take()?.elapsed();
        info!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
        Some(elapsed)
    }
}
