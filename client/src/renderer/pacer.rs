use std::time::{Duration, Instant};

/// Holds redraws to a fixed frame budget. `wait` burns off whatever is left
/// of the current frame's budget, then starts the next one.
pub struct FramePacer {
    frame_budget: Duration,
    frame_started: Option<Instant>,
}

impl FramePacer {
    pub fn new(frame_budget: Duration) -> Self {
        Self {
            frame_budget,
            frame_started: None,
        }
    }

    pub fn wait(&mut self) {
        if let Some(started) = self.frame_started {
            let elapsed = started.elapsed();

            if elapsed < self.frame_budget {
                spin_sleep::sleep(self.frame_budget - elapsed);
            }
        }

        self.frame_started = Some(Instant::now());
    }
}
