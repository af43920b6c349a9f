use std::{
    sync::{
        Arc, RwLock,
        mpsc::{self, Sender, TryRecvError},
    },
    thread,
    time::Duration,
};

use log::trace;

use crate::State;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);
pub const INTERVAL_STEP_MS: u64 = 50;
pub const MIN_INTERVAL_MS: u64 = 50;

/// Handle of the background thread that advances the simulation. The thread
/// exits after `stop`, or on its own once the handle is dropped.
pub struct TickerHost {
    stop_sender: Sender<()>,
    interval_sender: Sender<Duration>,
}

impl TickerHost {
    pub fn start(state_arc: Arc<RwLock<State>>, mut interval: Duration) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (interval_sender, interval_receiver) = mpsc::channel();

        thread::spawn(move || {
            while let Err(TryRecvError::Empty) = stop_receiver.try_recv() {
                let mut state = state_arc.write().unwrap();
                state.grid.step();
                trace!("generation advanced, population {}", state.grid.population());
                drop(state);

                if let Ok(new_interval) = interval_receiver.try_recv() {
                    interval = new_interval;
                }

                thread::sleep(interval);
            }
        });

        Self {
            stop_sender,
            interval_sender,
        }
    }

    pub fn stop(self) {
        self.stop_sender.send(()).unwrap();
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval_sender.send(interval).unwrap();
    }
}

/// All interval adjustments funnel through here, so repeated speed-ups can
/// never push the delay to zero.
pub fn clamp_interval(millis: u64) -> Duration {
    Duration::from_millis(millis.max(MIN_INTERVAL_MS))
}
