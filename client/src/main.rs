use std::{
    sync::{Arc, RwLock},
    thread,
    time::Duration,
};

use anyhow::Context;
use liblife::Grid;
use log::info;
use ticker::TickerHost;

mod cli;
mod renderer;
mod ticker;

const GRID_WIDTH: usize = 35;
const GRID_HEIGHT: usize = 35;

/// Everything one simulation session owns: the board, the handle of the
/// ticker thread while one runs, and the tick interval.
pub struct State {
    grid: Grid,
    ticker: Option<TickerHost>,
    interval: Duration,
}

impl State {
    /// The original UI disables cell editing while generations are ticking;
    /// both input paths check this before mutating cells.
    pub fn in_motion(&self) -> bool {
        self.ticker.is_some()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).context("Creating the starting grid")?;

    let state_arc = Arc::new(RwLock::new(State {
        grid,
        ticker: None,
        interval: ticker::DEFAULT_INTERVAL,
    }));

    let cli_state_arc = state_arc.clone();
    thread::spawn(move || cli::run_cli(cli_state_arc));

    renderer::run(state_arc)
}

pub fn start_simulation(state_arc: &Arc<RwLock<State>>) {
    let mut state = state_arc.write().unwrap();

    if state.ticker.is_some() {
        return;
    }

    let interval = state.interval;
    state.ticker = Some(TickerHost::start(state_arc.clone(), interval));

    info!("simulation started, one generation per {interval:?}");
}

pub fn stop_simulation(state_arc: &Arc<RwLock<State>>) {
    let mut state = state_arc.write().unwrap();

    if let Some(ticker) = state.ticker.take() {
        ticker.stop();
        info!("simulation stopped");
    }
}

/// The Clear button of the original: halts the simulation and wipes the
/// board in one action.
pub fn clear_simulation(state_arc: &Arc<RwLock<State>>) {
    stop_simulation(state_arc);

    let mut state = state_arc.write().unwrap();
    state.grid.clear();

    info!("grid cleared");
}

pub fn speed_up(state_arc: &Arc<RwLock<State>>) {
    retune(state_arc, |millis| {
        millis.saturating_sub(ticker::INTERVAL_STEP_MS)
    });
}

pub fn slow_down(state_arc: &Arc<RwLock<State>>) {
    retune(state_arc, |millis| {
        millis.saturating_add(ticker::INTERVAL_STEP_MS)
    });
}

fn retune(state_arc: &Arc<RwLock<State>>, adjust: impl FnOnce(u64) -> u64) {
    let mut state = state_arc.write().unwrap();

    let millis = adjust(state.interval.as_millis() as u64);
    state.interval = ticker::clamp_interval(millis);

    let interval = state.interval;
    if let Some(ticker) = &mut state.ticker {
        ticker.set_interval(interval);
    }

    info!("tick interval is now {interval:?}");
}
