use std::{
    io,
    process::exit,
    sync::{Arc, RwLock},
};

use anyhow::{Context, bail, ensure};
use liblife::{Grid, Position};

use crate::State;

pub fn run_cli(state_arc: Arc<RwLock<State>>) {
    for line_res in io::stdin().lines() {
        let Ok(line) = line_res else {
            return;
        };

        if let Err(e) = handle_cmd(&state_arc, line.split_whitespace()) {
            eprintln!("! {e:#}");
        }
    }
}

fn handle_cmd<'a, I>(state_arc: &Arc<RwLock<State>>, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "start" => crate::start_simulation(state_arc),

        "stop" => crate::stop_simulation(state_arc),

        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            let mut state = state_arc.write().unwrap();
            for _ in 0..times {
                state.grid.step();
            }
        }

        "clear" => crate::clear_simulation(state_arc),

        "set" => {
            let pos = parse_pos(&mut args)?;

            let mut state = state_arc.write().unwrap();
            ensure!(!state.in_motion(), "Simulation is in motion; stop it first");
            state.grid.set_alive(pos)?;
        }

        "toggle" => {
            let pos = parse_pos(&mut args)?;

            let mut state = state_arc.write().unwrap();
            ensure!(!state.in_motion(), "Simulation is in motion; stop it first");
            state.grid.toggle(pos)?;
        }

        "random" => {
            let alive_count = args
                .next()
                .context("missing alive count")?
                .parse::<usize>()?;

            let mut state = state_arc.write().unwrap();
            ensure!(!state.in_motion(), "Simulation is in motion; stop it first");

            let (width, height) = (state.grid.width(), state.grid.height());
            state.grid = Grid::with_random_cells(width, height, alive_count)?;
        }

        "faster" => crate::speed_up(state_arc),

        "slower" => crate::slow_down(state_arc),

        "status" => {
            let state = state_arc.read().unwrap();
            println!(
                "{}x{} grid, population {}, {} at {:?} per generation",
                state.grid.width(),
                state.grid.height(),
                state.grid.population(),
                if state.in_motion() { "running" } else { "stopped" },
                state.interval,
            );
        }

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(())
}

fn parse_pos<'a, I>(args: &mut I) -> anyhow::Result<Position>
where
    I: Iterator<Item = &'a str>,
{
    let row = args.next().context("missing row")?.parse::<usize>()?;
    let col = args.next().context("missing col")?.parse::<usize>()?;

    Ok(Position { row, col })
}
