mod frame;
mod pacer;
mod window;

use std::sync::{Arc, Mutex, RwLock};

use liblife::Position;
use log::debug;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::State;
use frame::RenderFrame;
use window::{LifeWindow, LifeWindowConfig};

const CELL_PIXELS: u32 = 12;
const TARGET_FPS: u64 = 30;

const BACKGROUND_COLOR: [u8; 4] = [10, 10, 10, 255];
const DEAD_COLOR: [u8; 4] = [0, 0, 0, 255];
const ALIVE_COLOR: [u8; 4] = [255, 255, 255, 255];
const HALF_CELL_MARGIN: u32 = 1;

pub fn run(state_arc: Arc<RwLock<State>>) -> anyhow::Result<()> {
    let (window_width, window_height) = {
        let state = state_arc.read().unwrap();
        (
            state.grid.width() as u32 * CELL_PIXELS,
            state.grid.height() as u32 * CELL_PIXELS,
        )
    };

    let renderer_state_arc = Arc::new(Mutex::new(RendererState {
        session: state_arc,
        cursor_cell: None,
        mouse_pressed: false,
        frame_width: 0,
        frame_height: 0,
    }));

    let draw_state_arc = renderer_state_arc.clone();
    let event_state_arc = renderer_state_arc.clone();

    let window = LifeWindow::new(LifeWindowConfig {
        title: "game of life".to_owned(),
        width: window_width,
        height: window_height,
        target_fps: TARGET_FPS,
        draw_callback: Box::new(move |frame| {
            let mut state = draw_state_arc.lock().unwrap();
            draw(&mut state, frame);
        }),
        event_callback: Box::new(move |event| {
            let mut state = event_state_arc.lock().unwrap();
            on_event(&mut state, event);
        }),
    });

    window.run()
}

fn draw(state: &mut RendererState, mut frame: RenderFrame) {
    state.frame_width = frame.width;
    state.frame_height = frame.height;

    let session = state.session.read().unwrap();

    let cell_width = frame.width / session.grid.width() as u32;
    let cell_height = frame.height / session.grid.height() as u32;

    frame.fill(BACKGROUND_COLOR);

    for (pos, cell) in session.grid.enumerate_cells() {
        let color = if cell.is_alive() {
            ALIVE_COLOR
        } else {
            DEAD_COLOR
        };

        frame.draw_square(
            pos.col as u32 * cell_width + HALF_CELL_MARGIN,
            pos.row as u32 * cell_height + HALF_CELL_MARGIN,
            cell_width.saturating_sub(HALF_CELL_MARGIN * 2),
            cell_height.saturating_sub(HALF_CELL_MARGIN * 2),
            color,
        );
    }
}

fn on_event(state: &mut RendererState, event: &WindowEvent) {
    match event {
        WindowEvent::MouseInput {
            state: button_state,
            button: MouseButton::Left,
            ..
        } => {
            state.mouse_pressed = button_state.is_pressed();

            if state.mouse_pressed {
                if let Some(cell) = state.cursor_cell {
                    toggle_cell(state, cell);
                }
            }
        }

        WindowEvent::CursorMoved { position, .. } => {
            let moved_to = cell_under_cursor(state, position.cast::<u32>());
            let entered_new_cell = moved_to != state.cursor_cell;
            state.cursor_cell = moved_to;

            // Dragging with the button held paints across cells.
            if state.mouse_pressed && entered_new_cell {
                if let Some(cell) = moved_to {
                    toggle_cell(state, cell);
                }
            }
        }

        WindowEvent::KeyboardInput { event, .. } => on_key(state, event),

        _ => {}
    }
}

fn on_key(state: &RendererState, event: &KeyEvent) {
    if event.state != ElementState::Pressed || event.repeat {
        return;
    }

    match &event.logical_key {
        Key::Named(NamedKey::Space) => {
            let in_motion = state.session.read().unwrap().in_motion();

            if in_motion {
                crate::stop_simulation(&state.session);
            } else {
                crate::start_simulation(&state.session);
            }
        }

        Key::Character(text) => match text.as_str() {
            "c" | "C" => crate::clear_simulation(&state.session),
            "+" | "=" => crate::speed_up(&state.session),
            "-" => crate::slow_down(&state.session),
            _ => {}
        },

        _ => {}
    }
}

fn cell_under_cursor(state: &RendererState, cursor: PhysicalPosition<u32>) -> Option<Position> {
    if state.frame_width == 0 || state.frame_height == 0 {
        return None;
    }

    let session = state.session.read().unwrap();

    let pos = Position {
        row: cursor.y as usize * session.grid.height() / state.frame_height as usize,
        col: cursor.x as usize * session.grid.width() / state.frame_width as usize,
    };

    session.grid.is_inside(pos).then_some(pos)
}

fn toggle_cell(state: &RendererState, pos: Position) {
    let mut session = state.session.write().unwrap();

    if session.in_motion() {
        debug!(
            "ignoring toggle at ({}, {}) while the simulation is in motion",
            pos.row, pos.col
        );
        return;
    }

    if let Some(cell) = session.grid.cell_mut(pos) {
        *cell = cell.toggled();
    }
}

struct RendererState {
    session: Arc<RwLock<State>>,
    cursor_cell: Option<Position>,
    mouse_pressed: bool,
    frame_width: u32,
    frame_height: u32,
}
