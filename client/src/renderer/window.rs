use std::{sync::Arc, time::Duration};

use anyhow::Context;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, pacer::FramePacer};

pub struct LifeWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
    pub event_callback: Box<dyn FnMut(&WindowEvent)>,
}

pub struct LifeWindow {
    config: LifeWindowConfig,
    surface: Option<WindowSurface>,
    pacer: FramePacer,
}

/// Window-system resources that only exist once the application has been
/// resumed.
struct WindowSurface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl LifeWindow {
    pub fn new(config: LifeWindowConfig) -> Self {
        let frame_budget = Duration::from_micros(1_000_000 / config.target_fps);

        Self {
            config,
            surface: None,
            pacer: FramePacer::new(frame_budget),
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new().context("Creating event loop")?;
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl ApplicationHandler for LifeWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

        let window = Arc::new(
            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .expect("Creating window"),
        );

        let PhysicalSize { width, height } = window.inner_size();
        let surface_texture = SurfaceTexture::new(width, height, window.clone());
        let pixels = PixelsBuilder::new(width, height, surface_texture)
            .texture_format(TextureFormat::Rgba8UnormSrgb)
            .build()
            .expect("Creating pixel buffer");

        window.request_redraw();

        self.surface = Some(WindowSurface { window, pixels });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(WindowSurface { window, pixels }) = self.surface.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();

                (self.config.draw_callback)(RenderFrame {
                    width,
                    height,
                    buffer: pixels.frame_mut(),
                });

                pixels.render().expect("Presenting frame");

                // Hold the redraw loop to the configured frame rate.
                self.pacer.wait();
                window.request_redraw();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if *width > 0 && *height > 0 {
                    pixels
                        .resize_surface(*width, *height)
                        .expect("Resizing surface");
                    pixels
                        .resize_buffer(*width, *height)
                        .expect("Resizing pixel buffer");
                }
                window.request_redraw();
            }

            WindowEvent::KeyboardInput {
                event: key_event, ..
            } if key_event.state.is_pressed()
                && key_event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                event_loop.exit();
            }

            WindowEvent::CloseRequested => event_loop.exit(),

            _ => {}
        }

        (self.config.event_callback)(&event);
    }
}
