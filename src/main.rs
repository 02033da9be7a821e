use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use shape_editor::cli::Cli;
use shape_editor::editor::EditorState;
use shape_editor::movement::Direction;
use shape_editor::renderer::Renderer;
use shape_editor::shape::ShapeKind;

const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;
const SCROLL_ZOOM_SPEED: f32 = 0.5;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    editor: EditorState,
    spawn_kind: ShapeKind,
    cursor: (f32, f32),
    shift_held: bool,
    orbiting: bool,
}

impl App {
    fn new(cli: Cli, editor: EditorState) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            editor,
            spawn_kind: ShapeKind::Cube,
            cursor: (0.0, 0.0),
            shift_held: false,
            orbiting: false,
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if !event.state.is_pressed() {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            if code == KeyCode::Escape {
                event_loop.exit();
                return;
            }
            if let Some(direction) = Direction::from_key(code, self.shift_held) {
                self.editor.move_selected(direction);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Shape Editor")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.editor.camera.set_aspect(size.width, size.height);
            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui claim pointer and keyboard events aimed at the overlay.
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.shift_held = modifiers.state().shift_key();
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::Resized(size) => {
                self.editor.camera.set_aspect(size.width, size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if self.orbiting {
                    let delta = (new_pos.0 - self.cursor.0, new_pos.1 - self.cursor.1);
                    self.editor.camera.orbit(delta.0, delta.1);
                }
                self.cursor = new_pos;
            }
            WindowEvent::MouseInput { state, button, .. } => match (button, state) {
                (MouseButton::Left, ElementState::Pressed) => {
                    if let Some(window) = &self.window {
                        let size = window.inner_size();
                        self.editor.pick_at(
                            self.cursor.0,
                            self.cursor.1,
                            size.width as f32,
                            size.height as f32,
                        );
                    }
                }
                (MouseButton::Right, ElementState::Pressed) => self.orbiting = true,
                (MouseButton::Right, ElementState::Released) => self.orbiting = false,
                _ => {}
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * SCROLL_ZOOM_SPEED,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.editor.camera.zoom(amount);
            }
            WindowEvent::RedrawRequested => {
                let show_ui = !self.cli.no_ui;
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&mut self.editor, &mut self.spawn_kind, window, show_ui)
                    {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(e) => warn!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut editor =
        EditorState::new(INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32);
    for name in &cli.spawn {
        editor.add_shape_by_name(name)?;
    }

    info!(
        "shape editor - click to select, WASD to move, Shift+W/S for up/down, Escape to quit"
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, editor);
    event_loop.run_app(&mut app)?;

    Ok(())
}
