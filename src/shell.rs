//! Winit-backed host shell.
//!
//! Owns the event loop and one window, translates window events into the
//! element's input devices, and clocks the frame loop off redraw requests.
//! Everything engine-side stays behind [`GraphicsApp`]; the shell only
//! feeds and schedules it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use instant::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::element::{GraphicsElement, Surface};
use crate::flow::{FrameControl, GraphicsApp, GraphicsLogic};
use crate::graphics::GraphicsApi;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "prism-ngin".to_owned(),
            width: 1280,
            height: 720,
        }
    }
}

/// Builds the application once the window exists. The constructor receives
/// the live window (to create a graphics context against) and the surface
/// the engine will size itself by.
pub type AppConstructor<A, L> =
    Box<dyn FnOnce(Arc<Window>, Box<dyn Surface>) -> anyhow::Result<GraphicsApp<A, L>>>;

struct WindowSurface {
    window: Arc<Window>,
    close_requested: Rc<Cell<bool>>,
}

impl Surface for WindowSurface {
    fn width(&self) -> u32 {
        self.window.inner_size().width
    }

    fn height(&self) -> u32 {
        self.window.inner_size().height
    }

    fn should_close(&self) -> bool {
        self.close_requested.get()
    }
}

struct Shell<A: GraphicsApi, L: GraphicsLogic<A>> {
    config: WindowConfig,
    // Consumed by `take()` on the first resume.
    constructor: Option<AppConstructor<A, L>>,
    window: Option<Arc<Window>>,
    close_requested: Rc<Cell<bool>>,
    app: Option<GraphicsApp<A, L>>,
    started: Instant,
}

impl<A: GraphicsApi, L: GraphicsLogic<A>> Shell<A, L> {
    fn feed_window_event(element: &mut GraphicsElement<A>, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    // The state map and the Key enum both speak winit's
                    // debug names for physical keys.
                    let code = format!("{key_code:?}");
                    let keyboard = element.keyboard_mut();

                    if event.state.is_pressed() {
                        keyboard.on_key_pressed(&code);
                        if let Some(text) = event.text.as_ref() {
                            for ch in text.chars() {
                                keyboard.on_char(ch);
                            }
                        }
                    } else {
                        keyboard.on_key_released(&code);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                element
                    .mouse_mut()
                    .on_mouse_move(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorEntered { .. } => element.mouse_mut().on_mouse_enter(),
            WindowEvent::CursorLeft { .. } => element.mouse_mut().on_mouse_leave(),
            WindowEvent::MouseInput { state, button, .. } => {
                let position = element.mouse().position();
                let mouse = element.mouse_mut();

                match (button, state.is_pressed()) {
                    (MouseButton::Left, true) => mouse.on_left_pressed(position.x, position.y),
                    (MouseButton::Left, false) => mouse.on_left_released(position.x, position.y),
                    (MouseButton::Right, true) => mouse.on_right_pressed(position.x, position.y),
                    (MouseButton::Right, false) => mouse.on_right_released(position.x, position.y),
                    _ => (),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let vertical = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32,
                };
                let position = element.mouse().position();
                let mouse = element.mouse_mut();

                if vertical > 0.0 {
                    mouse.on_wheel_up(position.x, position.y);
                } else if vertical < 0.0 {
                    mouse.on_wheel_down(position.x, position.y);
                }
            }
            _ => (),
        }
    }
}

impl<A: GraphicsApi, L: GraphicsLogic<A>> ApplicationHandler for Shell<A, L> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let constructor = match self.constructor.take() {
            Some(constructor) => constructor,
            // Resumed again after a suspend: the app already exists.
            None => return,
        };

        let window_attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                log::error!("unable to create a window: {error}");
                event_loop.exit();
                return;
            }
        };

        let surface = WindowSurface {
            window: window.clone(),
            close_requested: self.close_requested.clone(),
        };

        let mut app = match constructor(window.clone(), Box::new(surface)) {
            Ok(app) => app,
            Err(error) => {
                log::error!("unable to construct the application: {error}");
                event_loop.exit();
                return;
            }
        };

        if let Err(error) = app.start() {
            log::error!("unable to start the application: {error}");
            event_loop.exit();
            return;
        }

        window.request_redraw();
        self.window = Some(window);
        self.app = Some(app);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let app = match &mut self.app {
            Some(app) => app,
            None => return,
        };

        Self::feed_window_event(app.element_mut(), &event);

        match event {
            WindowEvent::CloseRequested => {
                self.close_requested.set(true);
                event_loop.exit();
            }
            WindowEvent::Resized(size) => app.element_mut().resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let timestamp = self.started.elapsed().as_secs_f64() * 1_000.0;

                match app.on_frame(timestamp) {
                    Ok(FrameControl::Continue) => {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                    Ok(FrameControl::Stop) => event_loop.exit(),
                    Err(error) => {
                        log::error!("unable to render: {error}");
                        event_loop.exit();
                    }
                }
            }
            _ => (),
        }
    }
}

/// Opens a window and runs the application in it until the window closes,
/// the app stops itself, or rendering fails.
pub fn run<A, L>(config: WindowConfig, constructor: AppConstructor<A, L>) -> anyhow::Result<()>
where
    A: GraphicsApi + 'static,
    L: GraphicsLogic<A> + 'static,
{
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    }

    let event_loop = EventLoop::new()?;

    let mut shell: Shell<A, L> = Shell {
        config,
        constructor: Some(constructor),
        window: None,
        close_requested: Rc::new(Cell::new(false)),
        app: None,
        started: Instant::now(),
    };

    event_loop.run_app(&mut shell)?;

    Ok(())
}
