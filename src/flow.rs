//! The frame loop and the logic hook it drives.
//!
//! A [`GraphicsApp`] owns one [`GraphicsElement`] and one [`GraphicsLogic`]
//! implementation and steps them in a fixed order every frame:
//!
//! - input: user logic reads the buffered devices,
//! - update: element first (device upkeep), then user logic,
//! - render: element clears, then user logic draws,
//! - end of frame, then the next frame is scheduled.
//!
//! The loop itself is externally clocked: the windowing shell (or a test)
//! calls [`GraphicsApp::on_frame`] with a timestamp and acts on the
//! returned [`FrameControl`].

use instant::Instant;

use crate::controls::{Keyboard, Mouse};
use crate::element::GraphicsElement;
use crate::graphics::{GraphicsApi, GraphicsError};
use crate::math::Vector3;

/// The per-application hook the engine calls into each frame.
pub trait GraphicsLogic<A: GraphicsApi> {
    /// One-time setup once the element and its context exist.
    fn init(&mut self, element: &mut GraphicsElement<A>) -> Result<(), GraphicsError>;

    /// Reads this frame's buffered input.
    fn input(&mut self, keyboard: &mut Keyboard, mouse: &mut Mouse);

    /// Steps application state. `timestamp` is milliseconds since the loop
    /// started.
    fn update(&mut self, timestamp: f64);

    /// Draws the frame. The element has already cleared it.
    fn render(&mut self, element: &GraphicsElement<A>) -> Result<(), GraphicsError>;

    /// Runs after rendering, before the next frame is scheduled.
    fn end_frame(&mut self) {}
}

/// Where the application is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Stopped,
}

/// What the frame clock should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Counts frames and reports a rate once per elapsed second.
pub struct FrameTimer {
    last_report: Instant,
    frame_count: u32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frame_count: 0,
        }
    }

    /// Registers one frame. Returns the frame rate when at least a second
    /// has passed since the last report, `None` otherwise.
    pub fn fps(&mut self) -> Option<u32> {
        self.frame_count += 1;

        if self.last_report.elapsed().as_secs_f64() > 1.0 {
            self.last_report = Instant::now();

            let fps = self.frame_count;
            self.frame_count = 0;

            return Some(fps);
        }
        None
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GraphicsApp<A: GraphicsApi, L: GraphicsLogic<A>> {
    element: GraphicsElement<A>,
    logic: L,
    timer: FrameTimer,
    phase: Phase,
}

impl<A: GraphicsApi, L: GraphicsLogic<A>> GraphicsApp<A, L> {
    pub fn new(element: GraphicsElement<A>, logic: L) -> Self {
        Self {
            element,
            logic,
            timer: FrameTimer::new(),
            phase: Phase::Stopped,
        }
    }

    /// Initializes the element and the logic and marks the app running.
    pub fn start(&mut self) -> Result<(), GraphicsError> {
        self.element.init();
        self.logic.init(&mut self.element)?;

        self.phase = Phase::Running;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs one frame. `timestamp` is milliseconds since the loop started.
    ///
    /// A stopped app, or a surface that wants to close, short-circuits to
    /// [`FrameControl::Stop`] without touching the logic. A render error
    /// stops the app and is handed to the caller.
    pub fn on_frame(&mut self, timestamp: f64) -> Result<FrameControl, GraphicsError> {
        if self.phase == Phase::Stopped {
            return Ok(FrameControl::Stop);
        }
        if self.element.should_close() {
            self.phase = Phase::Stopped;
            return Ok(FrameControl::Stop);
        }

        let (keyboard, mouse) = self.element.controls_mut();
        self.logic.input(keyboard, mouse);

        self.element.update();
        self.logic.update(timestamp);

        self.element.render();
        if let Err(error) = self.logic.render(&self.element) {
            self.phase = Phase::Stopped;
            return Err(error);
        }

        self.logic.end_frame();

        if let Some(fps) = self.timer.fps() {
            log::debug!("fps [ {fps} ]");
        }

        Ok(FrameControl::Continue)
    }

    /// Asks the loop to stop after the current frame.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Sets the background color, rgb components mapped from xyz.
    pub fn set_space_color(&mut self, color: Vector3) {
        self.element.set_space_color(color.x, color.y, color.z);
    }

    pub fn element(&self) -> &GraphicsElement<A> {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut GraphicsElement<A> {
        &mut self.element
    }

    pub fn logic(&self) -> &L {
        &self.logic
    }

    pub fn logic_mut(&mut self) -> &mut L {
        &mut self.logic
    }
}
