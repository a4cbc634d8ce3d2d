//! Interactive session state and the input rules that mutate it.

use crate::camera::{OrbitCamera, OrbitController};
use crate::config::ViewerConfig;
use crate::input::{InputEvent, Key, PointerButton, ScrollDirection};
use crate::mode::VisualizationMode;

/// Everything the user can change during a session.
///
/// Written only by [`SessionState::handle_event`] during the event phase of a
/// frame and read by the renderer afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub camera: OrbitCamera,
    pub mode: VisualizationMode,
    running: bool,
}

impl SessionState {
    pub fn new(camera: OrbitCamera, mode: VisualizationMode) -> Self {
        Self {
            camera,
            mode,
            running: true,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.camera.camera(), config.initial_mode)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one input event. Returns true if the visualization mode
    /// changed.
    ///
    /// Resize events are not session state and are ignored here.
    pub fn handle_event(&mut self, event: &InputEvent, controller: &OrbitController) -> bool {
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                self.running = false;
            }
            InputEvent::KeyDown(Key::Space) => {
                self.mode = self.mode.next();
                log::debug!("visualization mode -> {}", self.mode);
                return true;
            }
            InputEvent::PointerDown {
                button: PointerButton::Left,
                x,
                y,
            } => self.camera.begin_drag(x, y),
            InputEvent::PointerUp {
                button: PointerButton::Left,
            } => self.camera.end_drag(),
            InputEvent::PointerMove { x, y } => controller.pointer_moved(&mut self.camera, x, y),
            InputEvent::Scroll(direction) => {
                controller.scrolled(&mut self.camera, direction == ScrollDirection::Up)
            }
            InputEvent::KeyDown(Key::Other)
            | InputEvent::PointerDown { .. }
            | InputEvent::PointerUp { .. }
            | InputEvent::Resize { .. } => {}
        }
        false
    }
}
