//! The render collaborator.
//!
//! The visualizer describes each frame through the [`RenderBackend`] trait:
//! matrices to install plus 3D lines and points to draw. Two implementations
//! are provided:
//!
//! - [`SoftwareBackend`]: projects, clips and rasterizes on the CPU into an
//!   ARGB8888 buffer that the window presents.
//! - [`RecordingBackend`]: records the calls, for inspecting a frame without
//!   drawing it.

mod recording;
mod renderer;
mod software;

pub use recording::{DrawCall, RecordingBackend};
pub use renderer::Renderer;
pub use software::SoftwareBackend;

use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// Immediate-mode drawing interface consumed by the visualizer.
///
/// Points are world-space; the backend applies the current view and
/// projection.
pub trait RenderBackend {
    /// Clears color and depth for a new frame.
    fn clear_frame(&mut self);

    /// Installs the projection matrix (column-vector convention).
    fn set_projection(&mut self, projection: Mat4);

    /// Installs an identity view: world space is camera space.
    fn set_view_identity(&mut self);

    /// Installs a right-handed look-at view.
    fn set_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3);

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color);

    /// Draws a square point `size` pixels wide.
    fn draw_point(&mut self, position: Vec3, size: f32, color: Color);
}
