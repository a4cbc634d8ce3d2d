use super::RenderBackend;
use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

/// One call made on a [`RecordingBackend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    Projection(Mat4),
    ViewIdentity,
    LookAt { eye: Vec3, target: Vec3, up: Vec3 },
    Line { from: Vec3, to: Vec3, color: Color },
    Point { position: Vec3, size: f32, color: Color },
}

/// A [`RenderBackend`] that stores every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<DrawCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec3, Vec3, Color)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn points(&self) -> impl Iterator<Item = (Vec3, f32, Color)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Point {
                position,
                size,
                color,
            } => Some((position, size, color)),
            _ => None,
        })
    }

    /// The last projection installed, if any.
    pub fn projection(&self) -> Option<Mat4> {
        self.calls.iter().rev().find_map(|call| match *call {
            DrawCall::Projection(m) => Some(m),
            _ => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn clear_frame(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.calls.push(DrawCall::Projection(projection));
    }

    fn set_view_identity(&mut self) {
        self.calls.push(DrawCall::ViewIdentity);
    }

    fn set_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.calls.push(DrawCall::LookAt { eye, target, up });
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn draw_point(&mut self, position: Vec3, size: f32, color: Color) {
        self.calls.push(DrawCall::Point {
            position,
            size,
            color,
        });
    }
}
