use super::renderer::Renderer;
use super::RenderBackend;
use crate::clip::{clip_segment, point_in_clip_volume};
use crate::colors::{self, Color};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// CPU implementation of [`RenderBackend`].
///
/// Every vertex goes world → view → clip space; lines are clipped against the
/// clip volume before the perspective divide, then mapped to the viewport
/// with y pointing down.
pub struct SoftwareBackend {
    renderer: Renderer,
    projection: Mat4,
    view: Mat4,
}

impl SoftwareBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            renderer: Renderer::new(width, height),
            projection: Mat4::identity(),
            view: Mat4::identity(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    fn to_clip(&self, point: Vec3) -> Vec4 {
        self.projection * (self.view * Vec4::from(point))
    }

    /// Maps a clip-space position inside the clip volume to pixel
    /// coordinates and its 1/w depth.
    fn to_screen(&self, clip: Vec4) -> (i32, i32, f32) {
        let inv_w = 1.0 / clip.w;
        let ndc_x = clip.x * inv_w;
        let ndc_y = clip.y * inv_w;
        let screen_x = (ndc_x + 1.0) * 0.5 * self.renderer.width() as f32;
        let screen_y = (1.0 - ndc_y) * 0.5 * self.renderer.height() as f32;
        (screen_x as i32, screen_y as i32, inv_w)
    }
}

impl RenderBackend for SoftwareBackend {
    fn clear_frame(&mut self) {
        self.renderer.clear(colors::BACKGROUND);
        self.renderer.clear_depth();
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
    }

    fn set_view_identity(&mut self) {
        self.view = Mat4::identity();
    }

    fn set_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.view = Mat4::look_at_rh(eye, target, up);
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        let Some((a, b)) = clip_segment(self.to_clip(from), self.to_clip(to)) else {
            return;
        };
        // A segment can collapse onto the eye itself.
        if a.w <= f32::EPSILON || b.w <= f32::EPSILON {
            return;
        }
        let (x0, y0, inv_w0) = self.to_screen(a);
        let (x1, y1, inv_w1) = self.to_screen(b);
        self.renderer
            .draw_line(x0, y0, inv_w0, x1, y1, inv_w1, color.to_argb());
    }

    fn draw_point(&mut self, position: Vec3, size: f32, color: Color) {
        let clip = self.to_clip(position);
        if !point_in_clip_volume(clip) {
            return;
        }
        let (x, y, inv_w) = self.to_screen(clip);
        self.renderer
            .fill_square(x, y, size.round() as i32, inv_w, color.to_argb());
    }
}
