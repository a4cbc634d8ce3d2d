//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers and
//! implements depth-tested lines and squares in screen space.

use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![0.0; size], // 0.0 = infinitely far (1/w where w -> infinity)
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.depth_buffer = vec![0.0; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Clear the depth buffer to prepare for a new frame.
    /// Sets all depths to 0.0 (infinitely far, since we store 1/w).
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(0.0);
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel at (x, y) with depth testing.
    ///
    /// The pixel is only written if the depth value is at least the existing
    /// depth at that location (closer to camera, since we store 1/w).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, inv_depth: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if inv_depth >= self.depth_buffer[idx] {
                self.depth_buffer[idx] = inv_depth;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Fills a `size` x `size` square centred on (x, y) at a single depth.
    pub fn fill_square(&mut self, x: i32, y: i32, size: i32, inv_depth: f32, color: u32) {
        let half = size / 2;
        for dy in 0..size.max(1) {
            for dx in 0..size.max(1) {
                self.set_pixel_with_depth(x - half + dx, y - half + dy, inv_depth, color);
            }
        }
    }

    /// Draws a line between two points using Bresenham's line algorithm with
    /// depth testing.
    ///
    /// For each step along the major axis, an error term decides whether to
    /// also step along the minor axis. Depth (1/w) is linearly interpolated
    /// along the line, which is correct in screen space.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_line(
        &mut self,
        x0: i32,
        y0: i32,
        inv_w0: f32,
        x1: i32,
        y1: i32,
        inv_w1: f32,
        color: u32,
    ) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let steps = dx.max(dy);
        if steps == 0 {
            self.set_pixel_with_depth(x0, y0, inv_w0.max(inv_w1), color);
            return;
        }

        let x_incr_direction = if x0 < x1 { 1 } else { -1 };
        let y_incr_direction = if y0 < y1 { 1 } else { -1 };

        // Positive error favors x movement, negative favors y.
        let mut err = dx - dy;

        let mut x = x0;
        let mut y = y0;
        let mut step = 0;

        loop {
            let t = step as f32 / steps as f32;
            let inv_depth = inv_w0 + t * (inv_w1 - inv_w0);

            self.set_pixel_with_depth(x, y, inv_depth, color);

            if x == x1 && y == y1 {
                break;
            }

            step += 1;

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += x_incr_direction;
            }
            // Both conditions can hold, giving a diagonal step.
            if e2 < dx {
                err += dx;
                y += y_incr_direction;
            }
        }
    }

    /// The color buffer as ARGB8888 bytes, ready for a streaming texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8; the
        // slice covers exactly the buffer's bytes and borrows it immutably.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xFFFFFFFF;
    const RED: u32 = 0xFFFF0000;

    #[test]
    fn horizontal_line_covers_every_pixel() {
        let mut r = Renderer::new(16, 16);
        r.draw_line(2, 5, 1.0, 12, 5, 1.0, WHITE);
        for x in 2..=12 {
            assert_eq!(r.pixel(x, 5), Some(WHITE));
        }
        assert_eq!(r.pixel(13, 5), Some(colors::BACKGROUND));
    }

    #[test]
    fn steep_line_reaches_endpoint() {
        let mut r = Renderer::new(16, 16);
        r.draw_line(3, 15, 1.0, 5, 0, 1.0, WHITE);
        assert_eq!(r.pixel(3, 15), Some(WHITE));
        assert_eq!(r.pixel(5, 0), Some(WHITE));
    }

    #[test]
    fn nearer_line_wins_depth_test() {
        let mut r = Renderer::new(8, 8);
        // 1/w = 0.5 is nearer than 1/w = 0.1
        r.draw_line(0, 4, 0.5, 7, 4, 0.5, RED);
        r.draw_line(0, 4, 0.1, 7, 4, 0.1, WHITE);
        assert_eq!(r.pixel(3, 4), Some(RED));

        r.clear_depth();
        r.draw_line(0, 4, 0.1, 7, 4, 0.1, WHITE);
        assert_eq!(r.pixel(3, 4), Some(WHITE));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut r = Renderer::new(4, 4);
        r.draw_line(-10, -10, 1.0, 20, 20, 1.0, WHITE);
        r.fill_square(0, 0, 6, 1.0, RED);
        assert_eq!(r.pixel(0, 0), Some(RED));
        assert_eq!(r.pixel(4, 4), None);
    }

    #[test]
    fn square_is_centred() {
        let mut r = Renderer::new(10, 10);
        r.fill_square(5, 5, 4, 1.0, RED);
        assert_eq!(r.pixel(3, 3), Some(RED));
        assert_eq!(r.pixel(6, 6), Some(RED));
        assert_eq!(r.pixel(7, 7), Some(colors::BACKGROUND));
    }

    #[test]
    fn bytes_cover_whole_buffer() {
        let r = Renderer::new(3, 2);
        assert_eq!(r.as_bytes().len(), 24);
    }
}
