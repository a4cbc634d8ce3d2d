//! Colors used by the viewer, as rgb floats in `[0, 1]`.
//!
//! The render backend packs them into ARGB8888 pixels.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Packs the color into an opaque ARGB8888 pixel.
    pub fn to_argb(self) -> u32 {
        pack_color(self.r, self.g, self.b, 1.0)
    }
}

/// Packs rgba floats in `[0, 1]` into an ARGB8888 value. Out-of-range
/// components are clamped.
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(a) << 24) | (channel(r) << 16) | (channel(g) << 8) | channel(b)
}

pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
pub const GREY: Color = Color::rgb(0.5, 0.5, 0.5);

/// Frame clear color, ARGB8888.
pub const BACKGROUND: u32 = 0xFF00_0000;
