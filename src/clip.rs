//! World → clip → NDC transform and clip-space clipping.
//!
//! Projection takes a homogeneous point into clip space; the perspective
//! divide then takes it into normalized device coordinates. The visible
//! volume in clip space is:
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w   (OpenGL-style [-1, 1] depth range)
//! ```

use crate::error::SingularProjectionError;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::projection::ProjectionMatrix;

/// Smallest `|w|` the perspective divide accepts.
pub const W_EPSILON: f32 = 1e-6;

/// Projects a homogeneous point into clip space: `clip = M * point`.
pub fn to_clip(point: Vec4, projection: &ProjectionMatrix) -> Vec4 {
    projection.as_mat4() * point
}

/// Projects a homogeneous point and performs the perspective divide.
///
/// # Errors
/// Returns [`SingularProjectionError`] if clip-space `w` is within
/// [`W_EPSILON`] of zero (the point lies on the eye plane) or the divide
/// yields a non-finite coordinate.
pub fn to_ndc(point: Vec4, projection: &ProjectionMatrix) -> Result<Vec3, SingularProjectionError> {
    perspective_divide(to_clip(point, projection))
}

/// Divides a clip-space position by its `w`.
pub fn perspective_divide(clip: Vec4) -> Result<Vec3, SingularProjectionError> {
    if !(clip.w.abs() >= W_EPSILON) {
        return Err(SingularProjectionError { w: clip.w });
    }
    let ndc = clip.perspective_divide();
    if ndc.is_finite() {
        Ok(ndc)
    } else {
        Err(SingularProjectionError { w: clip.w })
    }
}

/// The 6 planes of the canonical clip-space cube.
///
/// Each plane is defined implicitly by a linear inequality on (x, y, z, w).
/// The signed distance is positive when inside the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// Left plane: x >= -w
    Left,
    /// Right plane: x <= w
    Right,
    /// Bottom plane: y >= -w
    Bottom,
    /// Top plane: y <= w
    Top,
    /// Near plane: z >= -w
    Near,
    /// Far plane: z <= w
    Far,
}

impl ClipPlane {
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Bottom,
        ClipPlane::Top,
        ClipPlane::Near,
        ClipPlane::Far,
    ];

    /// Returns the signed distance from a clip-space position to this plane.
    /// Positive = inside the clip volume, Negative = outside.
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,   // x >= -w  =>  w + x >= 0
            Self::Right => p.w - p.x,  // x <= w   =>  w - x >= 0
            Self::Bottom => p.w + p.y, // y >= -w  =>  w + y >= 0
            Self::Top => p.w - p.y,    // y <= w   =>  w - y >= 0
            Self::Near => p.w + p.z,   // z >= -w  =>  w + z >= 0
            Self::Far => p.w - p.z,    // z <= w   =>  w - z >= 0
        }
    }
}

/// Returns true if a clip-space position lies inside the clip volume.
pub fn point_in_clip_volume(p: Vec4) -> bool {
    p.w > 0.0 && ClipPlane::ALL.iter().all(|plane| plane.signed_distance(p) >= 0.0)
}

/// Clips a clip-space line segment against all 6 planes.
///
/// Each plane narrows the visible parameter range `[t0, t1]` of the segment
/// `a + t * (b - a)`. Returns the visible part, or `None` if the segment lies
/// entirely outside the clip volume.
pub fn clip_segment(a: Vec4, b: Vec4) -> Option<(Vec4, Vec4)> {
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    for plane in ClipPlane::ALL {
        let da = plane.signed_distance(a);
        let db = plane.signed_distance(b);

        if da < 0.0 && db < 0.0 {
            return None;
        }
        if da < 0.0 {
            // Entering through this plane
            t0 = t0.max(da / (da - db));
        } else if db < 0.0 {
            // Leaving through this plane
            t1 = t1.min(da / (da - db));
        }
        if t0 > t1 {
            return None;
        }
    }

    let start = if t0 > 0.0 { a.lerp(b, t0) } else { a };
    let end = if t1 < 1.0 { a.lerp(b, t1) } else { b };
    Some((start, end))
}
