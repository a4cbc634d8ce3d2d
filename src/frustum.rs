//! View frustum geometry.
//!
//! Derives the near-plane edge offsets of a symmetric frustum from a vertical
//! field of view, and the corner points and wireframe used to draw the
//! frustum's shape. Camera space looks down -Z, so the near plane sits at
//! `z = -near` and the far plane at `z = -far`.

use crate::error::ConfigError;
use crate::math::vec3::Vec3;

/// Edge offsets of the frustum at the near plane.
///
/// Always symmetric: `right == -left`, `top == -bottom`, with `right` and
/// `top` strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

/// Computes the frustum bounds at the near plane.
///
/// `top = near * tan(fov / 2)` and `right = top * aspect_ratio`.
///
/// # Errors
/// Returns [`ConfigError`] if the field of view is outside `(0, 180)` degrees
/// or if the aspect ratio or near distance is not positive and finite.
pub fn compute_frustum_bounds(
    fov_y_degrees: f32,
    aspect_ratio: f32,
    near: f32,
) -> Result<FrustumBounds, ConfigError> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(ConfigError::FieldOfView(fov_y_degrees));
    }
    if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
        return Err(ConfigError::AspectRatio(aspect_ratio));
    }
    if !(near > 0.0 && near.is_finite()) {
        return Err(ConfigError::NearPlane(near));
    }

    let top = near * (fov_y_degrees.to_radians() / 2.0).tan();
    let right = top * aspect_ratio;
    Ok(FrustumBounds {
        left: -right,
        right,
        bottom: -top,
        top,
    })
}

impl FrustumBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Corners of the near plane, counter-clockwise from bottom-left.
    pub fn near_corners(&self, near: f32) -> [Vec3; 4] {
        [
            Vec3::new(self.left, self.bottom, -near),
            Vec3::new(self.right, self.bottom, -near),
            Vec3::new(self.right, self.top, -near),
            Vec3::new(self.left, self.top, -near),
        ]
    }

    /// Corners of the far plane, in the same order as [`Self::near_corners`].
    ///
    /// The near corners' x and y grow by `far / near` along the rays from the
    /// eye.
    pub fn far_corners(&self, near: f32, far: f32) -> [Vec3; 4] {
        let ratio = far / near;
        self.near_corners(near)
            .map(|c| Vec3::new(c.x * ratio, c.y * ratio, -far))
    }

    /// Line segments outlining the frustum: four rays from the eye to the near
    /// corners, four side edges from near to far, and the far rectangle.
    pub fn wireframe(&self, near: f32, far: f32) -> [(Vec3, Vec3); 12] {
        let nc = self.near_corners(near);
        let fc = self.far_corners(near, far);
        let mut segments = [(Vec3::ZERO, Vec3::ZERO); 12];
        for i in 0..4 {
            segments[i] = (Vec3::ZERO, nc[i]);
            segments[4 + i] = (nc[i], fc[i]);
            segments[8 + i] = (fc[i], fc[(i + 1) % 4]);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_frustum_bounds() {
        let b = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
        assert_relative_eq!(b.top, 0.1428, epsilon = 1e-4);
        assert_relative_eq!(b.bottom, -0.1428, epsilon = 1e-4);
        assert_relative_eq!(b.right, 0.1428, epsilon = 1e-4);
        assert_relative_eq!(b.left, -0.1428, epsilon = 1e-4);
    }

    #[test]
    fn bounds_are_symmetric_and_follow_aspect() {
        for &(fov, aspect, near) in &[
            (1.0, 0.25, 0.01),
            (45.0, 16.0 / 9.0, 0.1),
            (90.0, 1.0, 1.0),
            (179.0, 3.0, 2.5),
        ] {
            let b = compute_frustum_bounds(fov, aspect, near).unwrap();
            assert!(b.right > 0.0 && b.top > 0.0);
            assert_eq!(b.left, -b.right);
            assert_eq!(b.bottom, -b.top);
            assert_relative_eq!(b.right / b.top, aspect, max_relative = 1e-5);
        }
    }

    #[test]
    fn ninety_degree_fov_spans_near_distance() {
        let b = compute_frustum_bounds(90.0, 1.0, 2.0).unwrap();
        assert_relative_eq!(b.top, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn repeated_computation_is_identical() {
        let a = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
        let b = compute_frustum_bounds(110.0, 1.0, 0.1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert_eq!(
            compute_frustum_bounds(0.0, 1.0, 0.1),
            Err(ConfigError::FieldOfView(0.0))
        );
        assert_eq!(
            compute_frustum_bounds(180.0, 1.0, 0.1),
            Err(ConfigError::FieldOfView(180.0))
        );
        assert!(matches!(
            compute_frustum_bounds(f32::NAN, 1.0, 0.1),
            Err(ConfigError::FieldOfView(_))
        ));
        assert_eq!(
            compute_frustum_bounds(60.0, -1.0, 0.1),
            Err(ConfigError::AspectRatio(-1.0))
        );
        assert_eq!(
            compute_frustum_bounds(60.0, 1.0, 0.0),
            Err(ConfigError::NearPlane(0.0))
        );
    }

    #[test]
    fn far_corners_lie_on_rays_through_near_corners() {
        let b = compute_frustum_bounds(60.0, 1.5, 0.5).unwrap();
        let near = b.near_corners(0.5);
        let far = b.far_corners(0.5, 10.0);
        for (n, f) in near.iter().zip(far.iter()) {
            assert_relative_eq!(f.z, -10.0);
            // Same direction from the eye
            let cross = n.cross(*f);
            assert_relative_eq!(cross.magnitude(), 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn wireframe_starts_at_eye_and_closes_far_rectangle() {
        let b = compute_frustum_bounds(90.0, 1.0, 1.0).unwrap();
        let segments = b.wireframe(1.0, 4.0);
        for (start, _) in &segments[..4] {
            assert_eq!(*start, Vec3::ZERO);
        }
        for i in 8..12 {
            let next = if i == 11 { 8 } else { i + 1 };
            assert_eq!(segments[i].1, segments[next].0);
        }
        assert_eq!(segments[10].0, Vec3::new(4.0, 4.0, -4.0));
    }
}
