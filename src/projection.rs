//! Perspective projection.
//!
//! [`build_perspective_projection`] constructs the off-center perspective
//! matrix for an arbitrary frustum from first principles. The [`Projection`]
//! struct is the single source of truth for the parameters of a symmetric
//! frustum (FOV, aspect ratio, near/far planes) and derives its bounds and
//! matrices.
//!
//! # Matrix convention
//!
//! Textbook derivations often write this matrix for a row vector multiplied
//! on the left (`p * M`):
//!
//! ```text
//! [ X  0  0  0 ]
//! [ 0  Y  0  0 ]
//! [ A  B  C -1 ]
//! [ 0  0  D  0 ]
//! ```
//!
//! This crate uses column vectors (`M * p`, see [`Mat4`]), so the stored
//! matrix is the transpose of that layout. [`ProjectionMatrix::row_major`]
//! returns the row-vector form.

use crate::error::{ConfigError, DegenerateFrustumError};
use crate::frustum::{compute_frustum_bounds, FrustumBounds};
use crate::math::mat4::Mat4;

/// An off-center perspective projection in column-vector convention.
///
/// Maps the view frustum onto the canonical clip volume: after the
/// perspective divide, the near plane lands on NDC `z = -1` and the far plane
/// on `z = +1`. Clip-space `w` carries the view-space depth `-z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionMatrix(Mat4);

impl ProjectionMatrix {
    /// The matrix for column vectors: `clip = m * point`.
    pub fn as_mat4(&self) -> Mat4 {
        self.0
    }

    /// The same transform laid out for row vectors: `clip = point * m`.
    pub fn row_major(&self) -> Mat4 {
        self.0.transpose()
    }
}

/// Builds the off-center perspective projection matrix for the frustum with
/// near-plane edges `left`, `right`, `bottom`, `top` and depth range
/// `near..far`.
///
/// # Errors
/// Returns [`DegenerateFrustumError`] unless `far > near > 0`,
/// `left != right`, `bottom != top`, and every value is finite.
pub fn build_perspective_projection(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Result<ProjectionMatrix, DegenerateFrustumError> {
    if ![left, right, bottom, top, near, far]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(DegenerateFrustumError::NonFinite);
    }
    if !(near > 0.0 && far > near) {
        return Err(DegenerateFrustumError::DepthRange { near, far });
    }
    if right == left {
        return Err(DegenerateFrustumError::ZeroWidth(left));
    }
    if top == bottom {
        return Err(DegenerateFrustumError::ZeroHeight(bottom));
    }

    let x = 2.0 * near / (right - left);
    let y = 2.0 * near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(far + near) / (far - near);
    let d = -2.0 * far * near / (far - near);

    Ok(ProjectionMatrix(Mat4::new([
        [x, 0.0, a, 0.0],
        [0.0, y, b, 0.0],
        [0.0, 0.0, c, d],
        [0.0, 0.0, -1.0, 0.0],
    ])))
}

/// Builds the projection matrix for previously computed frustum bounds.
pub fn projection_from_bounds(
    bounds: &FrustumBounds,
    near: f32,
    far: f32,
) -> Result<ProjectionMatrix, DegenerateFrustumError> {
    build_perspective_projection(
        bounds.left,
        bounds.right,
        bounds.bottom,
        bounds.top,
        near,
        far,
    )
}

/// Perspective projection parameters.
///
/// Stores the canonical parameters of a symmetric frustum along with the
/// near-plane bounds derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    fov_y_degrees: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
    bounds: FrustumBounds,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Result<Self, ConfigError> {
        Self::from_degrees(fov_y.to_degrees(), aspect_ratio, z_near, z_far)
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(
        fov_y_degrees: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Result<Self, ConfigError> {
        let bounds = compute_frustum_bounds(fov_y_degrees, aspect_ratio, z_near)?;
        if !(z_far > z_near && z_far.is_finite()) {
            return Err(ConfigError::FarPlane {
                near: z_near,
                far: z_far,
            });
        }
        Ok(Self {
            fov_y_degrees,
            aspect_ratio,
            z_near,
            z_far,
            bounds,
        })
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y_degrees.to_radians()
    }

    /// Returns the vertical field of view in degrees.
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    /// Returns the horizontal field of view in radians.
    ///
    /// Computed from the vertical FOV and aspect ratio.
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.aspect_ratio * (self.fov_y() / 2.0).tan()).atan()
    }

    /// Returns the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Returns the near clipping plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Returns the far clipping plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Returns the frustum edges at the near plane.
    pub fn bounds(&self) -> FrustumBounds {
        self.bounds
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<(), ConfigError> {
        self.bounds = compute_frustum_bounds(self.fov_y_degrees, aspect_ratio, self.z_near)?;
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    /// Builds the off-center projection matrix from the derived bounds.
    pub fn matrix(&self) -> Result<ProjectionMatrix, DegenerateFrustumError> {
        projection_from_bounds(&self.bounds, self.z_near, self.z_far)
    }

    /// The conventional symmetric perspective matrix for these parameters,
    /// built directly from the field of view as `gluPerspective` does.
    pub fn standard_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y(), self.aspect_ratio, self.z_near, self.z_far)
    }
}
