//! 4x4 transformation matrix using column-major convention.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `Mat4 * Vec`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//! - Camera space is right-handed: the eye looks down **-Z**, +Y is up
//!
//! A row vector on the left (`Vec4 * Mat4`) is also supported. The two forms
//! are duals: `v * m.transpose() == m * v`.
//!
//! # Example
//! ```ignore
//! let view_projection = projection * view; // view applied first
//! let clip = view_projection * Vec4::point(0.0, 0.0, -5.0);
//! ```

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

/// 4x4 matrix stored as `data[row][col]` with column-major convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub const fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub const fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in the last column (column-major convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a symmetric right-handed perspective matrix with an OpenGL
    /// style `[-1, 1]` depth range, equivalent to `gluPerspective`.
    ///
    /// `fov_y` is in radians.
    pub fn perspective_rh_gl(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let depth = near - far;
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (far + near) / depth, 2.0 * far * near / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }

    /// Creates a right-handed view matrix, equivalent to `gluLookAt`.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `target` - The point the camera is looking at.
    /// * `up` - The approximate up direction; must not be parallel to the
    ///   viewing direction.
    pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let forward = (target - eye).normalize();
        let side = forward.cross(up).normalize();
        let up = side.cross(forward);

        Self::new([
            [side.x, side.y, side.z, -side.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn transpose(&self) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (row, values) in self.data.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                data[col][row] = *value;
            }
        }
        Mat4::new(data)
    }

    /// Computes the inverse by Gauss-Jordan elimination with partial pivoting.
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Mat4> {
        let mut a = self.data;
        let mut inv = Mat4::identity().data;

        for col in 0..4 {
            let pivot = (col..4).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
            if a[pivot][col].abs() < f32::EPSILON {
                return None;
            }
            a.swap(col, pivot);
            inv.swap(col, pivot);

            let scale = 1.0 / a[col][col];
            for k in 0..4 {
                a[col][k] *= scale;
                inv[col][k] *= scale;
            }

            let (pivot_row, pivot_inv) = (a[col], inv[col]);
            for row in (0..4).filter(|&row| row != col) {
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..4 {
                    a[row][k] -= factor * pivot_row[k];
                    inv[row][k] -= factor * pivot_inv[k];
                }
            }
        }

        Some(Mat4::new(inv))
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> [[f32; 4]; 4] {
        self.data
    }
}

/// Matrix multiplication: Mat4 * Mat4.
///
/// For column-major convention, `A * B * v` applies B first, then A.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        let d = &self.data;
        Vec4::new(
            d[0][0] * v.x + d[0][1] * v.y + d[0][2] * v.z + d[0][3] * v.w,
            d[1][0] * v.x + d[1][1] * v.y + d[1][2] * v.z + d[1][3] * v.w,
            d[2][0] * v.x + d[2][1] * v.y + d[2][2] * v.z + d[2][3] * v.w,
            d[3][0] * v.x + d[3][1] * v.y + d[3][2] * v.z + d[3][3] * v.w,
        )
    }
}

/// Transform a row vector by a matrix: Vec4 * Mat4.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        let d = &m.data;
        Vec4::new(
            self.x * d[0][0] + self.y * d[1][0] + self.z * d[2][0] + self.w * d[3][0],
            self.x * d[0][1] + self.y * d[1][1] + self.z * d[2][1] + self.w * d[3][1],
            self.x * d[0][2] + self.y * d[1][2] + self.z * d[2][2] + self.w * d[3][2],
            self.x * d[0][3] + self.y * d[1][3] + self.z * d[2][3] + self.w * d[3][3],
        )
    }
}
