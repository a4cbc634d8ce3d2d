//! Orbit camera
//!
//! # Coordinate System
//!
//! Uses a **right-handed** coordinate system:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer (the camera looks down -Z)
//!
//! # Orientation
//!
//! The eye sits on a sphere around a look-at target. Its position is stored
//! as yaw/pitch angles (degrees) plus a distance and converted to a Cartesian
//! offset when needed.
//!
//! - **Yaw**: measured from +Z toward +X around the Y axis
//! - **Pitch**: elevation above the horizontal XZ plane (positive = above)

use crate::math::vec3::Vec3;

/// Converts spherical orbit parameters into the eye's offset from its target.
///
/// `x = d·cos(pitch)·sin(yaw)`, `y = d·sin(pitch)`, `z = d·cos(pitch)·cos(yaw)`.
/// No clamping is applied; at `pitch = ±90°` the offset is straight up/down.
pub fn orbit_to_eye_offset(yaw_degrees: f32, pitch_degrees: f32, distance: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    let pitch = pitch_degrees.to_radians();
    Vec3::new(
        distance * pitch.cos() * yaw.sin(),
        distance * pitch.sin(),
        distance * pitch.cos() * yaw.cos(),
    )
}

/// Limits the orbit camera is kept within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees.
    pub pitch_limit: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            pitch_limit: 89.0,
            min_distance: 1.0,
            max_distance: 50.0,
        }
    }
}

/// Orbit camera state: eye angles, distance, and the pointer drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    yaw: f32,   // degrees
    pitch: f32, // degrees
    distance: f32,
    dragging: bool,
    last_pointer: (i32, i32),
    limits: OrbitLimits,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(45.0, 30.0, 25.0, OrbitLimits::default())
    }
}

impl OrbitCamera {
    /// Creates a camera. Pitch and distance are clamped into `limits`.
    pub fn new(yaw: f32, pitch: f32, distance: f32, limits: OrbitLimits) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(-limits.pitch_limit, limits.pitch_limit),
            distance: distance.clamp(limits.min_distance, limits.max_distance),
            dragging: false,
            last_pointer: (0, 0),
            limits,
        }
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Rotates the eye around the target. Pitch is clamped to its limit.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch =
            (self.pitch + pitch_delta).clamp(-self.limits.pitch_limit, self.limits.pitch_limit);
    }

    /// Moves the eye toward (negative) or away from (positive) the target.
    /// Distance is clamped to its limits.
    pub fn zoom(&mut self, delta: f32) {
        self.distance =
            (self.distance + delta).clamp(self.limits.min_distance, self.limits.max_distance);
    }

    // =========================================================================
    // Pointer drag
    // =========================================================================

    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.dragging = true;
        self.last_pointer = (x, y);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Records a new pointer position and returns the delta from the last one,
    /// or `None` if no drag is in progress.
    pub fn drag_to(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        if !self.dragging {
            return None;
        }
        let (last_x, last_y) = self.last_pointer;
        self.last_pointer = (x, y);
        Some((x - last_x, y - last_y))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn last_pointer(&self) -> (i32, i32) {
        self.last_pointer
    }

    pub fn limits(&self) -> OrbitLimits {
        self.limits
    }

    /// Offset of the eye from the look-at target.
    pub fn eye_offset(&self) -> Vec3 {
        orbit_to_eye_offset(self.yaw, self.pitch, self.distance)
    }

    /// Eye offset for a miniature view: same angles, distance divided by
    /// `scale`.
    pub fn miniature_eye_offset(&self, scale: f32) -> Vec3 {
        orbit_to_eye_offset(self.yaw, self.pitch, self.distance / scale)
    }

    /// World-space eye position when orbiting `target`.
    pub fn eye_position(&self, target: Vec3) -> Vec3 {
        target + self.eye_offset()
    }
}

// =============================================================================
// Camera Controller
// =============================================================================

/// Maps pointer input onto an [`OrbitCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitController {
    /// Degrees of yaw/pitch per pixel of pointer drag.
    pub drag_sensitivity: f32,
    /// Distance change per scroll notch.
    pub zoom_step: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.5,
            zoom_step: 1.0,
        }
    }
}

impl OrbitController {
    pub fn new(drag_sensitivity: f32, zoom_step: f32) -> Self {
        Self {
            drag_sensitivity,
            zoom_step,
        }
    }

    /// Applies a pointer move. While dragging, moving right swings the eye
    /// toward -yaw and moving down raises it.
    pub fn pointer_moved(&self, camera: &mut OrbitCamera, x: i32, y: i32) {
        if let Some((dx, dy)) = camera.drag_to(x, y) {
            camera.rotate(
                -(dx as f32) * self.drag_sensitivity,
                dy as f32 * self.drag_sensitivity,
            );
            log::trace!(
                "orbit yaw {:.1} pitch {:.1}",
                camera.yaw(),
                camera.pitch()
            );
        }
    }

    /// Scrolling up moves the eye closer, scrolling down moves it away.
    pub fn scrolled(&self, camera: &mut OrbitCamera, toward_target: bool) {
        let delta = if toward_target {
            -self.zoom_step
        } else {
            self.zoom_step
        };
        camera.zoom(delta);
        log::trace!("orbit distance {:.1}", camera.distance());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn offset_length_equals_distance() {
        for yaw in [-270.0, -45.0, 0.0, 30.0, 180.0, 359.0] {
            for pitch in [-90.0, -60.0, 0.0, 15.0, 89.0, 90.0] {
                let offset = orbit_to_eye_offset(yaw, pitch, 7.5);
                assert_relative_eq!(offset.magnitude(), 7.5, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn level_pitch_has_no_height() {
        let offset = orbit_to_eye_offset(123.0, 0.0, 4.0);
        assert_relative_eq!(offset.y, 0.0);
    }

    #[test]
    fn vertical_pitch_is_straight_up() {
        let offset = orbit_to_eye_offset(45.0, 90.0, 3.0);
        assert_relative_eq!(offset.y, 3.0, epsilon = 1e-6);
        assert_relative_eq!(offset.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(offset.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn yaw_is_measured_from_z_toward_x() {
        let front = orbit_to_eye_offset(0.0, 0.0, 2.0);
        assert_relative_eq!(front.z, 2.0);
        let side = orbit_to_eye_offset(90.0, 0.0, 2.0);
        assert_relative_eq!(side.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(side.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn miniature_offset_is_scaled_down() {
        let camera = OrbitCamera::default();
        let full = camera.eye_offset();
        let mini = camera.miniature_eye_offset(4.0);
        assert_relative_eq!(mini.magnitude(), full.magnitude() / 4.0, epsilon = 1e-5);
        assert_relative_eq!(mini.x * 4.0, full.x, epsilon = 1e-4);
    }

    #[test]
    fn eye_position_is_relative_to_target() {
        let camera = OrbitCamera::new(0.0, 0.0, 5.0, OrbitLimits::default());
        let eye = camera.eye_position(Vec3::new(0.0, 0.0, -5.0));
        assert_relative_eq!(eye.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn drag_past_limits_pins_pitch() {
        let controller = OrbitController::default();
        let mut camera = OrbitCamera::default();
        camera.begin_drag(0, 0);
        for step in 1..=50 {
            controller.pointer_moved(&mut camera, 0, step * 20);
        }
        assert_eq!(camera.pitch(), 89.0);
        for step in (-50..50).rev() {
            controller.pointer_moved(&mut camera, 0, step * 20);
        }
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn drag_changes_yaw_against_pointer() {
        let controller = OrbitController::default();
        let mut camera = OrbitCamera::default();
        camera.begin_drag(100, 100);
        controller.pointer_moved(&mut camera, 110, 100);
        assert_relative_eq!(camera.yaw(), 40.0);
        assert_relative_eq!(camera.pitch(), 30.0);
    }

    #[test]
    fn pointer_moves_without_drag_are_ignored() {
        let controller = OrbitController::default();
        let mut camera = OrbitCamera::default();
        controller.pointer_moved(&mut camera, 300, 300);
        assert_eq!(camera, OrbitCamera::default());
    }

    #[test]
    fn drag_measures_from_last_pointer() {
        let mut camera = OrbitCamera::default();
        camera.begin_drag(10, 10);
        assert_eq!(camera.drag_to(15, 8), Some((5, -2)));
        assert_eq!(camera.drag_to(15, 8), Some((0, 0)));
        camera.end_drag();
        assert_eq!(camera.drag_to(40, 40), None);
        assert_eq!(camera.last_pointer(), (15, 8));
    }

    #[test]
    fn scroll_pins_distance_to_limits() {
        let controller = OrbitController::default();
        let mut camera = OrbitCamera::default();
        for _ in 0..100 {
            controller.scrolled(&mut camera, true);
        }
        assert_eq!(camera.distance(), 1.0);
        for _ in 0..100 {
            controller.scrolled(&mut camera, false);
        }
        assert_eq!(camera.distance(), 50.0);
    }

    #[test]
    fn new_clamps_out_of_range_state() {
        let camera = OrbitCamera::new(0.0, 120.0, 0.2, OrbitLimits::default());
        assert_eq!(camera.pitch(), 89.0);
        assert_eq!(camera.distance(), 1.0);
    }
}
