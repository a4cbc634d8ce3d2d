//! Viewer configuration.
//!
//! All values are fixed at startup. [`ViewerConfig::default`] reproduces the
//! reference setup; [`ViewerConfig::validate`] checks a configuration before
//! anything is derived from it.

use std::time::Duration;

use crate::camera::{OrbitCamera, OrbitController, OrbitLimits};
use crate::error::ConfigError;
use crate::math::vec3::Vec3;
use crate::mode::VisualizationMode;
use crate::projection::Projection;
use crate::scene::Scene;

/// Parameters of the frustum whose projection matrix is built by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumSettings {
    pub fov_y_degrees: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for FrustumSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 110.0,
            aspect_ratio: 1.0,
            near: 0.1,
            far: 20.0,
        }
    }
}

impl FrustumSettings {
    pub fn projection(&self) -> Result<Projection, ConfigError> {
        Projection::from_degrees(self.fov_y_degrees, self.aspect_ratio, self.near, self.far)
    }
}

/// The navigation camera used to look at the scene from outside the frustum.
///
/// Its parameters differ from [`FrustumSettings`] so the drawn frustum is
/// distinguishable from the camera viewing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySettings {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Look-at target of the orbiting camera in the frustum overlay.
    pub target: Vec3,
    /// Orbit distance divisor for the miniature clip-space view.
    pub miniature_scale: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            target: Vec3::new(0.0, 0.0, -5.0),
            miniature_scale: 4.0,
        }
    }
}

impl OverlaySettings {
    /// The overlay projection for a viewport with the given aspect ratio.
    pub fn projection(&self, aspect_ratio: f32) -> Result<Projection, ConfigError> {
        Projection::from_degrees(self.fov_y_degrees, aspect_ratio, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub limits: OrbitLimits,
    pub controller: OrbitController,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            yaw: 45.0,
            pitch: 30.0,
            distance: 25.0,
            limits: OrbitLimits::default(),
            controller: OrbitController::default(),
        }
    }
}

impl CameraSettings {
    pub fn camera(&self) -> OrbitCamera {
        OrbitCamera::new(self.yaw, self.pitch, self.distance, self.limits)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Fixed pause at the end of every frame.
    pub frame_delay: Duration,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Frustum Lab".to_string(),
            width: 800,
            height: 800,
            frame_delay: Duration::from_millis(10),
        }
    }
}

impl WindowSettings {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerConfig {
    pub frustum: FrustumSettings,
    pub overlay: OverlaySettings,
    pub camera: CameraSettings,
    pub window: WindowSettings,
    pub initial_mode: VisualizationMode,
    pub scene: Scene,
}

impl ViewerConfig {
    /// Checks every setting, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.frustum.projection()?;

        let window = &self.window;
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::WindowSize {
                width: window.width,
                height: window.height,
            });
        }
        self.overlay.projection(window.aspect_ratio())?;
        positive("miniature scale", self.overlay.miniature_scale)?;

        let camera = &self.camera;
        let limits = camera.limits;
        if !(limits.pitch_limit > 0.0 && limits.pitch_limit < 90.0) {
            return Err(ConfigError::PitchLimit(limits.pitch_limit));
        }
        if !(limits.min_distance > 0.0 && limits.max_distance >= limits.min_distance)
            || !limits.max_distance.is_finite()
        {
            return Err(ConfigError::DistanceRange {
                min: limits.min_distance,
                max: limits.max_distance,
            });
        }
        positive("drag sensitivity", camera.controller.drag_sensitivity)?;
        positive("zoom step", camera.controller.zoom_step)?;
        if !camera.yaw.is_finite() {
            return Err(ConfigError::InitialCamera {
                name: "yaw",
                value: camera.yaw,
            });
        }
        if !(camera.pitch.abs() <= limits.pitch_limit) {
            return Err(ConfigError::InitialCamera {
                name: "pitch",
                value: camera.pitch,
            });
        }
        if !(camera.distance >= limits.min_distance && camera.distance <= limits.max_distance) {
            return Err(ConfigError::InitialCamera {
                name: "distance",
                value: camera.distance,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
