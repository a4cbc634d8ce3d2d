//! An interactive viewer for perspective projection.
//!
//! Builds an off-center projection matrix by hand from a viewing frustum and
//! shows it three ways: installed as the active projection, as a wireframe
//! seen from an orbiting camera, and as the NDC cube that scene points land
//! in after the perspective divide. SDL2 is used only for the window and
//! input; all drawing is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use frustum_lab::prelude::*;
//!
//! let config = ViewerConfig::default();
//! let visualizer = Visualizer::new(&config)?;
//! let mut session = SessionState::from_config(&config);
//! let mut backend = SoftwareBackend::new(config.window.width, config.window.height);
//! visualizer.render_frame(&session, &mut backend);
//! ```

// Pure geometry
pub mod camera;
pub mod clip;
pub mod frustum;
pub mod math;
pub mod projection;
pub mod scene;

// Viewer state and configuration
pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod mode;
pub mod session;
pub mod visualizer;

// Backends
pub mod render;
pub mod window;

pub use config::ViewerConfig;
pub use error::{ConfigError, DegenerateFrustumError, SingularProjectionError, ViewerError};
pub use frustum::{compute_frustum_bounds, FrustumBounds};
pub use mode::VisualizationMode;
pub use projection::{build_perspective_projection, Projection, ProjectionMatrix};
pub use session::SessionState;
pub use visualizer::{FrameReport, Visualizer};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use frustum_lab::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use crate::camera::{orbit_to_eye_offset, OrbitCamera, OrbitController, OrbitLimits};
    pub use crate::clip::to_ndc;
    pub use crate::frustum::{compute_frustum_bounds, FrustumBounds};
    pub use crate::projection::{build_perspective_projection, Projection, ProjectionMatrix};

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Viewer
    pub use crate::config::ViewerConfig;
    pub use crate::mode::VisualizationMode;
    pub use crate::session::SessionState;
    pub use crate::visualizer::{FrameReport, Visualizer};

    // Rendering
    pub use crate::render::{RecordingBackend, RenderBackend, SoftwareBackend};

    // Window & Input
    pub use crate::input::InputEvent;
    pub use crate::window::{FrameLimiter, Window};
}
