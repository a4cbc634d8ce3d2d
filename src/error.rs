//! Error types for the projection pipeline and the viewer.

/// An invalid configuration value.
///
/// Raised when frustum, overlay, camera or window settings are out of range.
/// These come from fixed constants, so they are reported once at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
    #[error("aspect ratio must be positive and finite, got {0}")]
    AspectRatio(f32),
    #[error("near plane distance must be positive and finite, got {0}")]
    NearPlane(f32),
    #[error("far plane ({far}) must lie beyond the near plane ({near})")]
    FarPlane { near: f32, far: f32 },
    #[error("window size must be non-zero, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },
    #[error("camera distance range [{min}, {max}] is empty or not positive")]
    DistanceRange { min: f32, max: f32 },
    #[error("pitch limit must lie in (0, 90) degrees, got {0}")]
    PitchLimit(f32),
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("initial camera {name} ({value}) lies outside its limits")]
    InitialCamera { name: &'static str, value: f32 },
}

/// A frustum that cannot be turned into a projection matrix.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DegenerateFrustumError {
    #[error("frustum has zero width (left = right = {0})")]
    ZeroWidth(f32),
    #[error("frustum has zero height (bottom = top = {0})")]
    ZeroHeight(f32),
    #[error("depth range requires far > near > 0, got near = {near}, far = {far}")]
    DepthRange { near: f32, far: f32 },
    #[error("frustum bounds must be finite")]
    NonFinite,
}

/// The homogeneous `w` of a projected point is too close to zero to divide by.
///
/// Happens when the point lies on (or numerically next to) the eye plane.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("clip-space w = {w} is too close to zero for a perspective divide")]
pub struct SingularProjectionError {
    pub w: f32,
}

/// Top-level error for the viewer binary.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("degenerate frustum: {0}")]
    DegenerateFrustum(#[from] DegenerateFrustumError),
    #[error("platform error: {0}")]
    Platform(String),
}
