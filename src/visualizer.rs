//! Per-frame dispatch of the three visualizations.
//!
//! The [`Visualizer`] owns everything derived once at startup (the frustum,
//! its hand-built projection matrix, the overlay projection and the scene)
//! and turns a [`SessionState`] into calls on a [`RenderBackend`].

use crate::clip::to_ndc;
use crate::colors;
use crate::config::{OverlaySettings, ViewerConfig};
use crate::error::{ConfigError, SingularProjectionError, ViewerError};
use crate::frustum::FrustumBounds;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mode::VisualizationMode;
use crate::projection::{Projection, ProjectionMatrix};
use crate::render::RenderBackend;
use crate::scene::{cube_edges, Scene};
use crate::session::SessionState;

/// Pixel size of the NDC markers in the clip-space demo.
pub const NDC_POINT_SIZE: f32 = 8.0;
/// Edge length of the canonical `[-1, 1]` cube.
pub const NDC_CUBE_SIZE: f32 = 2.0;

/// Where the perspective divide places a point, and the foot of its depth
/// axis (the NDC z axis at the same depth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcMarker {
    pub ndc: Vec3,
    pub axis_foot: Vec3,
}

/// Carries a world-space point through `projection` into NDC.
pub fn ndc_marker(
    point: Vec4,
    projection: &ProjectionMatrix,
) -> Result<NdcMarker, SingularProjectionError> {
    let ndc = to_ndc(point, projection)?;
    Ok(NdcMarker {
        ndc,
        axis_foot: Vec3::new(0.0, 0.0, ndc.z),
    })
}

/// Summary of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub mode: VisualizationMode,
    /// Scene points left out because they projected onto the eye plane.
    pub skipped_points: usize,
}

pub struct Visualizer {
    frustum: Projection,
    projection: ProjectionMatrix,
    overlay: Projection,
    overlay_settings: OverlaySettings,
    scene: Scene,
}

impl Visualizer {
    pub fn new(config: &ViewerConfig) -> Result<Self, ViewerError> {
        let frustum = config.frustum.projection()?;
        let projection = frustum.matrix()?;
        let overlay = config.overlay.projection(config.window.aspect_ratio())?;

        let bounds = frustum.bounds();
        log::info!(
            "frustum: fov {}°, aspect {}, near {}, far {} -> l {:.4} r {:.4} b {:.4} t {:.4}",
            frustum.fov_y_degrees(),
            frustum.aspect_ratio(),
            frustum.z_near(),
            frustum.z_far(),
            bounds.left,
            bounds.right,
            bounds.bottom,
            bounds.top
        );
        log::info!("projection (row-vector form): {:?}", projection.row_major().rows());

        Ok(Self {
            frustum,
            projection,
            overlay,
            overlay_settings: config.overlay,
            scene: config.scene.clone(),
        })
    }

    pub fn bounds(&self) -> FrustumBounds {
        self.frustum.bounds()
    }

    pub fn frustum(&self) -> &Projection {
        &self.frustum
    }

    pub fn projection(&self) -> &ProjectionMatrix {
        &self.projection
    }

    pub fn overlay(&self) -> &Projection {
        &self.overlay
    }

    /// Matches the overlay camera to a new viewport. The hand-built frustum
    /// keeps its own fixed aspect ratio.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::WindowSize { width, height });
        }
        self.overlay.set_aspect_ratio(width as f32 / height as f32)
    }

    /// Clears the frame and draws the active visualization.
    pub fn render_frame<B: RenderBackend + ?Sized>(
        &self,
        session: &SessionState,
        backend: &mut B,
    ) -> FrameReport {
        backend.clear_frame();
        let skipped_points = match session.mode {
            VisualizationMode::ManualProjection => {
                self.draw_manual_projection(backend);
                0
            }
            VisualizationMode::FrustumOverlay => {
                self.draw_frustum_overlay(session, backend);
                0
            }
            VisualizationMode::ClipSpaceDemo => self.draw_clip_space_demo(session, backend),
        };
        FrameReport {
            mode: session.mode,
            skipped_points,
        }
    }

    fn draw_scene_cubes<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        for cube in &self.scene.cubes {
            for (from, to) in cube_edges(cube.center(), self.scene.cube_size) {
                backend.draw_line(from, to, cube.color);
            }
        }
    }

    /// The hand-built matrix as the active projection, camera at the origin.
    fn draw_manual_projection<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.set_projection(self.projection.as_mat4());
        backend.set_view_identity();
        self.draw_scene_cubes(backend);
    }

    /// An orbiting camera looking at the frustum's outline and the scene.
    fn draw_frustum_overlay<B: RenderBackend + ?Sized>(
        &self,
        session: &SessionState,
        backend: &mut B,
    ) {
        let target = self.overlay_settings.target;
        backend.set_projection(self.overlay.standard_matrix());
        backend.set_look_at(session.camera.eye_position(target), target, Vec3::UP);

        let bounds = self.frustum.bounds();
        for (from, to) in bounds.wireframe(self.frustum.z_near(), self.frustum.z_far()) {
            backend.draw_line(from, to, colors::RED);
        }
        self.draw_scene_cubes(backend);
    }

    /// A miniature camera around the NDC cube, with each scene point placed
    /// where the hand-built projection sends it.
    fn draw_clip_space_demo<B: RenderBackend + ?Sized>(
        &self,
        session: &SessionState,
        backend: &mut B,
    ) -> usize {
        let eye = session
            .camera
            .miniature_eye_offset(self.overlay_settings.miniature_scale);
        backend.set_projection(self.overlay.standard_matrix());
        backend.set_look_at(eye, Vec3::ZERO, Vec3::UP);

        for (from, to) in cube_edges(Vec3::ZERO, NDC_CUBE_SIZE) {
            backend.draw_line(from, to, colors::GREY);
        }

        let mut skipped = 0;
        for cube in &self.scene.cubes {
            match ndc_marker(cube.sample_point(), &self.projection) {
                Ok(marker) => {
                    backend.draw_point(marker.ndc, NDC_POINT_SIZE, cube.color);
                    backend.draw_line(marker.ndc, marker.axis_foot, cube.color);
                }
                Err(err) => {
                    log::debug!("skipping cube at depth {}: {err}", cube.depth);
                    skipped += 1;
                }
            }
        }
        skipped
    }
}
