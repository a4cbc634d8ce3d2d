use crate::colors::{self, Color};
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

// Unit cube centred on the origin
pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5),
];

// Front face, back face, then the four edges joining them
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// The 12 edges of an axis-aligned cube with the given center and edge length.
pub fn cube_edges(center: Vec3, size: f32) -> [(Vec3, Vec3); 12] {
    let model = Mat4::translation(center.x, center.y, center.z) * Mat4::scaling(size, size, size);
    let corners = CUBE_VERTICES.map(|v| (model * Vec4::from(v)).to_vec3());
    CUBE_EDGES.map(|(a, b)| (corners[a], corners[b]))
}

/// A reference cube placed at a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCube {
    pub depth: f32,
    pub color: Color,
}

impl SceneCube {
    /// Cubes sit at `(depth / 10, 0, depth)`, drifting right as they recede.
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.depth / 10.0, 0.0, self.depth)
    }

    /// The cube's top-right front corner, carried through the projection in
    /// the clip-space demo.
    pub fn sample_point(&self) -> Vec4 {
        Vec4::point(self.depth / 10.0 + 0.5, 0.5, self.depth + 0.5)
    }
}

/// The fixed set of reference cubes.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub cubes: Vec<SceneCube>,
    pub cube_size: f32,
}

impl Scene {
    pub const REFERENCE_DEPTHS: [f32; 3] = [-2.0, -5.0, -10.0];
    pub const REFERENCE_COLORS: [Color; 3] = [colors::GREEN, colors::CYAN, colors::MAGENTA];

    /// Cubes at the reference depths with their reference colors.
    pub fn reference() -> Self {
        Self::from_depths(&Self::REFERENCE_DEPTHS)
    }

    /// Cubes at arbitrary depths, colored by cycling the reference colors.
    pub fn from_depths(depths: &[f32]) -> Self {
        let cubes = depths
            .iter()
            .zip(Self::REFERENCE_COLORS.iter().cycle())
            .map(|(&depth, &color)| SceneCube { depth, color })
            .collect();
        Self {
            cubes,
            cube_size: 1.0,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_scene_layout() {
        let scene = Scene::reference();
        assert_eq!(scene.cubes.len(), 3);
        assert_eq!(scene.cubes[1].center(), Vec3::new(-0.5, 0.0, -5.0));
        assert_eq!(scene.cubes[2].color, colors::MAGENTA);
        let sample = scene.cubes[0].sample_point();
        assert_relative_eq!(sample.x, 0.3, epsilon = 1e-6);
        assert_relative_eq!(sample.y, 0.5);
        assert_relative_eq!(sample.z, -1.5);
        assert_relative_eq!(sample.w, 1.0);
    }

    #[test]
    fn cube_edges_have_requested_size() {
        let center = Vec3::new(1.0, 2.0, -3.0);
        for (a, b) in cube_edges(center, 2.0) {
            assert_relative_eq!((b - a).magnitude(), 2.0, epsilon = 1e-6);
            assert_relative_eq!((a - center).magnitude(), 3.0f32.sqrt(), epsilon = 1e-5);
        }
    }

    #[test]
    fn extra_depths_reuse_colors() {
        let scene = Scene::from_depths(&[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(scene.cubes[3].color, scene.cubes[0].color);
    }
}
