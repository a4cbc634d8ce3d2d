//! The three visualizations the viewer cycles through.

use std::fmt;

/// Which visualization is drawn each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    /// The hand-built projection matrix installed as the active projection,
    /// with an identity view.
    ManualProjection,
    /// An orbiting camera looking at a wireframe of the frustum.
    #[default]
    FrustumOverlay,
    /// Scene points carried through clip space into the NDC cube.
    ClipSpaceDemo,
}

impl VisualizationMode {
    pub const ALL: [VisualizationMode; 3] = [
        VisualizationMode::ManualProjection,
        VisualizationMode::FrustumOverlay,
        VisualizationMode::ClipSpaceDemo,
    ];

    /// The mode that follows this one in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::ManualProjection => Self::FrustumOverlay,
            Self::FrustumOverlay => Self::ClipSpaceDemo,
            Self::ClipSpaceDemo => Self::ManualProjection,
        }
    }

    /// Position in the cycle, starting at 0.
    pub fn index(self) -> usize {
        match self {
            Self::ManualProjection => 0,
            Self::FrustumOverlay => 1,
            Self::ClipSpaceDemo => 2,
        }
    }
}

impl fmt::Display for VisualizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualProjection => write!(f, "Manual projection"),
            Self::FrustumOverlay => write!(f, "Frustum overlay"),
            Self::ClipSpaceDemo => write!(f, "Clip space / NDC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_frustum_overlay() {
        assert_eq!(VisualizationMode::default(), VisualizationMode::FrustumOverlay);
    }

    #[test]
    fn three_steps_return_to_start() {
        for start in VisualizationMode::ALL {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn each_step_advances_one_index() {
        for mode in VisualizationMode::ALL {
            assert_eq!(mode.next().index(), (mode.index() + 1) % 3);
        }
    }
}
