use glam::Mat4;

use crate::core::WindowDimensions;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Pixels per world unit for the orthographic view volume
pub const ORTHO_SCALE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        }
    }
}

/// Projection mode with edge-triggered toggling
///
/// Holding the toggle key flips the mode once; it has to be released
/// before it can flip again.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionSelector {
    mode: ProjectionMode,
    was_down: bool,
}

impl ProjectionSelector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self {
            mode,
            was_down: false,
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    /// Feed this frame's toggle-key state. Returns true if the mode flipped.
    pub fn update(&mut self, key_down: bool) -> bool {
        let pressed = key_down && !self.was_down;
        self.was_down = key_down;

        if pressed {
            self.mode = self.mode.toggled();
        }
        pressed
    }

    pub fn projection(&self, viewport: WindowDimensions, fov_degrees: f32) -> Mat4 {
        build_projection(self.mode, viewport, fov_degrees)
    }
}

/// Right-handed projection with [0, 1] clip depth
pub fn build_projection(mode: ProjectionMode, viewport: WindowDimensions, fov_degrees: f32) -> Mat4 {
    let width = viewport.width.max(1) as f32;
    let height = viewport.height.max(1) as f32;

    match mode {
        ProjectionMode::Perspective => {
            Mat4::perspective_rh(fov_degrees.to_radians(), width / height, NEAR_PLANE, FAR_PLANE)
        }
        ProjectionMode::Orthographic => {
            let half_width = width / ORTHO_SCALE;
            let half_height = height / ORTHO_SCALE;
            Mat4::orthographic_rh(
                -half_width,
                half_width,
                -half_height,
                half_height,
                NEAR_PLANE,
                FAR_PLANE,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn selector_starts_in_perspective() {
        let selector = ProjectionSelector::default();
        assert_eq!(selector.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn toggles_only_on_press_edge() {
        let mut selector = ProjectionSelector::default();

        assert!(selector.update(true));
        assert_eq!(selector.mode(), ProjectionMode::Orthographic);

        for _ in 0..30 {
            assert!(!selector.update(true));
        }
        assert_eq!(selector.mode(), ProjectionMode::Orthographic);

        assert!(!selector.update(false));
        assert!(selector.update(true));
        assert_eq!(selector.mode(), ProjectionMode::Perspective);
    }

    #[test]
    fn released_key_does_nothing() {
        let mut selector = ProjectionSelector::new(ProjectionMode::Orthographic);
        for _ in 0..5 {
            assert!(!selector.update(false));
        }
        assert_eq!(selector.mode(), ProjectionMode::Orthographic);
    }

    #[test]
    fn orthographic_extent_scales_with_window() {
        let proj = build_projection(
            ProjectionMode::Orthographic,
            WindowDimensions::new(800, 600),
            45.0,
        );
        // Right edge of the view volume maps to clip x = 1
        let edge = proj * Vec4::new(8.0, 6.0, -1.0, 1.0);
        assert!((edge.x - 1.0).abs() < 1e-6);
        assert!((edge.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn depth_range_maps_near_and_far() {
        for mode in [ProjectionMode::Perspective, ProjectionMode::Orthographic] {
            let proj = build_projection(mode, WindowDimensions::new(800, 600), 45.0);
            let near = proj * Vec4::new(0.0, 0.0, -NEAR_PLANE, 1.0);
            let far = proj * Vec4::new(0.0, 0.0, -FAR_PLANE, 1.0);
            assert!((near.z / near.w).abs() < 1e-5, "{mode:?}");
            assert!((far.z / far.w - 1.0).abs() < 1e-5, "{mode:?}");
        }
    }

    #[test]
    fn zero_height_does_not_produce_nan() {
        let proj = build_projection(ProjectionMode::Perspective, WindowDimensions::new(800, 0), 45.0);
        assert!(proj.is_finite());
    }
}
