use crate::camera::Camera;
use crate::core::{Controller, WindowDimensions, MOVEMENT_BINDINGS, PROJECTION_TOGGLE};
use crate::projection::{ProjectionMode, ProjectionSelector};
use crate::transform::FrameTransforms;

/// State owned by the frame loop and updated from input each frame
#[derive(Debug, Clone)]
pub struct AppContext {
    pub camera: Camera,
    pub projection: ProjectionSelector,
}

impl AppContext {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            projection: ProjectionSelector::default(),
        }
    }

    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection.mode()
    }

    /// Apply one frame of input: movement, look, speed, projection toggle
    pub fn update(&mut self, controller: &dyn Controller, delta_time: f32) {
        for (button, movement) in MOVEMENT_BINDINGS {
            if controller.is_down(button) {
                self.camera.process_keyboard(movement, delta_time);
            }
        }

        if let Some((dx, dy)) = controller.mouse_delta() {
            // The first observed pointer sample is the reference, not a movement
            if self.camera.awaiting_first_mouse() {
                self.camera.process_mouse_movement(0.0, 0.0, true);
            }
            // Window y grows downwards; positive pitch looks up
            self.camera.process_mouse_movement(dx, -dy, true);
        }

        let scroll = controller.scroll_delta();
        if scroll != 0.0 {
            self.camera.process_mouse_scroll(scroll);
            log::debug!("movement speed {:.1}", self.camera.movement_speed());
        }

        if self.projection.update(controller.is_down(PROJECTION_TOGGLE)) {
            log::info!("switched to {} projection", self.projection.mode().label());
        }
    }

    pub fn transforms(&self, viewport: WindowDimensions) -> FrameTransforms {
        FrameTransforms::new(&self.camera, self.projection.mode(), viewport)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WinitController;

    #[test]
    fn first_cursor_move_in_seed_frame_turns_camera() {
        let mut ctx = AppContext::default();
        let mut input = WinitController::new();

        input.cursor_moved(400.0, 300.0);
        input.cursor_moved(500.0, 300.0);
        ctx.update(&input, 0.016);

        assert!((ctx.camera.yaw() - -80.0).abs() < 1e-4);
        assert_eq!(ctx.camera.pitch(), 0.0);
    }

    #[test]
    fn position_only_frame_leaves_camera_still() {
        let mut ctx = AppContext::default();
        let mut input = WinitController::new();

        input.cursor_moved(400.0, 300.0);
        ctx.update(&input, 0.016);
        input.reset_deltas();
        assert_eq!(ctx.camera.yaw(), -90.0);
        assert!(!ctx.camera.awaiting_first_mouse());

        input.cursor_moved(400.0, 250.0);
        ctx.update(&input, 0.016);
        assert!((ctx.camera.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn device_motion_turns_past_window_width() {
        let mut ctx = AppContext::default();
        let mut input = WinitController::new();

        for _ in 0..40 {
            input.mouse_motion(100.0, 0.0);
            ctx.update(&input, 0.016);
            input.reset_deltas();
        }

        // 4000 px at 0.1 degrees per pixel, far beyond an 800 px window
        assert!((ctx.camera.yaw() - 310.0).abs() < 1e-2);
    }
}
