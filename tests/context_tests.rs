use campfire_scene::camera::{BasisFormula, Camera, INITIAL_POSITION};
use campfire_scene::context::AppContext;
use campfire_scene::core::{Button, Controller, WindowDimensions};
use campfire_scene::projection::{build_projection, ProjectionMode};
use glam::Vec3;

/// Scripted input for one frame
#[derive(Default)]
struct MockController {
    pressed: Vec<Button>,
    mouse: Option<(f32, f32)>,
    scroll: f32,
}

impl MockController {
    fn holding(buttons: &[Button]) -> Self {
        Self {
            pressed: buttons.to_vec(),
            ..Default::default()
        }
    }
}

impl Controller for MockController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn mouse_delta(&self) -> Option<(f32, f32)> {
        self.mouse
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }
}

fn spherical_context() -> AppContext {
    AppContext::new(Camera::with_formula(INITIAL_POSITION, BasisFormula::Spherical))
}

#[test]
fn test_holding_p_toggles_once() {
    let mut ctx = AppContext::default();
    let held = MockController::holding(&[Button::KeyP]);

    for _ in 0..60 {
        ctx.update(&held, 1.0 / 60.0);
    }
    assert_eq!(ctx.projection_mode(), ProjectionMode::Orthographic);

    ctx.update(&MockController::default(), 1.0 / 60.0);
    ctx.update(&held, 1.0 / 60.0);
    assert_eq!(ctx.projection_mode(), ProjectionMode::Perspective);
}

#[test]
fn test_w_moves_along_front() {
    let mut ctx = spherical_context();
    ctx.update(&MockController::holding(&[Button::KeyW]), 0.5);
    assert!(ctx
        .camera
        .position
        .abs_diff_eq(Vec3::new(0.0, 3.0, 13.75), 1e-4));
}

#[test]
fn test_q_and_e_move_along_camera_up() {
    let mut ctx = spherical_context();
    ctx.update(&MockController::holding(&[Button::KeyQ]), 1.0);
    assert!(ctx
        .camera
        .position
        .abs_diff_eq(INITIAL_POSITION + Vec3::Y * 2.5, 1e-4));

    ctx.update(&MockController::holding(&[Button::KeyE]), 1.0);
    assert!(ctx.camera.position.abs_diff_eq(INITIAL_POSITION, 1e-4));
}

#[test]
fn test_first_mouse_delta_is_applied() {
    let mut ctx = AppContext::default();
    let moving = MockController {
        mouse: Some((10.0, 0.0)),
        ..Default::default()
    };

    ctx.update(&moving, 0.016);
    assert!((ctx.camera.yaw() - -89.0).abs() < 1e-4);

    ctx.update(&moving, 0.016);
    assert!((ctx.camera.yaw() - -88.0).abs() < 1e-4);
}

#[test]
fn test_no_pointer_input_keeps_camera_unseeded() {
    let mut ctx = AppContext::default();
    ctx.update(&MockController::holding(&[Button::KeyW]), 0.016);
    assert!(ctx.camera.awaiting_first_mouse());
    assert_eq!(ctx.camera.yaw(), -90.0);
}

#[test]
fn test_mouse_down_pitches_down() {
    let mut ctx = AppContext::default();
    let seed = MockController {
        mouse: Some((0.0, 0.0)),
        ..Default::default()
    };
    let down = MockController {
        mouse: Some((0.0, 20.0)),
        ..Default::default()
    };

    ctx.update(&seed, 0.016);
    ctx.update(&down, 0.016);
    assert!((ctx.camera.pitch() - -2.0).abs() < 1e-4);
}

#[test]
fn test_scroll_changes_speed() {
    let mut ctx = AppContext::default();
    let scroll = MockController {
        scroll: 1.0,
        ..Default::default()
    };
    ctx.update(&scroll, 0.016);
    assert_eq!(ctx.camera.movement_speed(), 1.5);
    assert_eq!(ctx.camera.zoom(), 45.0);
}

#[test]
fn test_transforms_follow_mode() {
    let mut ctx = AppContext::default();
    let dims = WindowDimensions::new(800, 600);

    let perspective = ctx.transforms(dims);
    assert_eq!(
        perspective.projection,
        build_projection(ProjectionMode::Perspective, dims, ctx.camera.zoom())
    );
    assert_eq!(perspective.view, ctx.camera.view_matrix());
    assert_eq!(perspective.eye, ctx.camera.position);

    ctx.update(&MockController::holding(&[Button::KeyP]), 0.016);
    let ortho = ctx.transforms(dims);
    assert_eq!(
        ortho.projection,
        build_projection(ProjectionMode::Orthographic, dims, ctx.camera.zoom())
    );
}
