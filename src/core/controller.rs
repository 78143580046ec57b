use crate::camera::CameraMovement;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyP,
    Escape,
}

/// Held keys that move the camera, in the order they are applied each frame
pub const MOVEMENT_BINDINGS: [(Button, CameraMovement); 6] = [
    (Button::KeyW, CameraMovement::Forward),
    (Button::KeyS, CameraMovement::Backward),
    (Button::KeyA, CameraMovement::Left),
    (Button::KeyD, CameraMovement::Right),
    (Button::KeyQ, CameraMovement::Up),
    (Button::KeyE, CameraMovement::Down),
];

/// Projection toggle key
pub const PROJECTION_TOGGLE: Button = Button::KeyP;

/// Controller - per-frame input sample
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Pointer movement since the last reset, in pixels (y grows downwards)
    ///
    /// `None` until any pointer input has been observed.
    fn mouse_delta(&self) -> Option<(f32, f32)>;

    /// Scroll wheel movement since the last reset, in lines
    fn scroll_delta(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_movement_bindings_are_unique() {
        let buttons: HashSet<_> = MOVEMENT_BINDINGS.iter().map(|(b, _)| *b).collect();
        let moves: HashSet<_> = MOVEMENT_BINDINGS.iter().map(|(_, m)| *m).collect();
        assert_eq!(buttons.len(), 6);
        assert_eq!(moves.len(), 6);
        assert!(!buttons.contains(&PROJECTION_TOGGLE));
        assert!(!buttons.contains(&Button::Escape));
    }

    #[test]
    fn test_qe_fly_vertically() {
        assert!(MOVEMENT_BINDINGS.contains(&(Button::KeyQ, CameraMovement::Up)));
        assert!(MOVEMENT_BINDINGS.contains(&(Button::KeyE, CameraMovement::Down)));
    }

    struct MockController {
        pressed: Vec<Button>,
        mouse: Option<(f32, f32)>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn mouse_delta(&self) -> Option<(f32, f32)> {
            self.mouse
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyP],
            mouse: None,
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::KeyP));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.mouse_delta(), None);
    }
}
