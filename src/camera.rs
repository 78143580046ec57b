use glam::{Mat4, Vec3};

pub const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 3.0, 15.0);
pub const WORLD_UP: Vec3 = Vec3::Y;

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const PITCH_LIMIT: f32 = 89.0;

pub const SPEED: f32 = 2.5;
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 15.0;

pub const SENSITIVITY: f32 = 0.1;

pub const ZOOM: f32 = 45.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Direction of a keyboard-driven camera move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Formula used to turn yaw/pitch into the front vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BasisFormula {
    /// `front.z = sin(yaw) * sin(pitch)`, the formula the scene was authored with
    #[default]
    AsAuthored,
    /// `front.z = sin(yaw) * cos(pitch)`, the usual spherical conversion
    Spherical,
}

impl BasisFormula {
    /// Unnormalized front vector for the given angles in degrees
    pub fn front(self, yaw: f32, pitch: f32) -> Vec3 {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let z = match self {
            BasisFormula::AsAuthored => yaw.sin() * pitch.sin(),
            BasisFormula::Spherical => yaw.sin() * pitch.cos(),
        };
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), z)
    }
}

/// First-person fly camera
///
/// `front`, `right` and `up` are derived from `yaw` and `pitch` and are only
/// ever rewritten when the angles change.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    first_mouse: bool,
    formula: BasisFormula,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::with_formula(position, BasisFormula::default())
    }

    pub fn with_formula(position: Vec3, formula: BasisFormula) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: WORLD_UP,
            right: Vec3::X,
            yaw: YAW,
            pitch: PITCH,
            zoom: ZOOM,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            first_mouse: true,
            formula,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// True until the first mouse-movement call has seeded the camera
    pub fn awaiting_first_mouse(&self) -> bool {
        self.first_mouse
    }

    pub fn formula(&self) -> BasisFormula {
        self.formula
    }

    pub fn set_zoom(&mut self, degrees: f32) {
        self.zoom = degrees.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// World-to-camera transform looking from `position` along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Move along one basis vector; non-positive `delta_time` is a no-op
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        if !(delta_time > 0.0) {
            return;
        }

        let velocity = self.movement_speed * delta_time;
        let axis = match direction {
            CameraMovement::Forward => self.front,
            CameraMovement::Backward => -self.front,
            CameraMovement::Left => -self.right,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.up,
            CameraMovement::Down => -self.up,
        };
        self.position += axis * velocity;
    }

    /// Rotate by cursor offsets in pixels (`yoffset` positive looks up)
    ///
    /// The first call after construction only establishes the reference
    /// and leaves the orientation untouched.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        if self.first_mouse {
            self.first_mouse = false;
            return;
        }

        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scroll adjusts movement speed, not the field of view
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.movement_speed = (self.movement_speed - yoffset).clamp(MIN_SPEED, MAX_SPEED);
    }

    fn update_vectors(&mut self) {
        // Keep the previous basis if the new one would be degenerate.
        let Some(front) = self.formula.front(self.yaw, self.pitch).try_normalize() else {
            log::warn!("degenerate front vector at yaw={} pitch={}", self.yaw, self.pitch);
            return;
        };
        let Some(right) = front.cross(WORLD_UP).try_normalize() else {
            log::warn!("front vector parallel to world up at pitch={}", self.pitch);
            return;
        };

        self.front = front;
        self.right = right;
        self.up = right.cross(front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(INITIAL_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn seeded() -> Camera {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 0.0, true);
        camera
    }

    #[test]
    fn default_camera_state() {
        let camera = Camera::default();
        assert_eq!(camera.position, Vec3::new(0.0, 3.0, 15.0));
        assert_eq!(camera.yaw(), -90.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.zoom(), 45.0);
        assert_eq!(camera.movement_speed(), 2.5);
        assert_eq!(camera.formula(), BasisFormula::AsAuthored);
    }

    #[test]
    fn as_authored_front_at_rest_points_down_negative_x() {
        // cos(-90°) is not exactly zero in f32, so the tiny x survives normalization
        let camera = Camera::default();
        assert!((camera.front() - Vec3::NEG_X).length() < EPSILON);
    }

    #[test]
    fn spherical_front_at_rest_points_down_negative_z() {
        let camera = Camera::with_formula(INITIAL_POSITION, BasisFormula::Spherical);
        assert!((camera.front() - Vec3::NEG_Z).length() < EPSILON);
        assert!((camera.right() - Vec3::X).length() < EPSILON);
        assert!((camera.up() - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn first_mouse_event_is_ignored() {
        let mut camera = Camera::default();
        let front = camera.front();
        camera.process_mouse_movement(640.0, -480.0, true);
        assert_eq!(camera.yaw(), YAW);
        assert_eq!(camera.pitch(), PITCH);
        assert_eq!(camera.front(), front);
        assert!(!camera.awaiting_first_mouse());
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = seeded();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        camera.process_mouse_movement(0.0, -50_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_can_pass_the_limit() {
        let mut camera = seeded();
        camera.process_mouse_movement(0.0, 1_000.0, false);
        assert_eq!(camera.pitch(), 100.0);
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut camera = seeded();
        camera.process_mouse_movement(10_000.0, 0.0, true);
        assert!((camera.yaw() - (YAW + 1_000.0)).abs() < 1e-3);
    }

    #[test]
    fn keyboard_moves_along_basis() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.process_keyboard(CameraMovement::Right, 2.0);
        let expected = start + camera.right() * SPEED * 2.0;
        assert!((camera.position - expected).length() < EPSILON);

        camera.process_keyboard(CameraMovement::Left, 2.0);
        assert!((camera.position - start).length() < EPSILON);
    }

    #[test]
    fn keyboard_ignores_non_positive_delta() {
        let mut camera = Camera::default();
        let start = camera.position;
        camera.process_keyboard(CameraMovement::Forward, 0.0);
        camera.process_keyboard(CameraMovement::Up, -1.0);
        camera.process_keyboard(CameraMovement::Down, f32::NAN);
        assert_eq!(camera.position, start);
    }

    #[test]
    fn scroll_changes_speed_not_zoom() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(1.0);
        assert_eq!(camera.movement_speed(), 1.5);
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.set_zoom(0.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.set_zoom(90.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
        camera.set_zoom(30.0);
        assert_eq!(camera.zoom(), 30.0);
    }
}
