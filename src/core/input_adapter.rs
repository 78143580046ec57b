use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixel scroll deltas (touchpads) are converted to lines with this factor
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Where mouse-look deltas come from
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerSource {
    /// Nothing observed yet
    None,
    /// Differences between window cursor positions
    Cursor { last: (f32, f32) },
    /// Raw device motion, unaffected by cursor grab
    Device,
}

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    pointer: PointerSource,
    /// Pointer movement since last reset
    mouse_delta: (f32, f32),
    /// Scroll lines since last reset
    scroll_delta: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pointer: PointerSource::None,
            mouse_delta: (0.0, 0.0),
            scroll_delta: 0.0,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state);
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll_delta += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Process a raw device event; mouse motion takes over from cursor positions
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.mouse_motion(*dx as f32, *dy as f32);
        }
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(button);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// The first position only seeds the reference; later ones accumulate.
    /// Ignored once device motion is available.
    pub(crate) fn cursor_moved(&mut self, x: f32, y: f32) {
        match self.pointer {
            PointerSource::Device => {}
            PointerSource::None => self.pointer = PointerSource::Cursor { last: (x, y) },
            PointerSource::Cursor { last } => {
                self.mouse_delta.0 += x - last.0;
                self.mouse_delta.1 += y - last.1;
                self.pointer = PointerSource::Cursor { last: (x, y) };
            }
        }
    }

    pub(crate) fn mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.pointer != PointerSource::Device {
            // Drop cursor deltas from this frame so motion is not counted twice
            self.mouse_delta = (0.0, 0.0);
            self.pointer = PointerSource::Device;
        }
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Drop held keys, e.g. when focus is lost and releases would be missed
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Reset per-frame state (mouse and scroll deltas)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn mouse_delta(&self) -> Option<(f32, f32)> {
        match self.pointer {
            PointerSource::None => None,
            _ => Some(self.mouse_delta),
        }
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }
}
