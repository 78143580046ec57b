use std::sync::Arc;

use winit::window::{CursorGrabMode, Window as WinitWindow};

/// Wrapper around winit Window that owns the cursor capture
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    /// Hide the cursor and keep it inside the window
    pub fn capture_cursor(&self) {
        let grabbed = self
            .inner
            .set_cursor_grab(CursorGrabMode::Confined)
            .or_else(|_| self.inner.set_cursor_grab(CursorGrabMode::Locked));

        if let Err(e) = grabbed {
            log::warn!("cursor grab unavailable: {e}");
        }
        self.inner.set_cursor_visible(false);
    }

    pub fn release_cursor(&self) {
        if let Err(e) = self.inner.set_cursor_grab(CursorGrabMode::None) {
            log::warn!("failed to release cursor: {e}");
        }
        self.inner.set_cursor_visible(true);
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}
