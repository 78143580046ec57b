pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod window;

pub use controller::{Button, Controller, MOVEMENT_BINDINGS, PROJECTION_TOGGLE};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use window::WindowDimensions;
