pub mod camera;
pub mod cli;
pub mod context;
pub mod core;
pub mod frame;
pub mod mesh;
pub mod overlay;
pub mod projection;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod transform;
pub mod types;
pub mod window;

pub use camera::{BasisFormula, Camera, CameraMovement};
pub use context::AppContext;
pub use projection::{build_projection, ProjectionMode, ProjectionSelector};
pub use scene::campfire_scene;
