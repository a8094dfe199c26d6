pub mod camera;
pub mod error;
pub mod film;
pub mod geometry;
pub mod material;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;

pub use error::Error;
pub use renderer::{RenderStats, Renderer, Viewport};
pub use scene::{Scene, SphereParams};
