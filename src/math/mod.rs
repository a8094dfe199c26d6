pub mod color;

mod misc;
mod ray;
mod vec;

pub use color::*;
pub use misc::*;
pub use ray::*;
pub use vec::*;
