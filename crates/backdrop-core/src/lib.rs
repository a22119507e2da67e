pub mod camera;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod shading;
pub mod startup;
pub mod title;
pub mod uniforms;
pub mod viewport;

pub use camera::*;
pub use driver::*;
pub use easing::*;
pub use error::*;
pub use input::*;
pub use scene::*;
pub use startup::*;
pub use title::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
