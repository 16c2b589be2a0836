pub mod asset;
pub mod camera;
pub mod config;
pub mod constants;
pub mod ease;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod texture;
pub mod timeline;

pub use asset::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use ease::*;
pub use environment::*;
pub use error::*;
pub use geometry::*;
pub use scene::*;
pub use scroll::*;
pub use state::*;
pub use texture::*;
pub use timeline::*;

// Shaders bundled as string constants
pub static CUBE_WGSL: &str = include_str!("../shaders/cube.wgsl");
