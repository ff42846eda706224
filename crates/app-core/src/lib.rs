pub mod constants;
pub mod pan;
pub mod scene;
pub mod spring;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use pan::*;
pub use scene::*;
pub use spring::*;
