pub mod quality;
pub mod renderer;

pub use quality::*;
pub use renderer::*;
