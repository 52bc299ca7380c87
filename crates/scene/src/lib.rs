pub mod hotspot;
pub mod orbit;
pub mod particles;
pub mod picking;
pub mod report;

pub use hotspot::*;
pub use orbit::*;
pub use particles::*;
pub use picking::*;
pub use report::*;
