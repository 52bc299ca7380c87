pub mod angle;
pub mod vec;

pub use angle::*;
pub use vec::*;
