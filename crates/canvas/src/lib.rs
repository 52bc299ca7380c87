pub mod command;
pub mod cursor;
pub mod raster;
pub mod surface;

pub use command::*;
pub use cursor::*;
pub use raster::*;
pub use surface::*;
