pub mod backdrop;
pub mod graticule;
pub mod hotspots;
pub mod sphere;
pub mod starfield;
pub mod streams;

pub use backdrop::*;
pub use graticule::*;
pub use hotspots::*;
pub use sphere::*;
pub use starfield::*;
pub use streams::*;
