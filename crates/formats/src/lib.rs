pub mod manifest;
pub mod snapshot;

pub use manifest::*;
pub use snapshot::*;
