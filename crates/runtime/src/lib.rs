pub mod event_bus;
pub mod frame;
pub mod metrics;
pub mod ticker;

pub use event_bus::*;
pub use frame::*;
pub use metrics::*;
pub use ticker::*;
