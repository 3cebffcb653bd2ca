pub mod event_bus;
pub mod feedback;
pub mod frame;

pub use event_bus::*;
pub use feedback::*;
pub use frame::*;
