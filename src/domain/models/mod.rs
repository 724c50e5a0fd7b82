mod cloud;
mod device;
mod event;
mod poll;
mod probe;

pub use cloud::*;
pub use device::*;
pub use event::*;
pub use poll::*;
pub use probe::*;
