mod app_state;
pub mod html;
mod poller;
mod translations;

pub use app_state::*;
pub use poller::*;
pub use translations::*;
