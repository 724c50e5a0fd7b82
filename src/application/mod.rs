pub mod cli;
pub mod widget;
