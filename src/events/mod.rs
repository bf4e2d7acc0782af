//! Event handling: keyboard and mouse events are translated into Actions
//! which the App applies to its state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
