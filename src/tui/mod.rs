//! Terminal UI: rendering for the avatar pane, name field, and help popup.

pub mod art;
pub mod components;
pub mod theme;
pub mod ui;
