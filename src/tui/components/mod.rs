//! UI components for the TUI.
//!
//! - `avatar` - The avatar pane with the current cat's sprite and bounce
//! - `name_field` - The editable display-name field
//! - `help_popup` - Help overlay with keybindings

mod avatar;
mod help_popup;
mod name_field;

pub use avatar::render_avatar;
pub use help_popup::render_help_popup;
pub use name_field::render_name_field;
