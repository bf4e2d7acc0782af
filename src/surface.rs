//! Presentation surface seam.
//!
//! The selection controller drives two anchor regions: an avatar pane
//! addressed by a class string (`cat-` + id) and an editable name field.
//! Keeping them behind a trait lets the state machine be tested without a
//! terminal.

/// The anchor regions the widget drives.
pub trait Surface {
    /// Update the avatar pane's class identifier.
    fn set_avatar_class(&mut self, class: &str);

    /// Replace the name field contents.
    fn set_name(&mut self, name: &str);

    /// Current contents of the name field.
    fn name(&self) -> &str;
}

/// Surface backing the terminal UI.
///
/// The renderer reads these fields every frame; rename-mode keystrokes edit
/// the name field in place through [`TuiSurface::field_mut`].
#[derive(Debug, Default)]
pub struct TuiSurface {
    avatar_class: String,
    name_field: String,
}

impl TuiSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avatar_class(&self) -> &str {
        &self.avatar_class
    }

    pub fn field_mut(&mut self) -> &mut String {
        &mut self.name_field
    }
}

impl Surface for TuiSurface {
    fn set_avatar_class(&mut self, class: &str) {
        self.avatar_class = class.to_string();
    }

    fn set_name(&mut self, name: &str) {
        self.name_field = name.to_string();
    }

    fn name(&self) -> &str {
        &self.name_field
    }
}
