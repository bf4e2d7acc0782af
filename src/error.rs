//! Domain error types for catpick
//!
//! Only widget setup can fail: every other operation (persistence access,
//! malformed stored data, host capability failures) degrades in place and
//! is reported through the log instead.

use thiserror::Error;

/// Fatal errors raised while constructing the widget.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("No sprite registered for built-in cat '{0}'")]
    MissingSprite(String),

    #[error("Default cat '{0}' is not part of the built-in catalog")]
    MissingDefault(String),
}

/// Result type alias for SetupError
pub type SetupResult<T> = std::result::Result<T, SetupError>;
