//! Error types for the icon system.

use horizon_glyph_dom::DomError;

/// Result type alias for icon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading icons or substituting placeholders.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The registry resource is not valid JSON of the expected shape.
    #[error("Invalid icon registry data: {0}")]
    Registry(#[from] serde_json::Error),

    /// An icon's markup template could not be parsed.
    #[error("Invalid markup for icon '{name}': {message}")]
    Markup { name: String, message: String },

    /// Two icons were registered under the same name.
    #[error("Icon '{0}' is already registered")]
    DuplicateIcon(String),

    /// The icon name is empty.
    #[error("Icon names must not be empty")]
    EmptyName,

    /// The document rejected an edit.
    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}

impl Error {
    /// Create a markup error.
    pub fn markup(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Markup {
            name: name.into(),
            message: message.into(),
        }
    }
}
