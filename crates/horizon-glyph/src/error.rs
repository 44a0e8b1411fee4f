//! Error types for mounting.

use horizon_glyph_dom::DomError;

/// Errors that abort [`initialize`](crate::initialize).
///
/// None of these are transient; retrying with the same document fails the
/// same way.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No element with the host id exists in the document.
    #[error("Host element '#{host_id}' not found in the document")]
    HostNotFound { host_id: String },

    /// The host element is, or sits inside, a placeholder the substitution
    /// pass would replace, which would remove the host along with the mount.
    #[error("Host element '#{host_id}' is inside icon placeholder '{name}'")]
    HostInsidePlaceholder { host_id: String, name: String },

    /// The component's root could not be attached under the host.
    #[error("Failed to attach component: {0}")]
    Dom(#[from] DomError),

    /// The icon substitution pass failed.
    #[error("Icon substitution failed: {0}")]
    Icons(#[from] horizon_glyph_icons::Error),
}

impl MountError {
    /// Create a host-inside-placeholder error.
    pub fn host_inside_placeholder(host_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::HostInsidePlaceholder {
            host_id: host_id.into(),
            name: name.into(),
        }
    }

    /// Create a host-not-found error.
    pub fn host_not_found(host_id: impl Into<String>) -> Self {
        Self::HostNotFound {
            host_id: host_id.into(),
        }
    }
}

/// Result type alias for mounting.
pub type MountResult<T> = std::result::Result<T, MountError>;
