//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

use horizon_glyph_icons::{DEFAULT_DESIGNATOR, IconOptions};

/// Id of the element components are mounted into unless configured otherwise.
pub const DEFAULT_HOST_ID: &str = "app";

/// Which part of the document the bootstrap substitution pass covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceScope {
    /// The whole document, including content outside the host.
    #[default]
    Document,
    /// Only the subtree rendered by the mounted component.
    Mounted,
}

/// Configuration for [`Bootstrap`](crate::Bootstrap).
///
/// The crate never reads configuration from files or the environment; the
/// embedding program builds this value (or deserializes it from its own
/// settings) and hands it over.
///
/// # Example
///
/// ```
/// use horizon_glyph::{BootstrapConfig, ReplaceScope};
///
/// let config = BootstrapConfig::default()
///     .with_host_id("root")
///     .with_scope(ReplaceScope::Mounted);
/// assert_eq!(config.host_id, "root");
/// assert_eq!(config.designator, "data-feather");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BootstrapConfig {
    /// Id of the host element.
    pub host_id: String,
    /// Extent of the substitution pass.
    pub scope: ReplaceScope,
    /// Overrides applied to every generated icon.
    pub icons: IconOptions,
    /// Attribute that marks icon placeholders.
    pub designator: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            host_id: DEFAULT_HOST_ID.to_string(),
            scope: ReplaceScope::default(),
            icons: IconOptions::default(),
            designator: DEFAULT_DESIGNATOR.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Set the host element id.
    pub fn with_host_id(mut self, host_id: impl Into<String>) -> Self {
        self.host_id = host_id.into();
        self
    }

    /// Set the substitution scope.
    pub fn with_scope(mut self, scope: ReplaceScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the icon overrides.
    pub fn with_icon_options(mut self, icons: IconOptions) -> Self {
        self.icons = icons;
        self
    }

    /// Set the placeholder designator attribute.
    pub fn with_designator(mut self, designator: impl Into<String>) -> Self {
        self.designator = designator.into();
        self
    }
}
