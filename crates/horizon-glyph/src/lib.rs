//! Horizon Glyph - mount a component tree and inline its icons.
//!
//! This is the umbrella crate. It provides the bootstrap sequencer and
//! re-exports the document model ([`dom`]) and the icon engine ([`icons`]).
//!
//! Bootstrapping finds the host element (id `app` by default), attaches the
//! component's rendered subtree under it, then replaces every
//! `data-feather` placeholder with the matching inline SVG.
//!
//! # Example
//!
//! ```
//! use horizon_glyph::prelude::*;
//!
//! let registry = IconRegistry::bundled()?;
//!
//! let mut doc = Document::new();
//! let host = doc.instantiate(&VNode::element("div").with_attr("id", "app"));
//! doc.append_child(doc.root(), host)?;
//!
//! let app = |doc: &mut Document| {
//!     doc.instantiate(
//!         &VNode::element("nav")
//!             .with_child(VNode::element("i").with_attr("data-feather", "home"))
//!             .with_child(VNode::element("i").with_attr("data-feather", "not-an-icon")),
//!     )
//! };
//!
//! let mounted = horizon_glyph::initialize(&mut doc, DEFAULT_HOST_ID, app, &registry)?;
//! assert_eq!(mounted.substitution().replaced, 1);
//! assert_eq!(mounted.substitution().unresolved.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bootstrap;
mod component;
mod config;
mod error;

pub use bootstrap::{Bootstrap, MountedComponent, initialize};
pub use component::Component;
pub use config::{BootstrapConfig, DEFAULT_HOST_ID, ReplaceScope};
pub use error::{MountError, MountResult};

/// Document model.
pub mod dom {
    pub use horizon_glyph_dom::*;
}

/// Icon registry and substitution engine.
pub mod icons {
    pub use horizon_glyph_icons::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::bootstrap::{Bootstrap, MountedComponent};
    pub use crate::component::Component;
    pub use crate::config::{BootstrapConfig, DEFAULT_HOST_ID, ReplaceScope};
    pub use crate::error::{MountError, MountResult};
    pub use horizon_glyph_dom::{Document, NodeId, VNode};
    pub use horizon_glyph_icons::prelude::*;
}
