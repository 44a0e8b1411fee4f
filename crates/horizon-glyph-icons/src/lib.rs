//! Icon registry and placeholder substitution for Horizon Glyph.
//!
//! This crate turns placeholder elements such as
//! `<i data-feather="search"></i>` into inline SVG icons:
//!
//! - **Registry**: An immutable name → icon mapping, loaded from the bundled
//!   icon set or built programmatically
//! - **Templates**: Icon markup is parsed and validated once, at registration
//! - **Overrides**: Size, stroke width and extra classes for generated icons
//! - **Substitution**: A single depth-first pass that replaces placeholders in
//!   place, keeping their attributes and sibling position
//!
//! # Example
//!
//! ```
//! use horizon_glyph_dom::{Document, VNode};
//! use horizon_glyph_icons::prelude::*;
//!
//! let registry = IconRegistry::bundled()?;
//! let replacer = IconReplacer::new(&registry)
//!     .with_options(IconOptions::new().with_size(16.0));
//!
//! let mut doc = Document::new();
//! let toolbar = doc.instantiate(
//!     &VNode::element("div")
//!         .with_child(VNode::element("i").with_attr("data-feather", "home"))
//!         .with_child(VNode::element("i").with_attr("data-feather", "not-an-icon")),
//! );
//! doc.append_child(doc.root(), toolbar)?;
//!
//! let report = replacer.replace_document(&mut doc)?;
//! assert_eq!(report.replaced, 1);
//! assert_eq!(report.unresolved[0].name, "not-an-icon");
//! # Ok::<(), horizon_glyph_icons::Error>(())
//! ```

mod error;
mod icon;
mod options;
mod registry;
mod replace;
mod template;

pub use error::{Error, Result};
pub use icon::{BASE_CLASS, Icon, IconName};
pub use options::IconOptions;
pub use registry::{BUNDLED_ICONS, IconRegistry, IconRegistryBuilder};
pub use replace::{
    DEFAULT_DESIGNATOR, IconReplacer, Placeholder, Placeholders, Substitution,
    UnresolvedIconName,
};
pub use template::SvgTemplate;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::icon::{Icon, IconName};
    pub use crate::options::IconOptions;
    pub use crate::registry::IconRegistry;
    pub use crate::replace::{IconReplacer, Substitution, UnresolvedIconName};
}
