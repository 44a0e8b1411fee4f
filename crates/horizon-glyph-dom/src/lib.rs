//! In-memory document model for Horizon Glyph.
//!
//! This crate provides the document tree that the bootstrap sequencer mounts
//! into and that the icon substitution engine rewrites:
//!
//! - **Arena storage**: Nodes live in a [`Document`] and are addressed by
//!   stable [`NodeId`] handles
//! - **Ordered attributes**: Element attributes keep their insertion order so
//!   that serialization is deterministic
//! - **Tree editing**: Append, insert, detach, in-place replacement and
//!   cascading removal
//! - **Traversal**: Lazy depth-first iteration over any subtree
//! - **Serialization**: HTML output used for debugging and equality checks
//! - **Virtual nodes**: [`VNode`] trees that are instantiated into a document
//!   in one step
//!
//! # Example
//!
//! ```
//! use horizon_glyph_dom::{Document, VNode};
//!
//! let mut doc = Document::new();
//! let host = doc.create_element("div");
//! doc.set_attribute(host, "id", "app").unwrap();
//! doc.append_child(doc.root(), host).unwrap();
//!
//! let tree = VNode::element("span")
//!     .with_attr("class", "greeting")
//!     .with_child(VNode::text("Hello"));
//! let span = doc.instantiate(&tree);
//! doc.append_child(host, span).unwrap();
//!
//! assert_eq!(doc.get_element_by_id("app"), Some(host));
//! assert_eq!(
//!     doc.outer_html(host).unwrap(),
//!     r#"<div id="app"><span class="greeting">Hello</span></div>"#
//! );
//! ```

mod document;
mod error;
pub mod logging;
mod node;
mod serialize;
mod traverse;
mod vnode;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use logging::{DocumentTreeDebug, TreeFormatOptions, TreeStyle};
pub use node::{Attribute, Attributes, ElementData, NodeId, NodeKind};
pub use traverse::{Descendants, Elements};
pub use vnode::VNode;
