//! Placeholder substitution.
//!
//! The [`IconReplacer`] scans a document subtree for elements that carry the
//! designator attribute (`data-feather` by default) and replaces each one whose
//! name is registered with a generated `<svg>` element:
//!
//! ```text
//! <i data-feather="home" id="nav-home" class="big"></i>
//!                      │
//!                      ▼
//! <svg xmlns="..." width="24" ... class="feather feather-home big" id="nav-home">
//!   <path d="..."></path><polyline points="..."></polyline>
//! </svg>
//! ```
//!
//! Placeholders with unknown names are left exactly as they were and reported
//! in the returned [`Substitution`]. A generated `<svg>` never carries the
//! designator, so running the pass again over the same subtree is a no-op.

use std::fmt;

use horizon_glyph_dom::logging::targets;
use horizon_glyph_dom::{Document, DomError, Elements, NodeId};

use crate::error::Result;
use crate::icon::Icon;
use crate::options::IconOptions;
use crate::registry::IconRegistry;

/// Attribute that marks an element as an icon placeholder.
pub const DEFAULT_DESIGNATOR: &str = "data-feather";

/// A placeholder whose name is not in the registry.
///
/// This is a diagnostic, not an error: the element is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedIconName {
    /// The placeholder element.
    pub node: NodeId,
    /// The designator value that failed to resolve.
    pub name: String,
}

impl fmt::Display for UnresolvedIconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid icon", self.name)
    }
}

/// Outcome of one substitution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    /// Number of placeholders replaced with icons.
    pub replaced: usize,
    /// Placeholders left in place because their name is unknown, in document order.
    pub unresolved: Vec<UnresolvedIconName>,
}

impl Substitution {
    /// Returns true if every placeholder found was replaced.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// A candidate element found during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'d> {
    /// The placeholder element.
    pub node: NodeId,
    /// The icon name it asks for.
    pub name: &'d str,
}

/// Lazy depth-first iterator over the placeholders in a subtree.
///
/// Created by [`IconReplacer::placeholders`].
#[derive(Debug, Clone)]
pub struct Placeholders<'d> {
    doc: &'d Document,
    elements: Elements<'d>,
    designator: &'d str,
}

impl<'d> Iterator for Placeholders<'d> {
    type Item = Placeholder<'d>;

    fn next(&mut self) -> Option<Placeholder<'d>> {
        let doc = self.doc;
        let designator = self.designator;
        self.elements.by_ref().find_map(|node| {
            doc.attribute(node, designator)
                .map(|name| Placeholder { node, name })
        })
    }
}

/// Replaces icon placeholders with inline SVG.
///
/// The replacer borrows an [`IconRegistry`] and holds no state between
/// passes; each call to [`replace_all`](Self::replace_all) scans from scratch.
///
/// # Example
///
/// ```
/// use horizon_glyph_dom::{Document, VNode};
/// use horizon_glyph_icons::{IconRegistry, IconReplacer};
///
/// let registry = IconRegistry::bundled().unwrap();
/// let mut doc = Document::new();
/// let nav = doc.instantiate(
///     &VNode::element("nav").with_child(VNode::element("i").with_attr("data-feather", "home")),
/// );
/// doc.append_child(doc.root(), nav).unwrap();
///
/// let report = IconReplacer::new(&registry).replace_document(&mut doc).unwrap();
/// assert_eq!(report.replaced, 1);
/// assert!(doc.to_html().starts_with("<nav><svg "));
/// ```
#[derive(Debug, Clone)]
pub struct IconReplacer<'r> {
    registry: &'r IconRegistry,
    options: IconOptions,
    designator: String,
}

impl<'r> IconReplacer<'r> {
    /// Create a replacer with default options and the `data-feather` designator.
    pub fn new(registry: &'r IconRegistry) -> Self {
        Self {
            registry,
            options: IconOptions::default(),
            designator: DEFAULT_DESIGNATOR.to_string(),
        }
    }

    /// Set the caller overrides applied to every generated icon.
    pub fn with_options(mut self, options: IconOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a different designator attribute.
    pub fn with_designator(mut self, designator: impl Into<String>) -> Self {
        self.designator = designator.into();
        self
    }

    /// The registry icons are resolved against.
    pub fn registry(&self) -> &'r IconRegistry {
        self.registry
    }

    /// The caller overrides.
    pub fn options(&self) -> &IconOptions {
        &self.options
    }

    /// The designator attribute name.
    pub fn designator(&self) -> &str {
        &self.designator
    }

    /// Lazily list the placeholders within `scope` (including `scope`) in document order.
    pub fn placeholders<'d>(&'d self, doc: &'d Document, scope: NodeId) -> Placeholders<'d> {
        Placeholders {
            doc,
            elements: doc.elements(scope),
            designator: &self.designator,
        }
    }

    /// Replace every resolvable placeholder within `scope`.
    ///
    /// Candidates are collected in one depth-first scan before anything is
    /// replaced. A candidate that disappeared with an earlier replacement
    /// (because it was nested inside another placeholder) is skipped. A
    /// placeholder without a parent cannot be swapped out and is left alone.
    ///
    /// Fails only if `scope` is not a live node.
    #[tracing::instrument(
        skip(self, doc),
        target = "horizon_glyph_icons",
        level = "debug",
        fields(designator = %self.designator)
    )]
    pub fn replace_all(&self, doc: &mut Document, scope: NodeId) -> Result<Substitution> {
        if !doc.contains(scope) {
            return Err(DomError::InvalidNodeId.into());
        }

        let candidates: Vec<(NodeId, String)> = self
            .placeholders(doc, scope)
            .map(|p| (p.node, p.name.to_string()))
            .collect();

        let mut report = Substitution::default();
        for (node, name) in candidates {
            if !doc.contains(node) {
                tracing::trace!(target: targets::ICONS, ?node, %name, "placeholder removed with an enclosing icon");
                continue;
            }

            let Some(icon) = self.registry.get(&name) else {
                let unresolved = UnresolvedIconName { node, name };
                tracing::warn!(target: targets::ICONS, node = ?unresolved.node, "{unresolved}");
                report.unresolved.push(unresolved);
                continue;
            };

            if doc.parent(node)?.is_none() {
                tracing::debug!(target: targets::ICONS, ?node, %name, "placeholder has no parent; left in place");
                continue;
            }

            self.replace_element(doc, node, icon)?;
            report.replaced += 1;
        }

        tracing::debug!(
            target: targets::ICONS,
            replaced = report.replaced,
            unresolved = report.unresolved.len(),
            "substitution pass complete"
        );
        Ok(report)
    }

    /// Replace every resolvable placeholder in the whole document.
    pub fn replace_document(&self, doc: &mut Document) -> Result<Substitution> {
        let root = doc.root();
        self.replace_all(doc, root)
    }

    /// Swap one placeholder for its generated `<svg>` and return the new node.
    fn replace_element(&self, doc: &mut Document, node: NodeId, icon: &Icon) -> Result<NodeId> {
        let attributes = {
            let element = doc.element(node)?;
            let carried = element
                .attributes
                .iter()
                .filter(|attr| attr.name != self.designator);
            icon.merged_attributes(&self.options, carried)
        };

        let svg = doc.instantiate(&icon.to_vnode(attributes));
        doc.replace_node(node, svg)?;
        tracing::trace!(target: targets::ICONS, ?node, ?svg, name = icon.name(), "replaced placeholder");
        Ok(svg)
    }
}
