//! The bootstrap sequencer.
//!
//! Bootstrapping runs three steps, in order, exactly once:
//!
//! 1. Look up the host element by id. If it is missing, fail with
//!    [`MountError::HostNotFound`] before touching the document. If the pass
//!    would replace the host or one of its ancestors, fail with
//!    [`MountError::HostInsidePlaceholder`], again without mutation.
//! 2. Render the component and append its root under the host.
//! 3. Run one icon substitution pass over the document (or only over the
//!    mounted subtree, see [`ReplaceScope`]).
//!
//! Later changes to the document are not watched; call
//! [`IconReplacer::replace_all`] again to process placeholders added after
//! bootstrap.

use horizon_glyph_dom::logging::targets;
use horizon_glyph_dom::{Document, DocumentTreeDebug, DomError, NodeId, TreeFormatOptions};
use horizon_glyph_icons::{IconRegistry, IconReplacer, Substitution};

use crate::component::Component;
use crate::config::{BootstrapConfig, ReplaceScope};
use crate::error::{MountError, MountResult};

/// A component attached to its host element.
#[derive(Debug)]
pub struct MountedComponent<C> {
    component: C,
    host: NodeId,
    root: NodeId,
    substitution: Substitution,
}

impl<C> MountedComponent<C> {
    /// The mounted component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutable access to the mounted component.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// The host element the component is attached to.
    pub fn host(&self) -> NodeId {
        self.host
    }

    /// The root of the component's subtree.
    ///
    /// If the rendered root was itself an icon placeholder, this is the
    /// `<svg>` that replaced it.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Report of the substitution pass run during bootstrap.
    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    /// Consume the mount and return the component.
    pub fn into_component(self) -> C {
        self.component
    }
}

/// Mounts components and runs the bootstrap substitution pass.
///
/// # Example
///
/// ```
/// use horizon_glyph::{Bootstrap, BootstrapConfig};
/// use horizon_glyph_dom::{Document, VNode};
/// use horizon_glyph_icons::IconRegistry;
///
/// let registry = IconRegistry::bundled()?;
/// let mut doc = Document::new();
/// let host = doc.instantiate(&VNode::element("div").with_attr("id", "app"));
/// doc.append_child(doc.root(), host)?;
///
/// let app = |doc: &mut Document| {
///     doc.instantiate(
///         &VNode::element("button").with_child(VNode::element("i").with_attr("data-feather", "play")),
///     )
/// };
///
/// let mounted = Bootstrap::new(&registry)
///     .with_config(BootstrapConfig::default())
///     .initialize(&mut doc, app)?;
/// assert_eq!(doc.parent(mounted.root())?, Some(host));
/// assert_eq!(mounted.substitution().replaced, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bootstrap<'r> {
    registry: &'r IconRegistry,
    config: BootstrapConfig,
}

impl<'r> Bootstrap<'r> {
    /// Create a sequencer with the default configuration.
    pub fn new(registry: &'r IconRegistry) -> Self {
        Self {
            registry,
            config: BootstrapConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// The substitution engine configured for this bootstrap.
    pub fn replacer(&self) -> IconReplacer<'r> {
        IconReplacer::new(self.registry)
            .with_options(self.config.icons.clone())
            .with_designator(self.config.designator.clone())
    }

    /// Name of the resolvable placeholder closest to `host`, counting `host` itself.
    fn enclosing_placeholder(&self, doc: &Document, host: NodeId) -> Option<String> {
        let designator = self.config.designator.as_str();
        let mut current = Some(host);
        while let Some(id) = current {
            if let Some(name) = doc.attribute(id, designator)
                && self.registry.contains(name)
            {
                return Some(name.to_string());
            }
            current = doc.parent(id).ok().flatten();
        }
        None
    }

    /// Mount `component` under the host element and inline its icons.
    ///
    /// On failure nothing stays attached to the document.
    #[tracing::instrument(
        skip(self, doc, component),
        target = "horizon_glyph::bootstrap",
        level = "debug",
        fields(host_id = %self.config.host_id)
    )]
    pub fn initialize<C: Component>(
        &self,
        doc: &mut Document,
        component: C,
    ) -> MountResult<MountedComponent<C>> {
        let host_id = self.config.host_id.as_str();
        let Some(host) = doc.get_element_by_id(host_id) else {
            tracing::error!(target: targets::BOOTSTRAP, host_id, "host element not found; nothing mounted");
            return Err(MountError::host_not_found(host_id));
        };
        if self.config.scope == ReplaceScope::Document
            && let Some(name) = self.enclosing_placeholder(doc, host)
        {
            tracing::error!(target: targets::BOOTSTRAP, host_id, name = %name, "host sits inside an icon placeholder; nothing mounted");
            return Err(MountError::host_inside_placeholder(host_id, name));
        }

        let root = component.render(doc);
        if let Err(err) = doc.append_child(host, root) {
            tracing::error!(target: targets::BOOTSTRAP, host_id, component = component.name(), %err, "failed to attach component");
            discard(doc, root, host);
            return Err(err.into());
        }
        let position = doc.children(host)?.len() - 1;
        tracing::debug!(target: targets::BOOTSTRAP, host_id, component = component.name(), ?root, "component attached");

        let scope = match self.config.scope {
            ReplaceScope::Document => doc.root(),
            ReplaceScope::Mounted => root,
        };
        let substitution = match self.replacer().replace_all(doc, scope) {
            Ok(substitution) => substitution,
            Err(err) => {
                tracing::error!(target: targets::BOOTSTRAP, host_id, %err, "icon substitution failed; unmounting");
                if let Some(&mounted) = doc.children(host)?.get(position) {
                    discard(doc, mounted, host);
                }
                return Err(err.into());
            }
        };

        // Replacement happens in place, so the root slot under the host is stable.
        let root = doc
            .children(host)?
            .get(position)
            .copied()
            .ok_or(DomError::NotAChild)?;

        if tracing::enabled!(target: targets::BOOTSTRAP, tracing::Level::DEBUG) {
            let tree = DocumentTreeDebug::with_options(TreeFormatOptions::minimal())
                .format_subtree(doc, host)?;
            tracing::debug!(target: targets::BOOTSTRAP, "mounted tree:\n{tree}");
        }
        tracing::info!(
            target: targets::BOOTSTRAP,
            host_id,
            replaced = substitution.replaced,
            unresolved = substitution.unresolved.len(),
            "component mounted"
        );

        Ok(MountedComponent {
            component,
            host,
            root,
            substitution,
        })
    }
}

/// Remove a partially mounted subtree.
///
/// Only a root that is detached or sits directly under `host` is destroyed.
/// A node the component handed back from elsewhere in the page, the document
/// root, and any subtree that holds the host are left alone.
fn discard(doc: &mut Document, root: NodeId, host: NodeId) {
    let owned = match doc.parent(root) {
        Ok(None) => root != doc.root() && !doc.descendants(root).any(|id| id == host),
        Ok(Some(parent)) => parent == host,
        Err(_) => false,
    };
    if !owned {
        return;
    }
    if let Err(err) = doc.destroy(root) {
        tracing::warn!(target: targets::BOOTSTRAP, ?root, %err, "failed to discard mounted subtree");
    }
}

/// Mount `component` under the element with id `host_id` using default settings.
///
/// Shorthand for [`Bootstrap::new`] with [`BootstrapConfig::with_host_id`].
pub fn initialize<C: Component>(
    doc: &mut Document,
    host_id: &str,
    component: C,
    registry: &IconRegistry,
) -> MountResult<MountedComponent<C>> {
    Bootstrap::new(registry)
        .with_config(BootstrapConfig::default().with_host_id(host_id))
        .initialize(doc, component)
}

#[cfg(test)]
mod tests {
    use horizon_glyph_dom::VNode;

    use super::*;

    /// `<body><div id="app"><p></p></div><aside></aside></body>`
    fn page() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let body = doc.instantiate(
            &VNode::element("body")
                .with_child(VNode::element("div").with_attr("id", "app").with_child(VNode::element("p")))
                .with_child(VNode::element("aside")),
        );
        doc.append_child(doc.root(), body).unwrap();
        let host = doc.children(body).unwrap()[0];
        let mounted = doc.children(host).unwrap()[0];
        let aside = doc.children(body).unwrap()[1];
        (doc, host, mounted, aside)
    }

    #[test]
    fn test_discard_destroys_detached_subtree() {
        let (mut doc, host, _, _) = page();
        let before = doc.node_count();
        let fresh = doc.instantiate(&VNode::element("ul").with_child(VNode::element("li")));

        discard(&mut doc, fresh, host);

        assert!(!doc.contains(fresh));
        assert_eq!(doc.node_count(), before);
    }

    #[test]
    fn test_discard_destroys_subtree_under_host() {
        let (mut doc, host, mounted, _) = page();

        discard(&mut doc, mounted, host);

        assert!(!doc.contains(mounted));
        assert!(doc.children(host).unwrap().is_empty());
    }

    #[test]
    fn test_discard_leaves_foreign_nodes() {
        let (mut doc, host, _, aside) = page();
        let root = doc.root();
        let before = doc.to_html();

        discard(&mut doc, aside, host);
        discard(&mut doc, host, host);
        discard(&mut doc, root, host);

        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_discard_keeps_detached_subtree_holding_host() {
        let (mut doc, host, _, _) = page();
        let wrapper = doc.create_element("section");
        doc.append_child(wrapper, host).unwrap();

        discard(&mut doc, wrapper, host);

        assert!(doc.contains(wrapper));
        assert_eq!(doc.parent(host).unwrap(), Some(wrapper));
    }

    #[test]
    fn test_discard_ignores_removed_node() {
        let (mut doc, host, _, _) = page();
        let gone = doc.create_element("span");
        doc.destroy(gone).unwrap();
        let count = doc.node_count();

        discard(&mut doc, gone, host);

        assert_eq!(doc.node_count(), count);
    }

    #[test]
    fn test_enclosing_placeholder() {
        let registry = IconRegistry::bundled().unwrap();
        let mut doc = Document::new();
        let outer = doc.instantiate(
            &VNode::element("i")
                .with_attr("data-feather", "home")
                .with_child(VNode::element("div").with_attr("id", "app")),
        );
        doc.append_child(doc.root(), outer).unwrap();
        let host = doc.children(outer).unwrap()[0];
        let bootstrap = Bootstrap::new(&registry);

        assert_eq!(bootstrap.enclosing_placeholder(&doc, host).as_deref(), Some("home"));

        doc.set_attribute(outer, "data-feather", "unknown-name").unwrap();
        assert_eq!(bootstrap.enclosing_placeholder(&doc, host), None);
    }
}
