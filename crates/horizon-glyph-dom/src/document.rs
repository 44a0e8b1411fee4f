//! The document arena.
//!
//! A [`Document`] owns every node it creates. Nodes are created detached and
//! become part of the tree once they are appended or inserted under a node
//! that is itself attached to the document root.
//!
//! Removal follows the cascade rule: destroying a node destroys its whole
//! subtree, and every [`NodeId`] in that subtree becomes invalid.

use slotmap::SlotMap;

use crate::error::{DomError, DomResult};
use crate::logging::targets;
use crate::node::{ElementData, NodeId, NodeKind};
use crate::traverse::{Descendants, Elements};
use crate::vnode::VNode;

/// Internal data stored in the arena for each node.
#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An in-memory document tree.
///
/// Uses arena-based storage via SlotMap for stable node IDs and cheap
/// parent/child bookkeeping.
#[derive(Debug)]
pub struct Document {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl Document {
    /// Create an empty document containing only the root node.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::new(NodeKind::Document));
        Self { nodes, root }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes in the arena, attached or not, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether a node exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    // ========================================================================
    // Node creation
    // ========================================================================

    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.insert(NodeData::new(kind));
        tracing::trace!(target: targets::DOM, ?id, "created node");
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Element(ElementData::new(tag)))
    }

    /// Create a detached element from prepared element data.
    pub fn create_element_with(&mut self, data: ElementData) -> NodeId {
        self.insert(NodeKind::Element(data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeKind::Comment(text.into()))
    }

    /// Create a detached subtree from a virtual node and return its root.
    pub fn instantiate(&mut self, vnode: &VNode) -> NodeId {
        match vnode {
            VNode::Element {
                tag,
                attributes,
                children,
            } => {
                let id = self.create_element_with(ElementData {
                    tag: tag.clone(),
                    attributes: attributes.clone(),
                });
                for child in children {
                    let child_id = self.instantiate(child);
                    self.link(id, None, child_id);
                }
                id
            }
            VNode::Text(text) => self.create_text(text.clone()),
            VNode::Comment(text) => self.create_comment(text.clone()),
        }
    }

    // ========================================================================
    // Node access
    // ========================================================================

    fn data(&self, id: NodeId) -> DomResult<&NodeData> {
        self.nodes.get(id).ok_or(DomError::InvalidNodeId)
    }

    /// Get the payload of a node.
    pub fn kind(&self, id: NodeId) -> DomResult<&NodeKind> {
        self.data(id).map(|d| &d.kind)
    }

    /// Get the element data of a node.
    pub fn element(&self, id: NodeId) -> DomResult<&ElementData> {
        self.kind(id)?.as_element().ok_or(DomError::NotAnElement)
    }

    /// Get mutable element data of a node.
    pub fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.nodes
            .get_mut(id)
            .ok_or(DomError::InvalidNodeId)?
            .kind
            .as_element_mut()
            .ok_or(DomError::NotAnElement)
    }

    /// Check whether a node is an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|d| matches!(d.kind, NodeKind::Element(_)))
    }

    /// Get the parent of a node.
    pub fn parent(&self, id: NodeId) -> DomResult<Option<NodeId>> {
        self.data(id).map(|d| d.parent)
    }

    /// Get the children of a node.
    pub fn children(&self, id: NodeId) -> DomResult<&[NodeId]> {
        self.data(id).map(|d| d.children.as_slice())
    }

    /// Position of a node among its parent's children.
    ///
    /// Returns `None` for detached nodes and the root.
    pub fn index_in_parent(&self, id: NodeId) -> DomResult<Option<usize>> {
        let Some(parent) = self.parent(id)? else {
            return Ok(None);
        };
        Ok(self.children(parent)?.iter().position(|&c| c == id))
    }

    /// Check whether a node is connected to the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == self.root {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    /// Check if `potential_ancestor` is `id` or one of its ancestors.
    fn is_ancestor_or_self(&self, potential_ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.nodes.get(current_id).and_then(|d| d.parent);
        }
        false
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Get an attribute of an element.
    ///
    /// Returns `None` for missing attributes and for non-element nodes.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.attributes.get(name)
    }

    /// Check whether an element carries an attribute.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id)
            .is_ok_and(|element| element.attributes.contains(name))
    }

    /// Set an attribute on an element.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> DomResult<()> {
        self.element_mut(id)?.attributes.set(name, value);
        Ok(())
    }

    /// Remove an attribute from an element, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(id)?.attributes.remove(name))
    }

    /// Find the first attached element, in document order, whose `id` matches.
    pub fn get_element_by_id(&self, element_id: &str) -> Option<NodeId> {
        self.elements(self.root)
            .find(|&id| self.attribute(id, "id") == Some(element_id))
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Lazily iterate over `scope` and its descendants in depth-first pre-order.
    ///
    /// An invalid `scope` yields an empty iterator.
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants::new(self, scope)
    }

    /// Lazily iterate over the elements within `scope` (including `scope`).
    pub fn elements(&self, scope: NodeId) -> Elements<'_> {
        Elements::new(self.descendants(scope))
    }

    // ========================================================================
    // Tree editing
    // ========================================================================

    /// Attach `child` under `parent` at `index` (or at the end) without validation.
    fn link(&mut self, parent: NodeId, index: Option<usize>, child: NodeId) {
        if let Some(data) = self.nodes.get_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            match index {
                Some(index) => parent_data.children.insert(index, child),
                None => parent_data.children.push(child),
            }
        }
    }

    /// Remove `id` from its parent's child list, leaving the subtree intact.
    fn unlink(&mut self, id: NodeId) {
        let old_parent = self.nodes.get_mut(id).and_then(|d| d.parent.take());
        if let Some(parent_id) = old_parent
            && let Some(parent_data) = self.nodes.get_mut(parent_id)
        {
            parent_data.children.retain(|&child| child != id);
        }
    }

    /// Validate that `child` may be placed under `parent`.
    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(DomError::InvalidNodeId);
        }
        if child == self.root {
            return Err(DomError::RootImmutable);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DomError::CircularParentage);
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is moved.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.check_insert(parent, child)?;
        self.unlink(child);
        self.link(parent, None, child);
        tracing::trace!(target: targets::DOM, ?parent, ?child, "appended child");
        Ok(())
    }

    /// Insert `child` under `parent` so that it ends up at position `index`.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> DomResult<()> {
        self.check_insert(parent, child)?;
        // Length of the child list once `child` is out of it.
        let mut len = self.children(parent)?.len();
        if self.parent(child)? == Some(parent) {
            len -= 1;
        }
        if index > len {
            return Err(DomError::IndexOutOfBounds { index, len });
        }
        self.unlink(child);
        self.link(parent, Some(index), child);
        tracing::trace!(target: targets::DOM, ?parent, ?child, index, "inserted child");
        Ok(())
    }

    /// Detach a node (and its subtree) from its parent without destroying it.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        if id == self.root {
            return Err(DomError::RootImmutable);
        }
        if !self.nodes.contains_key(id) {
            return Err(DomError::InvalidNodeId);
        }
        self.unlink(id);
        Ok(())
    }

    /// Put `new` in the place of `old` within `old`'s parent.
    ///
    /// `new` takes exactly the child position `old` occupied, so sibling order
    /// is preserved. `old` is left detached but alive; use
    /// [`replace_node`](Self::replace_node) to also destroy it.
    pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> DomResult<()> {
        if old == self.root {
            return Err(DomError::RootImmutable);
        }
        let parent = self.parent(old)?.ok_or(DomError::NotAChild)?;
        self.check_insert(parent, new)?;
        if self.is_ancestor_or_self(new, old) {
            return Err(DomError::CircularParentage);
        }

        // `new` may currently sit among the same siblings, so detach it before
        // looking up the slot.
        self.unlink(new);
        let index = self
            .index_in_parent(old)?
            .ok_or(DomError::NotAChild)?;
        if let Some(parent_data) = self.nodes.get_mut(parent) {
            parent_data.children[index] = new;
        }
        if let Some(data) = self.nodes.get_mut(new) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.nodes.get_mut(old) {
            data.parent = None;
        }

        tracing::trace!(target: targets::DOM, ?old, ?new, index, "replaced child");
        Ok(())
    }

    /// Replace `old` with `new` and destroy `old` together with its subtree.
    pub fn replace_node(&mut self, old: NodeId, new: NodeId) -> DomResult<()> {
        self.replace_child(old, new)?;
        self.destroy(old)
    }

    /// Remove a node and all its descendants from the document.
    #[tracing::instrument(skip(self), target = "horizon_glyph_dom::document", level = "trace")]
    pub fn destroy(&mut self, id: NodeId) -> DomResult<()> {
        if id == self.root {
            return Err(DomError::RootImmutable);
        }
        if !self.nodes.contains_key(id) {
            return Err(DomError::InvalidNodeId);
        }
        self.unlink(id);

        let doomed: Vec<NodeId> = self.descendants(id).collect();
        tracing::trace!(target: targets::DOM, ?id, count = doomed.len(), "destroying subtree");
        for node in doomed {
            self.nodes.remove(node);
        }
        Ok(())
    }

    // ========================================================================
    // Content
    // ========================================================================

    /// Concatenated text of all text nodes within `id`, in document order.
    pub fn text_content(&self, id: NodeId) -> DomResult<String> {
        self.data(id)?;
        let mut text = String::new();
        for node in self.descendants(id) {
            if let Ok(NodeKind::Text(t)) = self.kind(node) {
                text.push_str(t);
            }
        }
        Ok(text)
    }

    /// Serialize a node and its subtree to HTML.
    ///
    /// The document root serializes as the concatenation of its children.
    pub fn outer_html(&self, id: NodeId) -> DomResult<String> {
        let mut out = String::new();
        crate::serialize::write_node(self, id, &mut out)?;
        Ok(out)
    }

    /// Serialize only the children of a node to HTML.
    pub fn inner_html(&self, id: NodeId) -> DomResult<String> {
        let mut out = String::new();
        for &child in self.children(id)? {
            crate::serialize::write_node(self, child, &mut out)?;
        }
        Ok(out)
    }

    /// Serialize the whole document.
    pub fn to_html(&self) -> String {
        // The root always exists, so serialization cannot fail.
        self.inner_html(self.root).unwrap_or_default()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
