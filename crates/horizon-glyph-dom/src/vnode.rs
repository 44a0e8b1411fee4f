//! Detached node descriptions.
//!
//! A [`VNode`] describes a subtree without belonging to any document. It is
//! turned into real nodes with [`Document::instantiate`](crate::Document::instantiate).

use crate::node::Attributes;

/// A virtual node: an element, text or comment that is not yet part of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// An element with ordered attributes and children.
    Element {
        /// Tag name.
        tag: String,
        /// Ordered attributes.
        attributes: Attributes,
        /// Child nodes.
        children: Vec<VNode>,
    },
    /// A text node.
    Text(String),
    /// A comment node.
    Comment(String),
}

impl VNode {
    /// Create an element with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a comment node.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Set an attribute. Has no effect on text and comment nodes.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attributes, .. } = &mut self {
            attributes.set(name, value);
        }
        self
    }

    /// Append a child. Has no effect on text and comment nodes.
    pub fn with_child(mut self, child: VNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Append several children.
    pub fn with_children(mut self, new_children: impl IntoIterator<Item = VNode>) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.extend(new_children);
        }
        self
    }

    /// Serialize this subtree to HTML, exactly as
    /// [`Document::outer_html`](crate::Document::outer_html) would after instantiating it.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        crate::serialize::write_vnode(self, &mut out);
        out
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Element { children, .. } => {
                1 + children.iter().map(VNode::node_count).sum::<usize>()
            }
            Self::Text(_) | Self::Comment(_) => 1,
        }
    }
}
