//! Depth-first traversal.

use crate::document::Document;
use crate::node::NodeId;

/// Lazy depth-first pre-order iterator over a subtree.
///
/// The subtree root is yielded first, then each child subtree in order.
/// The iterator borrows the document, so the tree cannot change while it is
/// being walked. Calling [`Document::descendants`] again starts a fresh walk.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(doc: &'a Document, scope: NodeId) -> Self {
        let stack = if doc.contains(scope) {
            vec![scope]
        } else {
            Vec::new()
        };
        Self { doc, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Ok(children) = self.doc.children(id) {
            self.stack.extend(children.iter().rev().copied());
        }
        Some(id)
    }
}

/// Lazy depth-first iterator over the element nodes of a subtree.
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    inner: Descendants<'a>,
}

impl<'a> Elements<'a> {
    pub(crate) fn new(inner: Descendants<'a>) -> Self {
        Self { inner }
    }
}

impl Iterator for Elements<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let doc = self.inner.doc;
        self.inner.by_ref().find(|&id| doc.is_element(id))
    }
}
