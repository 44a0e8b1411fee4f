//! Components: anything that can render a subtree into a document.

use horizon_glyph_dom::{Document, NodeId};

/// A renderable piece of UI.
///
/// `render` builds a detached subtree in `doc` and returns its root. The
/// bootstrap sequencer attaches that root under the host element.
///
/// Closures of type `Fn(&mut Document) -> NodeId` are components too:
///
/// ```
/// use horizon_glyph::Component;
/// use horizon_glyph_dom::{Document, VNode};
///
/// let hello = |doc: &mut Document| doc.instantiate(&VNode::element("p").with_child(VNode::text("hi")));
/// let mut doc = Document::new();
/// let root = hello.render(&mut doc);
/// assert_eq!(doc.outer_html(root).unwrap(), "<p>hi</p>");
/// ```
pub trait Component {
    /// Build the component's subtree and return its root node.
    fn render(&self, doc: &mut Document) -> NodeId;

    /// Name used in log output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Component for F
where
    F: Fn(&mut Document) -> NodeId,
{
    fn render(&self, doc: &mut Document) -> NodeId {
        self(doc)
    }
}
