//! HTML serialization.
//!
//! Output is deterministic: attributes are written in stored order, every
//! element gets an explicit end tag, and no whitespace is added.

use quick_xml::escape::{escape, partial_escape};

use crate::document::Document;
use crate::error::DomResult;
use crate::node::{Attributes, NodeId, NodeKind};
use crate::vnode::VNode;

/// Append the HTML for `id` and its subtree to `out`.
pub(crate) fn write_node(doc: &Document, id: NodeId, out: &mut String) -> DomResult<()> {
    match doc.kind(id)? {
        NodeKind::Document => {
            for &child in doc.children(id)? {
                write_node(doc, child, out)?;
            }
        }
        NodeKind::Element(element) => {
            write_start(&element.tag, &element.attributes, out);
            for &child in doc.children(id)? {
                write_node(doc, child, out)?;
            }
            write_end(&element.tag, out);
        }
        NodeKind::Text(text) => write_text(text, out),
        NodeKind::Comment(text) => write_comment(text, out),
    }
    Ok(())
}

/// Append the HTML for a virtual subtree to `out`.
pub(crate) fn write_vnode(vnode: &VNode, out: &mut String) {
    match vnode {
        VNode::Element {
            tag,
            attributes,
            children,
        } => {
            write_start(tag, attributes, out);
            for child in children {
                write_vnode(child, out);
            }
            write_end(tag, out);
        }
        VNode::Text(text) => write_text(text, out),
        VNode::Comment(text) => write_comment(text, out),
    }
}

fn write_start(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for attr in attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape(attr.value.as_str()));
        out.push('"');
    }
    out.push('>');
}

fn write_end(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_text(text: &str, out: &mut String) {
    out.push_str(&partial_escape(text));
}

fn write_comment(text: &str, out: &mut String) {
    out.push_str("<!--");
    out.push_str(text);
    out.push_str("-->");
}

#[cfg(test)]
mod tests {
    use crate::{Document, DomError, VNode};

    #[test]
    fn test_escaping() {
        let mut doc = Document::new();
        let node = doc.instantiate(
            &VNode::element("span")
                .with_attr("title", "a \"quoted\" <b> & more")
                .with_child(VNode::text("1 < 2 & 3 > 2")),
        );

        assert_eq!(
            doc.outer_html(node).unwrap(),
            "<span title=\"a &quot;quoted&quot; &lt;b&gt; &amp; more\">1 &lt; 2 &amp; 3 &gt; 2</span>"
        );
    }

    #[test]
    fn test_comment_and_empty_element() {
        let mut doc = Document::new();
        let node = doc.instantiate(
            &VNode::element("div")
                .with_child(VNode::comment(" note "))
                .with_child(VNode::element("br")),
        );
        assert_eq!(doc.outer_html(node).unwrap(), "<div><!-- note --><br></br></div>");
        assert_eq!(doc.inner_html(node).unwrap(), "<!-- note --><br></br>");
    }

    #[test]
    fn test_attribute_order_is_kept() {
        let mut doc = Document::new();
        let node = doc.instantiate(
            &VNode::element("i")
                .with_attr("z", "1")
                .with_attr("a", "2")
                .with_attr("m", "3"),
        );
        assert_eq!(doc.outer_html(node).unwrap(), r#"<i z="1" a="2" m="3"></i>"#);
    }

    #[test]
    fn test_invalid_node() {
        let mut doc = Document::new();
        let node = doc.create_element("a");
        doc.destroy(node).unwrap();
        assert_eq!(doc.outer_html(node), Err(DomError::InvalidNodeId));
    }

    #[test]
    fn test_vnode_matches_instantiated_markup() {
        let tree = VNode::element("svg")
            .with_attr("class", "a & b")
            .with_child(VNode::element("path").with_attr("d", "M0 0"))
            .with_child(VNode::comment("c"))
            .with_child(VNode::text("x < y"));

        let mut doc = Document::new();
        let node = doc.instantiate(&tree);
        assert_eq!(tree.to_html(), doc.outer_html(node).unwrap());
        assert_eq!(
            tree.to_html(),
            r#"<svg class="a &amp; b"><path d="M0 0"></path><!--c-->x &lt; y</svg>"#
        );
    }
}
