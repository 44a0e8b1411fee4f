//! Integration tests for document editing and serialization.

use horizon_glyph_dom::{Document, DomError, NodeKind, VNode};

fn page() -> Document {
    let mut doc = Document::new();
    let body = doc.instantiate(
        &VNode::element("body")
            .with_child(VNode::element("header").with_attr("id", "top"))
            .with_child(VNode::element("main").with_attr("id", "app"))
            .with_child(VNode::element("footer")),
    );
    doc.append_child(doc.root(), body).unwrap();
    doc
}

#[test]
fn test_mount_style_insertion() {
    let mut doc = page();
    let host = doc.get_element_by_id("app").unwrap();
    let widget = doc.instantiate(&VNode::element("section").with_child(VNode::text("hi")));

    assert!(!doc.is_attached(widget));
    doc.append_child(host, widget).unwrap();
    assert!(doc.is_attached(widget));
    assert_eq!(doc.parent(widget).unwrap(), Some(host));

    assert_eq!(
        doc.to_html(),
        r#"<body><header id="top"></header><main id="app"><section>hi</section></main><footer></footer></body>"#
    );
}

#[test]
fn test_replace_preserves_siblings() {
    let mut doc = page();
    let header = doc.get_element_by_id("top").unwrap();
    let body = doc.parent(header).unwrap().unwrap();
    let before: Vec<_> = doc.children(body).unwrap().to_vec();

    let nav = doc.create_element("nav");
    doc.replace_node(header, nav).unwrap();

    let after = doc.children(body).unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0], nav);
    assert_eq!(&after[1..], &before[1..]);
    assert!(doc.to_html().starts_with("<body><nav></nav><main"));
}

#[test]
fn test_removed_ids_are_invalid() {
    let mut doc = page();
    let host = doc.get_element_by_id("app").unwrap();
    doc.destroy(host).unwrap();

    assert_eq!(doc.kind(host), Err(DomError::InvalidNodeId));
    assert_eq!(doc.get_element_by_id("app"), None);
    assert!(matches!(doc.kind(doc.root()), Ok(NodeKind::Document)));
}

#[test]
fn test_elements_walk_whole_document() {
    let doc = page();
    let count = doc.elements(doc.root()).count();
    assert_eq!(count, 4);
}
