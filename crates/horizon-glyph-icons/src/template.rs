//! Parsed icon markup.
//!
//! Icon contents are stored as the inner markup of an `<svg>` element
//! (`<path d="..."></path><circle .../>`). The markup is parsed once, when the
//! icon is registered, into a list of [`VNode`]s that can be instantiated into
//! any document without re-parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use horizon_glyph_dom::{Attributes, VNode};

use crate::error::{Error, Result};

/// Validated inner markup of an icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgTemplate {
    nodes: Vec<VNode>,
}

impl SvgTemplate {
    /// Parse inner SVG markup for the icon `name`.
    ///
    /// Fails on malformed XML, mismatched or unclosed tags.
    pub fn parse(name: &str, markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().trim_text(true);

        let mut top: Vec<VNode> = Vec::new();
        let mut open: Vec<VNode> = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(Event::Start(start)) => open.push(element_from(name, &start)?),
                Ok(Event::Empty(empty)) => {
                    let element = element_from(name, &empty)?;
                    append(&mut open, &mut top, element);
                }
                Ok(Event::End(_)) => {
                    let element = open
                        .pop()
                        .ok_or_else(|| Error::markup(name, "unexpected closing tag"))?;
                    append(&mut open, &mut top, element);
                }
                Ok(Event::Text(text)) => {
                    let content = text
                        .unescape()
                        .map_err(|e| Error::markup(name, e.to_string()))?;
                    if !content.is_empty() {
                        append(&mut open, &mut top, VNode::text(content.into_owned()));
                    }
                }
                Ok(Event::CData(cdata)) => {
                    let content = String::from_utf8_lossy(&cdata).into_owned();
                    append(&mut open, &mut top, VNode::text(content));
                }
                Ok(Event::Comment(comment)) => {
                    let content = String::from_utf8_lossy(&comment).into_owned();
                    append(&mut open, &mut top, VNode::comment(content));
                }
                Ok(Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
                Err(e) => return Err(Error::markup(name, e.to_string())),
            }
        }

        if let Some(VNode::Element { tag, .. }) = open.last() {
            return Err(Error::markup(name, format!("unclosed element <{tag}>")));
        }

        Ok(Self { nodes: top })
    }

    /// The parsed top-level nodes.
    pub fn nodes(&self) -> &[VNode] {
        &self.nodes
    }

    /// Returns true if the template has no content.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Attach `node` to the innermost open element, or to the top level.
fn append(open: &mut [VNode], top: &mut Vec<VNode>, node: VNode) {
    match open.last_mut() {
        Some(VNode::Element { children, .. }) => children.push(node),
        _ => top.push(node),
    }
}

fn element_from(name: &str, start: &BytesStart<'_>) -> Result<VNode> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Attributes::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::markup(name, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::markup(name, e.to_string()))?;
        attributes.set(key, value.into_owned());
    }
    Ok(VNode::Element {
        tag,
        attributes,
        children: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_siblings() {
        let template = SvgTemplate::parse(
            "search",
            r#"<circle cx="11" cy="11" r="8"></circle><line x1="21" y1="21" x2="16.65" y2="16.65"/>"#,
        )
        .unwrap();

        assert_eq!(template.nodes().len(), 2);
        match &template.nodes()[0] {
            VNode::Element {
                tag, attributes, ..
            } => {
                assert_eq!(tag, "circle");
                let names: Vec<_> = attributes.iter().map(|a| a.name.as_str()).collect();
                assert_eq!(names, ["cx", "cy", "r"]);
            }
            other => panic!("unexpected node {other:?}"),
        }
    }

    #[test]
    fn test_parse_nested() {
        let template =
            SvgTemplate::parse("g", r#"<g fill="none"><title>Tip &amp; trick</title></g>"#).unwrap();

        let VNode::Element { children, .. } = &template.nodes()[0] else {
            panic!("expected element");
        };
        let VNode::Element { children, .. } = &children[0] else {
            panic!("expected title");
        };
        assert_eq!(children[0], VNode::text("Tip & trick"));
    }

    #[test]
    fn test_empty_markup() {
        let template = SvgTemplate::parse("blank", "").unwrap();
        assert!(template.is_empty());
    }

    #[test]
    fn test_unclosed_element() {
        let err = SvgTemplate::parse("broken", "<path d=\"M0 0\">").unwrap_err();
        assert!(matches!(err, Error::Markup { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_mismatched_tags() {
        assert!(SvgTemplate::parse("broken", "<g><path></g></path>").is_err());
    }
}
