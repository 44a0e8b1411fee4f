//! Logging and debugging facilities for Horizon Glyph.
//!
//! This module provides:
//! - Target names for filtering the `tracing` output of each subsystem
//! - Debug visualization for document trees
//!
//! # Tracing Integration
//!
//! Horizon Glyph uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_glyph_icons=debug")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! ```
//! use horizon_glyph_dom::{Document, DocumentTreeDebug, VNode};
//!
//! let mut doc = Document::new();
//! let app = doc.instantiate(&VNode::element("div").with_attr("id", "app"));
//! doc.append_child(doc.root(), app).unwrap();
//!
//! let output = DocumentTreeDebug::new().format(&doc).unwrap();
//! assert!(output.contains("div#app"));
//! ```

use std::fmt::Write as FmtWrite;

use crate::document::Document;
use crate::error::DomResult;
use crate::node::{NodeId, NodeKind};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Document model target.
    pub const DOM: &str = "horizon_glyph_dom";
    /// Icon registry and substitution target.
    pub const ICONS: &str = "horizon_glyph_icons";
    /// Icon registry loading target.
    pub const REGISTRY: &str = "horizon_glyph_icons::registry";
    /// Bootstrap sequencer target.
    pub const BOOTSTRAP: &str = "horizon_glyph::bootstrap";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed lines.
    Compact,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to list attributes other than `id` and `class`.
    pub show_attributes: bool,
    /// Whether to include text and comment nodes.
    pub show_text: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: false,
            show_attributes: false,
            show_text: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_ids: true,
            show_attributes: true,
            ..Default::default()
        }
    }

    /// Options for minimal output: elements only.
    pub fn minimal() -> Self {
        Self {
            show_text: false,
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing document trees.
#[derive(Debug, Clone, Default)]
pub struct DocumentTreeDebug {
    options: TreeFormatOptions,
}

impl DocumentTreeDebug {
    /// Create a visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the whole document.
    pub fn format(&self, doc: &Document) -> DomResult<String> {
        let mut output = String::new();
        writeln!(output, "Document ({} nodes):", doc.node_count()).expect("write to String");

        let children = doc.children(doc.root())?;
        if children.is_empty() {
            writeln!(output, "  (empty)").expect("write to String");
        }
        let visible: Vec<NodeId> = self.visible_children(doc, children);
        let count = visible.len();
        for (i, child) in visible.into_iter().enumerate() {
            self.format_subtree_into(doc, child, 1, i + 1 == count, &mut output)?;
        }
        Ok(output)
    }

    /// Format a subtree starting at `root`.
    pub fn format_subtree(&self, doc: &Document, root: NodeId) -> DomResult<String> {
        let mut output = String::new();
        self.format_subtree_into(doc, root, 0, true, &mut output)?;
        Ok(output)
    }

    fn visible_children(&self, doc: &Document, children: &[NodeId]) -> Vec<NodeId> {
        children
            .iter()
            .copied()
            .filter(|&c| self.options.show_text || doc.is_element(c))
            .collect()
    }

    fn format_subtree_into(
        &self,
        doc: &Document,
        id: NodeId,
        depth: usize,
        is_last: bool,
        output: &mut String,
    ) -> DomResult<()> {
        if let Some(max) = self.options.max_depth
            && depth > max
        {
            return Ok(());
        }

        output.push_str(&self.build_prefix(depth, is_last));

        match doc.kind(id)? {
            NodeKind::Document => output.push_str("#document"),
            NodeKind::Element(element) => {
                output.push_str(&element.tag);
                if let Some(el_id) = element.id() {
                    write!(output, "#{el_id}").expect("write to String");
                }
                for class in element.classes() {
                    write!(output, ".{class}").expect("write to String");
                }
                if self.options.show_attributes {
                    for attr in element
                        .attributes
                        .iter()
                        .filter(|a| a.name != "id" && a.name != "class")
                    {
                        write!(output, " {}={:?}", attr.name, attr.value)
                            .expect("write to String");
                    }
                }
            }
            NodeKind::Text(text) => write!(output, "{text:?}").expect("write to String"),
            NodeKind::Comment(text) => write!(output, "<!--{text}-->").expect("write to String"),
        }

        if self.options.show_ids {
            write!(output, " [{id:?}]").expect("write to String");
        }
        output.push('\n');

        let children = self.visible_children(doc, doc.children(id)?);
        let child_count = children.len();
        for (i, child_id) in children.into_iter().enumerate() {
            self.format_subtree_into(doc, child_id, depth + 1, i + 1 == child_count, output)?;
        }

        Ok(())
    }

    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for _ in 0..(depth - 1) {
            prefix.push_str(branch);
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VNode;

    fn sample() -> (Document, NodeId) {
        let mut doc = Document::new();
        let app = doc.instantiate(
            &VNode::element("div")
                .with_attr("id", "app")
                .with_child(
                    VNode::element("i")
                        .with_attr("class", "icon big")
                        .with_attr("data-feather", "home"),
                )
                .with_child(VNode::text("label")),
        );
        doc.append_child(doc.root(), app).unwrap();
        (doc, app)
    }

    #[test]
    fn test_format_empty() {
        let doc = Document::new();
        let output = DocumentTreeDebug::new().format(&doc).unwrap();
        assert!(output.contains("Document (1 nodes)"));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_hierarchy() {
        let (doc, app) = sample();
        let output = DocumentTreeDebug::new().format_subtree(&doc, app).unwrap();

        assert!(output.starts_with("div#app\n"));
        assert!(output.contains("i.icon.big"));
        assert!(output.contains("\"label\""));
        assert!(!output.contains("data-feather"));
    }

    #[test]
    fn test_format_detailed() {
        let (doc, app) = sample();
        let debug = DocumentTreeDebug::with_options(TreeFormatOptions::detailed());
        let output = debug.format_subtree(&doc, app).unwrap();

        assert!(output.contains("data-feather=\"home\""));
        assert!(output.contains("["));
    }

    #[test]
    fn test_format_minimal_hides_text() {
        let (doc, app) = sample();
        let debug = DocumentTreeDebug::with_options(TreeFormatOptions::minimal());
        let output = debug.format_subtree(&doc, app).unwrap();

        assert!(!output.contains("label"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_max_depth() {
        let (doc, app) = sample();
        let debug = DocumentTreeDebug::with_options(TreeFormatOptions {
            max_depth: Some(0),
            ..Default::default()
        });
        let output = debug.format_subtree(&doc, app).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_ascii_prefix() {
        let (doc, app) = sample();
        let debug = DocumentTreeDebug::with_options(TreeFormatOptions {
            style: TreeStyle::Ascii,
            ..Default::default()
        });
        let output = debug.format_subtree(&doc, app).unwrap();
        assert!(output.contains("+-- i.icon.big"));
        assert!(output.contains("`-- \"label\""));
    }
}
