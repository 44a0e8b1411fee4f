//! The icon registry.
//!
//! An [`IconRegistry`] is an immutable name → icon mapping. It is built once,
//! either from the bundled resource ([`IconRegistry::bundled`]), from JSON data
//! ([`IconRegistry::from_json`]) or programmatically through an
//! [`IconRegistryBuilder`], and then shared read-only with every
//! [`IconReplacer`](crate::IconReplacer) that needs it.

use std::collections::BTreeMap;

use serde::Deserialize;

use horizon_glyph_dom::logging::targets;

use crate::error::{Error, Result};
use crate::icon::{Icon, IconName};
use crate::options::IconOptions;

/// The bundled icon set, embedded at compile time.
///
/// Format: a JSON object mapping each icon name to
/// `{ "contents": "<inner svg markup>", "tags": ["keyword", ...] }`.
pub const BUNDLED_ICONS: &str = include_str!("../assets/icons.json");

/// One entry of the registry JSON format.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct IconEntry {
    contents: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Immutable mapping from icon name to icon.
///
/// Names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: BTreeMap<String, Icon>,
}

impl IconRegistry {
    /// Start building a registry.
    pub fn builder() -> IconRegistryBuilder {
        IconRegistryBuilder::new()
    }

    /// Load the bundled icon set.
    pub fn bundled() -> Result<Self> {
        let registry = Self::from_json(BUNDLED_ICONS)?;
        tracing::debug!(
            target: targets::REGISTRY,
            icons = registry.len(),
            "loaded bundled icon registry"
        );
        Ok(registry)
    }

    /// Load a registry from JSON data in the bundled format.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut builder = IconRegistryBuilder::new();
        builder.extend_from_json(json)?;
        Ok(builder.build())
    }

    /// Look up an icon by exact name.
    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.icons.get(name)
    }

    /// Check whether an icon is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// All icons, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Icon> {
        self.icons.values()
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icons whose name or tags contain `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> Vec<&Icon> {
        self.icons
            .values()
            .filter(|icon| icon.matches(keyword))
            .collect()
    }

    /// Render an icon as an SVG string, or `None` if the name is unknown.
    pub fn to_svg(&self, name: &str, options: &IconOptions) -> Option<String> {
        self.get(name).map(|icon| icon.to_svg(options))
    }
}

/// Builder for [`IconRegistry`].
///
/// Rejects duplicate names and malformed markup as icons are added, so a
/// built registry only ever contains valid templates.
#[derive(Debug, Default)]
pub struct IconRegistryBuilder {
    icons: BTreeMap<String, Icon>,
}

impl IconRegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an icon from its inner markup.
    pub fn icon(
        &mut self,
        name: impl Into<IconName>,
        contents: impl Into<String>,
        tags: &[&str],
    ) -> Result<&mut Self> {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        self.insert(Icon::new(name, contents, tags)?)
    }

    /// Add a prepared icon.
    pub fn insert(&mut self, icon: Icon) -> Result<&mut Self> {
        if self.icons.contains_key(icon.name()) {
            return Err(Error::DuplicateIcon(icon.name().to_string()));
        }
        tracing::trace!(target: targets::REGISTRY, name = icon.name(), "registered icon");
        self.icons.insert(icon.name().to_string(), icon);
        Ok(self)
    }

    /// Add every icon from JSON data in the bundled format.
    pub fn extend_from_json(&mut self, json: &str) -> Result<&mut Self> {
        let entries: BTreeMap<String, IconEntry> = serde_json::from_str(json)?;
        for (name, entry) in entries {
            self.insert(Icon::new(name, entry.contents, entry.tags)?)?;
        }
        Ok(self)
    }

    /// Number of icons added so far.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no icons were added.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Freeze the registry.
    pub fn build(self) -> IconRegistry {
        IconRegistry { icons: self.icons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_registry() {
        let registry = IconRegistry::bundled().unwrap();
        assert!(registry.len() >= 20);
        for name in [
            IconName::HOME,
            IconName::SEARCH,
            IconName::X,
            IconName::MAXIMIZE,
            IconName::MINIMIZE,
            IconName::FOLDER,
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert!(registry.iter().all(|icon| !icon.template().is_empty()));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let registry = IconRegistry::bundled().unwrap();
        assert!(registry.get("home").is_some());
        assert!(registry.get("Home").is_none());
        assert!(registry.get("HOME").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let registry = IconRegistry::bundled().unwrap();
        let names: Vec<_> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_builder() {
        let mut builder = IconRegistry::builder();
        builder
            .icon("dot", r#"<circle cx="12" cy="12" r="1"></circle>"#, &["point"])
            .unwrap()
            .icon("line", r#"<line x1="0" y1="0" x2="24" y2="24"/>"#, &[])
            .unwrap();
        assert_eq!(builder.len(), 2);

        let registry = builder.build();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["dot", "line"]);
        assert_eq!(registry.get("dot").unwrap().tags(), ["point"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut builder = IconRegistry::builder();
        builder.icon("dot", "", &[]).unwrap();
        let err = builder.icon("dot", "", &[]).unwrap_err();
        assert!(matches!(err, Error::DuplicateIcon(name) if name == "dot"));
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            IconRegistry::from_json("not json"),
            Err(Error::Registry(_))
        ));
        assert!(matches!(
            IconRegistry::from_json(r#"{"bad": {"contents": "<g>"}}"#),
            Err(Error::Markup { .. })
        ));
        assert!(matches!(
            IconRegistry::from_json(r#"{"bad": {"contents": "", "colour": "red"}}"#),
            Err(Error::Registry(_))
        ));
    }

    #[test]
    fn test_search() {
        let registry = IconRegistry::bundled().unwrap();
        let close: Vec<_> = registry.search("close").into_iter().map(Icon::name).collect();
        assert!(close.contains(&"x"));
        assert!(close.contains(&"minimize-2"));
        assert!(registry.search("no-such-keyword").is_empty());
    }

    #[test]
    fn test_to_svg() {
        let registry = IconRegistry::bundled().unwrap();
        let svg = registry.to_svg("x", &IconOptions::default()).unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("class=\"feather feather-x\""));
        assert!(registry.to_svg("nope", &IconOptions::default()).is_none());
    }
}
