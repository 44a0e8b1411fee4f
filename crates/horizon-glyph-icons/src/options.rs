//! Caller overrides for generated icons.

use serde::{Deserialize, Serialize};

use horizon_glyph_dom::Attributes;

/// Override configuration applied to every icon an engine generates.
///
/// Only the enumerated keys are recognized; deserializing any other key is an
/// error. Attributes carried by a placeholder element take precedence over
/// these values, and class lists are merged rather than replaced.
///
/// # Example
///
/// ```
/// use horizon_glyph_icons::IconOptions;
///
/// let options = IconOptions::new()
///     .with_size(16.0)
///     .with_stroke_width(1.5)
///     .with_class("toolbar-icon");
/// assert_eq!(options.size, Some(16.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct IconOptions {
    /// Sets both `width` and `height`.
    pub size: Option<f32>,
    /// Sets `stroke-width`.
    pub stroke_width: Option<f32>,
    /// Extra class tokens appended after the icon's default classes.
    pub class: Vec<String>,
}

impl IconOptions {
    /// Options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rendered size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Add class tokens. Whitespace-separated input is split into tokens.
    pub fn with_class(mut self, class: &str) -> Self {
        self.class
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.stroke_width.is_none() && self.class.is_empty()
    }

    /// Write the size and stroke overrides into `attrs`.
    ///
    /// Classes are not touched; they are merged separately.
    pub(crate) fn apply_to(&self, attrs: &mut Attributes) {
        if let Some(size) = self.size {
            attrs.set("width", size.to_string());
            attrs.set("height", size.to_string());
        }
        if let Some(width) = self.stroke_width {
            attrs.set("stroke-width", width.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(IconOptions::new().is_empty());
        assert!(!IconOptions::new().with_class("a").is_empty());
    }

    #[test]
    fn test_with_class_splits_tokens() {
        let options = IconOptions::new().with_class(" a  b ").with_class("c");
        assert_eq!(options.class, ["a", "b", "c"]);
    }

    #[test]
    fn test_apply_to() {
        let mut attrs: Attributes = [("width", "24"), ("height", "24"), ("stroke-width", "2")]
            .into_iter()
            .collect();
        IconOptions::new()
            .with_size(32.0)
            .with_stroke_width(1.5)
            .apply_to(&mut attrs);

        assert_eq!(attrs.get("width"), Some("32"));
        assert_eq!(attrs.get("height"), Some("32"));
        assert_eq!(attrs.get("stroke-width"), Some("1.5"));
    }

    #[test]
    fn test_deserialize() {
        let options: IconOptions =
            serde_json::from_str(r#"{"size": 18, "stroke-width": 1, "class": ["x"]}"#).unwrap();
        assert_eq!(options.size, Some(18.0));
        assert_eq!(options.stroke_width, Some(1.0));
        assert_eq!(options.class, ["x"]);
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<IconOptions, _> = serde_json::from_str(r#"{"color": "red"}"#);
        assert!(result.is_err());
    }
}
