//! Icon definitions and SVG generation.

use std::fmt;

use horizon_glyph_dom::{Attribute, Attributes, VNode};

use crate::error::{Error, Result};
use crate::options::IconOptions;
use crate::template::SvgTemplate;

/// Class token every generated icon carries.
pub const BASE_CLASS: &str = "feather";

/// Standard icon name.
///
/// Icon names are lowercase with hyphens and are matched exactly
/// (case-sensitively) against the registry.
///
/// # Examples
///
/// ```
/// use horizon_glyph_icons::IconName;
///
/// let icon = IconName::new(IconName::HOME);
/// assert_eq!(icon.as_str(), "home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconName(String);

impl IconName {
    // ========================================================================
    // Navigation
    // ========================================================================

    /// Home page
    pub const HOME: &'static str = "home";
    /// Open navigation menu
    pub const MENU: &'static str = "menu";
    /// Go back
    pub const ARROW_LEFT: &'static str = "arrow-left";
    /// Go forward
    pub const ARROW_RIGHT: &'static str = "arrow-right";
    /// Collapse
    pub const CHEVRON_UP: &'static str = "chevron-up";
    /// Expand
    pub const CHEVRON_DOWN: &'static str = "chevron-down";
    /// Previous
    pub const CHEVRON_LEFT: &'static str = "chevron-left";
    /// Next
    pub const CHEVRON_RIGHT: &'static str = "chevron-right";

    // ========================================================================
    // Actions
    // ========================================================================

    /// Search
    pub const SEARCH: &'static str = "search";
    /// Add
    pub const PLUS: &'static str = "plus";
    /// Subtract
    pub const MINUS: &'static str = "minus";
    /// Confirm
    pub const CHECK: &'static str = "check";
    /// Close or cancel
    pub const X: &'static str = "x";
    /// Copy
    pub const COPY: &'static str = "copy";
    /// Delete
    pub const TRASH: &'static str = "trash";
    /// Download
    pub const DOWNLOAD: &'static str = "download";
    /// Upload
    pub const UPLOAD: &'static str = "upload";
    /// Start playback or a transfer
    pub const PLAY: &'static str = "play";
    /// Pause playback or a transfer
    pub const PAUSE: &'static str = "pause";
    /// Maximize a window
    pub const MAXIMIZE: &'static str = "maximize-2";
    /// Restore a window
    pub const MINIMIZE: &'static str = "minimize-2";

    // ========================================================================
    // Status and places
    // ========================================================================

    /// Information
    pub const INFO: &'static str = "info";
    /// Warning
    pub const ALERT_CIRCLE: &'static str = "alert-circle";
    /// Notification
    pub const BELL: &'static str = "bell";
    /// Folder
    pub const FOLDER: &'static str = "folder";
    /// File
    pub const FILE: &'static str = "file";

    /// Create a new icon name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IconName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IconName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered icon: its name, inner markup, search tags and parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: IconName,
    contents: String,
    tags: Vec<String>,
    template: SvgTemplate,
}

impl Icon {
    /// Create an icon, parsing and validating its inner markup.
    pub fn new(
        name: impl Into<IconName>,
        contents: impl Into<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.as_str().is_empty() {
            return Err(Error::EmptyName);
        }
        let contents = contents.into();
        let template = SvgTemplate::parse(name.as_str(), &contents)?;
        Ok(Self {
            name,
            contents,
            tags,
            template,
        })
    }

    /// The icon name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The inner markup as registered.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Search keywords.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The parsed inner markup.
    pub fn template(&self) -> &SvgTemplate {
        &self.template
    }

    /// Check whether `keyword` appears in the name or any tag, ignoring case.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name().to_lowercase().contains(&keyword)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&keyword))
    }

    /// The default class list: `feather feather-<name>`.
    pub fn default_class(&self) -> String {
        format!("{BASE_CLASS} {BASE_CLASS}-{}", self.name)
    }

    /// Attributes of the `<svg>` element before any override.
    pub fn default_attributes(&self) -> Attributes {
        let class = self.default_class();
        [
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", "24"),
            ("height", "24"),
            ("viewBox", "0 0 24 24"),
            ("fill", "none"),
            ("stroke", "currentColor"),
            ("stroke-width", "2"),
            ("stroke-linecap", "round"),
            ("stroke-linejoin", "round"),
        ]
        .into_iter()
        .chain([("class", class.as_str())])
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    /// Merge defaults, caller options and element-carried attributes.
    ///
    /// Precedence, lowest first: defaults, `options`, `carried`. The `class`
    /// attribute is the de-duplicated union of all three, in that order.
    pub fn merged_attributes<'a>(
        &self,
        options: &IconOptions,
        carried: impl IntoIterator<Item = &'a Attribute>,
    ) -> Attributes {
        let mut attrs = self.default_attributes();
        options.apply_to(&mut attrs);

        let mut classes: Vec<String> = Vec::new();
        push_class_tokens(&mut classes, &self.default_class());
        for class in &options.class {
            push_class_tokens(&mut classes, class);
        }

        for attr in carried {
            if attr.name == "class" {
                push_class_tokens(&mut classes, &attr.value);
            } else {
                attrs.set(attr.name.clone(), attr.value.clone());
            }
        }

        attrs.set("class", classes.join(" "));
        attrs
    }

    /// Build the `<svg>` element with the given attributes and this icon's content.
    pub fn to_vnode(&self, attributes: Attributes) -> VNode {
        VNode::Element {
            tag: "svg".to_string(),
            attributes,
            children: self.template.nodes().to_vec(),
        }
    }

    /// Render the icon as an SVG string.
    pub fn to_svg(&self, options: &IconOptions) -> String {
        self.to_vnode(self.merged_attributes(options, std::iter::empty()))
            .to_html()
    }
}

impl fmt::Display for Icon {
    /// Displays the inner markup.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}

/// Append the whitespace-separated tokens of `value` that are not yet present.
fn push_class_tokens(classes: &mut Vec<String>, value: &str) {
    for token in value.split_whitespace() {
        if !classes.iter().any(|c| c == token) {
            classes.push(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_icon() -> Icon {
        Icon::new(
            IconName::CHECK,
            r#"<polyline points="20 6 9 17 4 12"></polyline>"#,
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Icon::new("", "", vec![]), Err(Error::EmptyName)));
    }

    #[test]
    fn test_bad_markup_rejected() {
        let err = Icon::new("bad", "<path>", vec![]).unwrap_err();
        assert!(matches!(err, Error::Markup { .. }));
    }

    #[test]
    fn test_default_attributes_order() {
        let attrs = check_icon().default_attributes();
        let names: Vec<_> = attrs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "xmlns",
                "width",
                "height",
                "viewBox",
                "fill",
                "stroke",
                "stroke-width",
                "stroke-linecap",
                "stroke-linejoin",
                "class",
            ]
        );
        assert_eq!(attrs.get("class"), Some("feather feather-check"));
    }

    #[test]
    fn test_to_svg() {
        let svg = check_icon().to_svg(&IconOptions::default());
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" \
             viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" class=\"feather feather-check\">\
             <polyline points=\"20 6 9 17 4 12\"></polyline></svg>"
        );
    }

    #[test]
    fn test_to_svg_with_options() {
        let options = IconOptions::new()
            .with_size(16.0)
            .with_stroke_width(3.0)
            .with_class("ok feather");
        let svg = check_icon().to_svg(&options);

        assert!(svg.contains("width=\"16\" height=\"16\""));
        assert!(svg.contains("stroke-width=\"3\""));
        assert!(svg.contains("class=\"feather feather-check ok\""));
    }

    #[test]
    fn test_merge_precedence() {
        let carried: Attributes = [
            ("id", "save"),
            ("width", "48"),
            ("class", "big feather-check"),
        ]
        .into_iter()
        .collect();
        let options = IconOptions::new().with_size(32.0).with_class("toolbar");
        let attrs = check_icon().merged_attributes(&options, &carried);

        assert_eq!(attrs.get("width"), Some("48"));
        assert_eq!(attrs.get("height"), Some("32"));
        assert_eq!(attrs.get("id"), Some("save"));
        assert_eq!(attrs.get("class"), Some("feather feather-check toolbar big"));
        // Carried attributes that are new go after the defaults.
        assert_eq!(attrs.iter().last().map(|a| a.name.as_str()), Some("id"));
    }

    #[test]
    fn test_matches() {
        let icon = Icon::new("search", "", vec!["Magnifier".to_string()]).unwrap();
        assert!(icon.matches("sea"));
        assert!(icon.matches("magni"));
        assert!(!icon.matches("home"));
    }

    #[test]
    fn test_display_is_contents() {
        let icon = check_icon();
        assert_eq!(icon.to_string(), icon.contents());
    }
}
