//! Tool descriptors and default resolution.

use serde::{Deserialize, Serialize};

/// Glyph style used when a descriptor does not name one.
pub const DEFAULT_ICON_TYPE: &str = "plain";

/// One badge as written in the catalog. Only `icon` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ToolDescriptor {
    /// Glyph identifier in the icon font.
    pub icon: String,

    /// Path segment for the tag page; defaults to `icon`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Tooltip label; defaults to `icon`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,

    /// Glyph style variant, e.g. `original-wordmark`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,

    /// Whether the badge links anywhere; defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_clickable: Option<bool>,
}

impl ToolDescriptor {
    /// A descriptor with only `icon` set.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            tag: None,
            hint: None,
            icon_type: None,
            is_clickable: None,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn icon_type(mut self, icon_type: impl Into<String>) -> Self {
        self.icon_type = Some(icon_type.into());
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.is_clickable = Some(clickable);
        self
    }

    /// Apply the defaults for every absent field.
    pub fn resolve(&self) -> ResolvedTool {
        let hint = self.hint.as_deref().unwrap_or(&self.icon);
        ResolvedTool {
            icon: self.icon.clone(),
            icon_type: self
                .icon_type
                .clone()
                .unwrap_or_else(|| DEFAULT_ICON_TYPE.to_string()),
            tag: self.tag.clone().unwrap_or_else(|| self.icon.clone()),
            title: capitalize_first(hint),
            clickable: self.is_clickable.unwrap_or(true),
        }
    }
}

/// A descriptor with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub icon: String,
    pub icon_type: String,
    pub tag: String,
    /// Tooltip text, first character already uppercased.
    pub title: String,
    pub clickable: bool,
}

impl ResolvedTool {
    /// Navigation target under `route_prefix`, or `None` when not clickable.
    pub fn href(&self, route_prefix: &str) -> Option<String> {
        self.clickable
            .then(|| format!("{}{}", route_prefix, self.tag))
    }

    /// Glyph selector class, `<prefix>-<icon>-<iconType>`.
    pub fn glyph_class(&self, prefix: &str) -> String {
        format!("{}-{}-{}", prefix, self.icon, self.icon_type)
    }
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
