// src/config/options.rs
//
// Overlay style configuration. Serialized as camelCase JSON so the stored blob
// keeps the same shape the overlay has always persisted.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Some(FontSize::Small),
            "medium" => Some(FontSize::Medium),
            "large" => Some(FontSize::Large),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Class,
    Custom,
    Minimal,
}

impl ColorScheme {
    /// Order matches the customization panel.
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Class, ColorScheme::Minimal, ColorScheme::Custom];

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Class => "WoW Class Colors",
            ColorScheme::Minimal => "Minimal (Black & White)",
            ColorScheme::Custom => "Custom Colors",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "class" => Some(ColorScheme::Class),
            "custom" => Some(ColorScheme::Custom),
            "minimal" => Some(ColorScheme::Minimal),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Horizontal,
    Vertical,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Horizontal, Layout::Vertical];

    pub fn label(self) -> &'static str {
        match self {
            Layout::Horizontal => "Horizontal",
            Layout::Vertical => "Vertical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "horizontal" => Some(Layout::Horizontal),
            "vertical" => Some(Layout::Vertical),
            _ => None,
        }
    }
}

/// Colors used by the `custom` scheme. Each value is a CSS color string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self {
            primary: s!("#3B82F6"),
            secondary: s!("#1F2937"),
            background: s!("#111827"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    pub background_transparent: bool,
    pub font_size: FontSize,
    pub color_scheme: ColorScheme,
    pub layout: Layout,
    pub show_guild: bool,
    pub show_item_level: bool,
    pub show_realm: bool,
    /// Only consulted when `color_scheme == Custom`.
    pub custom_colors: CustomColors,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_transparent: true,
            font_size: FontSize::Medium,
            color_scheme: ColorScheme::Class,
            layout: Layout::Horizontal,
            show_guild: true,
            show_item_level: true,
            show_realm: true,
            custom_colors: CustomColors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stored_key_names() {
        let json = serde_json::to_string(&StyleConfig::default()).unwrap();
        assert!(json.contains(r#""backgroundTransparent":true"#));
        assert!(json.contains(r#""fontSize":"medium""#));
        assert!(json.contains(r#""colorScheme":"class""#));
        assert!(json.contains(r#""layout":"horizontal""#));
        assert!(json.contains(r##""customColors":{"primary":"#3B82F6""##));
    }

    #[test]
    fn missing_keys_fall_back_per_field() {
        let cfg: StyleConfig = serde_json::from_str(r#"{"fontSize":"large"}"#).unwrap();
        assert_eq!(cfg.font_size, FontSize::Large);
        assert!(cfg.background_transparent);
        assert_eq!(cfg.custom_colors, CustomColors::default());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ColorScheme::parse("Custom"), Some(ColorScheme::Custom));
        assert_eq!(Layout::parse("VERTICAL"), Some(Layout::Vertical));
        assert_eq!(FontSize::parse("huge"), None);
    }
}
