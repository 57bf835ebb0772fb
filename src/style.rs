// src/style.rs
//
// Style resolution: (StyleConfig, class) → concrete presentation values.
// Both the native preview and the generated overlay read from `ResolvedStyle`,
// so the two can't drift apart.

use crate::{
    config::options::{ColorScheme, FontSize, Layout, StyleConfig},
    core::html::css_value,
};

pub const WHITE: &str = "#FFFFFF";
pub const MUTED_GRAY: &str = "#9CA3AF";
pub const DARK_TRANSLUCENT: &str = "rgba(17, 24, 39, 0.9)";
pub const TRANSPARENT: &str = "transparent";

/// Class → color, in the order the game lists classes.
pub static CLASS_COLORS: &[(&str, &str)] = &[
    ("Death Knight", "#C41E3A"),
    ("Demon Hunter", "#A330C9"),
    ("Druid", "#FF7C0A"),
    ("Evoker", "#33937F"),
    ("Hunter", "#AAD372"),
    ("Mage", "#3FC7EB"),
    ("Monk", "#00FF98"),
    ("Paladin", "#F48CBA"),
    ("Priest", "#FFFFFF"),
    ("Rogue", "#FFF468"),
    ("Shaman", "#0070DD"),
    ("Warlock", "#8788EE"),
    ("Warrior", "#C69B6D"),
];

/// Unknown or empty classes fall back to white.
pub fn class_color(class: &str) -> &'static str {
    CLASS_COLORS
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, color)| *color)
        .unwrap_or(WHITE)
}

pub fn text_color(config: &StyleConfig, class: &str) -> String {
    match config.color_scheme {
        ColorScheme::Class => s!(class_color(class)),
        ColorScheme::Custom => css_value(&config.custom_colors.primary),
        ColorScheme::Minimal => s!(WHITE),
    }
}

pub fn secondary_color(config: &StyleConfig) -> String {
    match config.color_scheme {
        ColorScheme::Custom => css_value(&config.custom_colors.secondary),
        _ => s!(MUTED_GRAY),
    }
}

/// Transparency wins over every scheme.
/// Custom colors pass through `css_value`, so they are safe to splice into CSS.
pub fn background_color(config: &StyleConfig) -> String {
    if config.background_transparent {
        return s!(TRANSPARENT);
    }
    match config.color_scheme {
        ColorScheme::Custom => css_value(&config.custom_colors.background),
        _ => s!(DARK_TRANSLUCENT),
    }
}

pub fn font_size_px(size: FontSize) -> u32 {
    match size {
        FontSize::Small => 14,
        FontSize::Medium => 16,
        FontSize::Large => 18,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub class_color: String,
    pub text_color: String,
    pub secondary_color: String,
    pub background: String,
    pub font_size_px: u32,
    pub layout: Layout,
}

impl ResolvedStyle {
    pub fn resolve(config: &StyleConfig, class: &str) -> Self {
        Self {
            class_color: s!(class_color(class)),
            text_color: text_color(config, class),
            secondary_color: secondary_color(config),
            background: background_color(config),
            font_size_px: font_size_px(config.font_size),
            layout: config.layout,
        }
    }
}

/// Parse the CSS color forms the overlay uses into straight (unpremultiplied)
/// RGBA: `transparent`, `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` and the space form `rgb(r g b / a)`. Alpha is 0..=1 or
/// a percentage.
pub fn parse_css_color(s: &str) -> Option<[u8; 4]> {
    let s = s.trim();
    if s.eq_ignore_ascii_case(TRANSPARENT) {
        return Some([0, 0, 0, 0]);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let lower = s.to_ascii_lowercase();
    let (inner, legacy_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
        (rest.strip_suffix(')')?, true)
    } else if let Some(rest) = lower.strip_prefix("rgb(") {
        (rest.strip_suffix(')')?, false)
    } else {
        return None;
    };

    let (r, g, b, alpha) = if inner.contains(',') {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        match (legacy_alpha, parts.as_slice()) {
            (false, [r, g, b]) => (*r, *g, *b, None),
            (true, [r, g, b, a]) => (*r, *g, *b, Some(*a)),
            _ => return None,
        }
    } else {
        let (channels, alpha) = match inner.split_once('/') {
            Some((c, a)) => (c, Some(a.trim())),
            None => (inner, None),
        };
        match channels.split_whitespace().collect::<Vec<_>>().as_slice() {
            [r, g, b] => (*r, *g, *b, alpha),
            _ => return None,
        }
    };

    let a = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 255,
    };
    Some([r.parse().ok()?, g.parse().ok()?, b.parse().ok()?, a])
}

fn parse_alpha(a: &str) -> Option<u8> {
    let a: f64 = match a.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => a.parse().ok()?,
    };
    if !(0.0..=1.0).contains(&a) {
        return None;
    }
    Some((a * 255.0).round() as u8)
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

/// `#RRGGBB`, uppercase, the form the color pickers write back.
pub fn hex_rgb(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_class_is_white() {
        assert_eq!(class_color("Warrior"), "#C69B6D");
        assert_eq!(class_color("warrior"), WHITE);
        assert_eq!(class_color(""), WHITE);
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse_css_color("#C69B6D"), Some([0xC6, 0x9B, 0x6D, 255]));
        assert_eq!(parse_css_color("#fff"), Some([255, 255, 255, 255]));
        assert_eq!(parse_css_color("#11182780"), Some([0x11, 0x18, 0x27, 0x80]));
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#GGGGGG"), None);
    }

    #[test]
    fn functional_forms() {
        assert!(matches!(parse_css_color(DARK_TRANSLUCENT), Some([17, 24, 39, 229..=230])));
        assert_eq!(parse_css_color("rgb(1, 2, 3)"), Some([1, 2, 3, 255]));
        assert_eq!(parse_css_color("TRANSPARENT"), Some([0, 0, 0, 0]));
        assert_eq!(parse_css_color("rgba(1, 2, 3)"), None);
        assert_eq!(parse_css_color("rgba(1, 2, 3, 2)"), None);
        assert_eq!(parse_css_color("red"), None);
    }

    #[test]
    fn space_separated_forms() {
        assert_eq!(parse_css_color("rgb(1 2 3)"), Some([1, 2, 3, 255]));
        assert_eq!(parse_css_color("rgb(1 2 3 / 50%)"), Some([1, 2, 3, 128]));
        assert_eq!(parse_css_color("rgba(1 2 3 / 0)"), Some([1, 2, 3, 0]));
        assert_eq!(parse_css_color("rgb(1 2 / 50%)"), None);
        assert_eq!(parse_css_color("rgb(1 2 3 / 150%)"), None);
    }

    #[test]
    fn custom_colors_survive_resolution() {
        let mut cfg = StyleConfig {
            background_transparent: false,
            color_scheme: ColorScheme::Custom,
            ..StyleConfig::default()
        };
        cfg.custom_colors.primary = s!("rgb(1 2 3 / 50%)");
        cfg.custom_colors.background = s!("rgba(17, 24, 39, 0.5)");
        assert_eq!(text_color(&cfg, "Warrior"), cfg.custom_colors.primary);
        assert_eq!(background_color(&cfg), cfg.custom_colors.background);
        assert_eq!(parse_css_color(&text_color(&cfg, "Warrior")), Some([1, 2, 3, 128]));
    }

    #[test]
    fn hex_rgb_roundtrips_through_parser() {
        let hex = hex_rgb([59, 130, 246]);
        assert_eq!(hex, "#3B82F6");
        assert_eq!(parse_css_color(&hex), Some([59, 130, 246, 255]));
    }
}
