// src/gui/components/mod.rs
pub mod customization;
pub mod embed_panel;
pub mod history;
pub mod lookup_form;
pub mod preview;

use eframe::egui::Color32;

use crate::style::parse_css_color;

/// CSS color string → egui color; unparseable values use `fallback`.
pub fn css_to_color32(css: &str, fallback: Color32) -> Color32 {
    match parse_css_color(css) {
        Some([r, g, b, a]) => Color32::from_rgba_unmultiplied(r, g, b, a),
        None => fallback,
    }
}
