// src/gui/components/customization.rs
//
// Style controls. Every edit goes straight into `app.state.config`; the app
// persists it at the end of the frame.

use eframe::egui;

use crate::{
    config::options::{ColorScheme, FontSize, Layout},
    gui::app::App,
    style::{hex_rgb, parse_css_color},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cfg = &mut app.state.config;

    ui.heading("Customization");
    ui.add_space(4.0);

    ui.checkbox(&mut cfg.background_transparent, "Transparent background");

    ui.horizontal(|ui| {
        ui.label("Font size:");
        for size in FontSize::ALL {
            ui.selectable_value(&mut cfg.font_size, size, size.label());
        }
    });

    ui.horizontal(|ui| {
        ui.label("Color scheme:");
        for scheme in ColorScheme::ALL {
            ui.radio_value(&mut cfg.color_scheme, scheme, scheme.label());
        }
    });

    if cfg.color_scheme == ColorScheme::Custom {
        let transparent = cfg.background_transparent;
        let colors = &mut cfg.custom_colors;
        egui::Grid::new("custom_colors").num_columns(2).show(ui, |ui| {
            ui.label("Primary");
            color_field(ui, &mut colors.primary, true);
            ui.end_row();

            ui.label("Secondary");
            color_field(ui, &mut colors.secondary, true);
            ui.end_row();

            ui.label("Background");
            ui.horizontal(|ui| {
                color_field(ui, &mut colors.background, !transparent);
                if transparent {
                    ui.weak("(transparent background is on)");
                }
            });
            ui.end_row();
        });
    }

    ui.horizontal(|ui| {
        ui.label("Layout:");
        for layout in Layout::ALL {
            ui.selectable_value(&mut cfg.layout, layout, layout.label());
        }
    });

    ui.add_space(4.0);
    ui.label("Display options:");
    ui.checkbox(&mut cfg.show_realm, "Show realm");
    ui.checkbox(&mut cfg.show_item_level, "Show item level");
    ui.checkbox(&mut cfg.show_guild, "Show guild");
}

/// Color button + hex text box editing one "#RRGGBB" string.
fn color_field(ui: &mut egui::Ui, value: &mut String, enabled: bool) {
    ui.add_enabled_ui(enabled, |ui| {
        let mut rgb = match parse_css_color(value) {
            Some([r, g, b, _]) => [r, g, b],
            None => [0, 0, 0],
        };
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            *value = hex_rgb(rgb);
        }
        ui.add(egui::TextEdit::singleline(value).desired_width(80.0));
    });
}
