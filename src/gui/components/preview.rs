// src/gui/components/preview.rs
//
// Native rendering of the overlay. Draws the same `OverlayView` lines the
// generated document renders, with the same resolved colors.

use eframe::egui::{self, Color32, RichText, Stroke};

use crate::{
    config::options::Layout,
    gui::app::App,
    lookup::LookupState,
    overlay::OverlayView,
    style::{parse_css_color, DARK_TRANSLUCENT},
};

use super::css_to_color32;

const AVATAR: f32 = 48.0;
const ERROR_RED: Color32 = Color32::from_rgb(239, 68, 68);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Preview");
    ui.add_space(4.0);

    match app.lookup_state() {
        LookupState::Idle => placeholder(ui, "Search for a character to see the overlay preview"),
        LookupState::Searching(q) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Looking up {} on {}…", q.name, q.realm));
            });
        }
        LookupState::Failed(msg) => {
            egui::Frame::new()
                .fill(ERROR_RED.gamma_multiply(0.1))
                .stroke(Stroke::new(1.0, ERROR_RED.gamma_multiply(0.3)))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.colored_label(ERROR_RED, msg);
                });
        }
        LookupState::Found(character) => {
            let view = OverlayView::build(&character, &app.state.config);
            overlay(ui, app, &view);
        }
    }
}

fn placeholder(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.weak(text);
            });
        });
}

fn overlay(ui: &mut egui::Ui, app: &App, view: &OverlayView) {
    let fill = match parse_css_color(&view.style.background) {
        Some([r, g, b, a]) => Color32::from_rgba_unmultiplied(r, g, b, a),
        None => css_to_color32(DARK_TRANSLUCENT, Color32::from_gray(20)),
    };
    let text = css_to_color32(&view.style.text_color, Color32::WHITE);
    let secondary = css_to_color32(&view.style.secondary_color, Color32::GRAY);
    let border = css_to_color32(&view.style.class_color, Color32::WHITE);
    let size = view.style.font_size_px as f32;

    egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_max_width(400.0);
            match view.style.layout {
                Layout::Horizontal => {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 16.0;
                        avatar(ui, app, border);
                        ui.vertical(|ui| info(ui, view, size * 1.125, size, text, secondary, false));
                    });
                }
                Layout::Vertical => {
                    ui.vertical(|ui| {
                        ui.spacing_mut().item_spacing.y = 8.0;
                        avatar(ui, app, border);
                        info(ui, view, size, size, text, secondary, true);
                    });
                }
            }
        });
}

fn avatar(ui: &mut egui::Ui, app: &App, border: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR, AVATAR), egui::Sense::hover());
    let radius = AVATAR / 2.0;

    match app.avatar.texture() {
        Some(tex) => {
            egui::Image::from_texture(tex).corner_radius(radius).paint_at(ui, rect);
        }
        None => {
            ui.painter().circle_filled(rect.center(), radius, Color32::from_gray(60));
            let glyph = if app.avatar.is_loading() {
                Some("…")
            } else if app.avatar.failed() {
                Some("?")
            } else {
                None
            };
            if let Some(glyph) = glyph {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(14.0),
                    Color32::LIGHT_GRAY,
                );
            }
        }
    }
    ui.painter().circle_stroke(rect.center(), radius, Stroke::new(2.0, border));
}

fn info(
    ui: &mut egui::Ui,
    view: &OverlayView,
    name_size: f32,
    size: f32,
    text: Color32,
    secondary: Color32,
    stacked: bool,
) {
    ui.spacing_mut().item_spacing.y = 2.0;

    ui.horizontal(|ui| {
        ui.label(RichText::new(&view.name).size(name_size).strong().color(text));
        if let Some(realm) = &view.realm {
            ui.label(RichText::new(format!("- {realm}")).size(name_size).color(secondary));
        }
    });
    ui.label(RichText::new(&view.details).size(size).color(secondary));

    if let Some(score) = view.score_line() {
        ui.label(RichText::new(score).size(size).strong().color(text));
    }

    let extra = view.additional_lines();
    if extra.is_empty() {
        return;
    }
    let line = |ui: &mut egui::Ui, s: &str| {
        ui.label(RichText::new(s).size(size).color(secondary));
    };
    if stacked {
        for s in &extra {
            line(ui, s);
        }
    } else {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            for s in &extra {
                line(ui, s);
            }
        });
    }
}
