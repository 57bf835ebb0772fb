// src/gui/components/embed_panel.rs
//
// OBS instructions, the generated document, and copy / download.

use std::time::Duration;

use eframe::egui;

use crate::{
    config::consts::{OVERLAY_HEIGHT, OVERLAY_WIDTH},
    file,
    gui::{actions, app::App},
};

const COPIED_FOR: Duration = Duration::from_secs(2);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Embed Code");
    ui.add_space(4.0);

    let Some(character) = app.character() else {
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.weak("Search for a character to generate embed code");
                });
            });
        return;
    };

    egui::CollapsingHeader::new("How to use in OBS")
        .default_open(true)
        .show(ui, |ui| {
            ui.label("1. Download the HTML file (or copy the code into a .html file).");
            ui.label("2. In OBS, add a new Browser source.");
            ui.label("3. Tick \"Local file\" and pick the saved file.");
            ui.label(format!("4. Set the size to {OVERLAY_WIDTH}×{OVERLAY_HEIGHT} (adjust to taste)."));
            ui.label("5. The overlay refreshes its data every 30 minutes.");
        });

    ui.add_space(4.0);

    let mut code = s!(app.embed_code(&character));
    egui::ScrollArea::vertical()
        .id_salt("embed_code")
        .max_height(256.0)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut code)
                    .code_editor()
                    .interactive(false)
                    .desired_width(f32::INFINITY),
            );
        });

    ui.add_space(4.0);

    let recently_copied = app.copied_at.is_some_and(|t| t.elapsed() < COPIED_FOR);
    ui.horizontal(|ui| {
        let copy_label = if recently_copied { "Copied!" } else { "📋 Copy Code" };
        if ui.button(copy_label).clicked() {
            actions::copy(app, ui.ctx());
            ui.ctx().request_repaint_after(COPIED_FOR);
        }

        let dl = ui.button("⬇ Download HTML")
            .on_hover_text(file::download_file_name(&character));
        if dl.clicked() {
            actions::download(app);
        }
    });

    if recently_copied {
        ui.ctx().request_repaint_after(Duration::from_millis(250));
    } else if app.copied_at.is_some() {
        app.copied_at = None;
    }

    ui.horizontal(|ui| {
        ui.label("Output folder:");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text).desired_width(180.0));
        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            actions::open_output_folder(app);
        }
    });
}
