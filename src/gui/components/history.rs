// src/gui/components/history.rs
//
// Recent lookups, newest first. Clicking a row fills the form.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut picked: Option<usize> = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_max_height(220.0);

        TableBuilder::new(ui)
            .id_salt("history_table")
            .striped(true)
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder().at_least(160.0))
            .header(20.0, |mut header| {
                header.col(|ui| { ui.strong("Name"); });
                header.col(|ui| { ui.strong("Realm"); });
            })
            .body(|mut body| {
                for (idx, entry) in app.history.iter().enumerate() {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            if ui.selectable_label(false, &entry.name).clicked() {
                                picked = Some(idx);
                            }
                        });
                        row.col(|ui| {
                            let realm = format!("{} ({})", entry.realm, entry.region.to_uppercase());
                            if ui.selectable_label(false, realm).clicked() {
                                picked = Some(idx);
                            }
                        });
                    });
                }
            });
    });

    if let Some(idx) = picked {
        actions::pick_history(app, idx);
    }
}
