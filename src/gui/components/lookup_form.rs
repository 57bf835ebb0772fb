// src/gui/components/lookup_form.rs
//
// Region / realm / name form with inline validation and the history dropdown.
// Inputs are locked while a lookup is in flight.

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::consts::REGIONS,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Character Lookup");
    ui.add_space(4.0);

    let searching = app.is_searching();
    let mut submit = false;

    ui.horizontal(|ui| {
        let gui = &mut app.state.gui;

        ui.label("Region:");
        let selected = REGIONS
            .iter()
            .find(|(v, _)| *v == gui.region)
            .map(|(_, l)| *l)
            .unwrap_or("—");
        ui.add_enabled_ui(!searching, |ui| {
            egui::ComboBox::from_id_salt("region_select")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for (value, label) in REGIONS {
                        ui.selectable_value(&mut gui.region, s!(*value), *label);
                    }
                });
        });

        ui.label("Realm:");
        let realm = ui.add_enabled(
            !searching,
            egui::TextEdit::singleline(&mut gui.realm)
                .hint_text("e.g., Stormrage")
                .desired_width(160.0),
        );

        ui.label("Character Name:");
        let name = ui.add_enabled(
            !searching,
            egui::TextEdit::singleline(&mut gui.name)
                .hint_text("e.g., Thrall")
                .desired_width(140.0),
        );

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter && (realm.lost_focus() || name.lost_focus()) {
            submit = true;
        }
    });

    if let Some(err) = &app.state.gui.form_error {
        ui.colored_label(egui::Color32::from_rgb(248, 113, 113), err);
    }

    ui.horizontal(|ui| {
        let label = if searching { "Searching..." } else { "Search Character" };
        let button = ui.add_enabled(!searching, egui::Button::new(label));
        if button.clicked() {
            submit = true;
        }
        if searching {
            ui.add(Spinner::new().size(16.0));
        }

        if !app.history.is_empty() {
            let history_button = ui.selectable_label(app.state.gui.show_history, "🕓 History");
            if history_button.clicked() {
                app.state.gui.show_history = !app.state.gui.show_history;
            }
        }

        ui.label(app.status.as_str());
    });

    if app.state.gui.show_history && !app.history.is_empty() {
        super::history::draw(ui, app);
    }

    if submit && !searching {
        actions::search(app, ui.ctx());
    }
}
