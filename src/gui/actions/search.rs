// src/gui/actions/search.rs
use std::thread;

use eframe::egui;

use crate::{gui::app::App, lookup::prepare_query};

/// Validate the form, record it in history and fetch on a worker thread.
pub fn search(app: &mut App, ctx: &egui::Context) {
    let query = {
        let gui = &mut app.state.gui;
        match prepare_query(&gui.region, &gui.realm, &gui.name) {
            Ok(q) => {
                gui.form_error = None;
                q
            }
            Err(e) => {
                logd!("Search: Rejected before fetch: {}", e);
                gui.form_error = Some(e.to_string());
                return;
            }
        }
    };

    let started = match app.lookup.lock() {
        Ok(mut session) => session.begin(query.clone()),
        Err(_) => false,
    };
    if !started {
        return;
    }

    app.prefs.add_to_history(&query);
    app.history = app.prefs.history();
    app.state.gui.show_history = false;
    app.avatar.clear();
    logd!("Search: worker spawned for {}", query.name);

    let client = app.client.clone();
    let slot = app.lookup.clone();
    let ctx2 = ctx.clone();

    // → This is where the lookup happens ←
    thread::spawn(move || {
        let outcome = client.fetch(&query);
        if let Ok(mut session) = slot.lock() {
            session.finish(outcome);
        }
        ctx2.request_repaint();
    });
}

/// Fill the form from a history entry.
pub fn pick_history(app: &mut App, idx: usize) {
    let Some(entry) = app.history.get(idx).cloned() else { return };
    let gui = &mut app.state.gui;
    gui.region = entry.region;
    gui.realm = entry.realm;
    gui.name = entry.name;
    gui.show_history = false;
    gui.form_error = None;
    logf!("UI: History pick → {}-{}-{}", gui.region, gui.realm, gui.name);
}
