// src/gui/actions/copy.rs
use std::time::Instant;

use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(character) = app.character() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no character");
        return;
    };

    let txt = s!(app.embed_code(&character));
    logf!("Copy: {} bytes for {}", txt.len(), character.name);

    ui_ctx.copy_text(txt);
    app.copied_at = Some(Instant::now());
    app.status("Copied to clipboard");
}
