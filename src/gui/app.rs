// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::Instant,
};

use eframe::egui;

use crate::{
    character::CharacterRecord,
    config::{options::StyleConfig, state::AppState},
    core::net::ProfileClient,
    embed,
    lookup::{LookupSession, LookupState},
    store::{FileStore, Preferences, SearchEntry},
};

use super::{avatar::AvatarSlot, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app = App::new(FileStore::default())?;
    eframe::run_native(
        "WoW Overlay Generator",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

/// Last generated document, reused until the character or config changes.
struct EmbedCache {
    character: CharacterRecord,
    config: StyleConfig,
    html: String,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub prefs: Preferences<FileStore>,
    pub history: Vec<SearchEntry>,

    /// Config as last written to the store
    saved_config: StyleConfig,

    pub client: Arc<ProfileClient>,

    // the fetch worker settles this
    pub lookup: Arc<Mutex<LookupSession>>,

    pub avatar: AvatarSlot,

    pub status: String,
    pub copied_at: Option<Instant>,

    embed_cache: Option<EmbedCache>,
}

impl App {
    pub fn new(store: FileStore) -> crate::Result<Self> {
        let prefs = Preferences::new(store);
        let config = prefs.load_config();
        let history = prefs.history();
        let client = Arc::new(ProfileClient::new()?);

        logf!("Init: store={}, history={} entr(ies)", prefs.store().dir().display(), history.len());

        Ok(Self {
            state: AppState::new(config.clone()),
            prefs,
            history,
            saved_config: config,
            client,
            lookup: Arc::new(Mutex::new(LookupSession::new())),
            avatar: AvatarSlot::default(),
            status: s!("Idle"),
            copied_at: None,
            embed_cache: None,
        })
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Copy of the lookup slot for this frame.
    pub fn lookup_state(&self) -> LookupState {
        self.lookup
            .lock()
            .map(|s| s.state().clone())
            .unwrap_or_default()
    }

    pub fn is_searching(&self) -> bool {
        self.lookup.lock().map(|s| s.is_searching()).unwrap_or(false)
    }

    pub fn character(&self) -> Option<CharacterRecord> {
        self.lookup.lock().ok().and_then(|s| s.character().cloned())
    }

    /// Generated document for the current character + config.
    pub fn embed_code(&mut self, character: &CharacterRecord) -> &str {
        let stale = match &self.embed_cache {
            Some(c) => c.character != *character || c.config != self.state.config,
            None => true,
        };
        if stale {
            self.embed_cache = Some(EmbedCache {
                character: character.clone(),
                config: self.state.config.clone(),
                html: embed::generate_embed(character, &self.state.config),
            });
        }
        self.embed_cache.as_ref().map(|c| c.html.as_str()).unwrap_or_default()
    }

    /// Persist the config whenever it differs from what was last saved.
    fn persist_config_if_changed(&mut self) {
        if self.state.config != self.saved_config {
            self.prefs.save_config(&self.state.config);
            self.saved_config = self.state.config.clone();
            logd!("UI: Config saved → {:?}", self.state.config);
        }
    }

    fn sync_avatar(&mut self, ctx: &egui::Context) {
        self.avatar.poll(ctx);
        if let Some(c) = self.character() {
            let client = self.client.clone();
            self.avatar.request(&c.thumbnail_url, &client, ctx);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_avatar(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading("WoW Mythic+ OBS Overlay Generator");
            ui.label("Create customizable character overlays for your World of Warcraft streams");
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label("Powered by the");
                ui.hyperlink_to("Raider.IO API", "https://raider.io");
                ui.label("• Not affiliated with Blizzard Entertainment.");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    components::lookup_form::draw(ui, self);

                    ui.separator();

                    ui.columns(2, |cols| {
                        components::preview::draw(&mut cols[0], self);
                        cols[0].separator();
                        components::customization::draw(&mut cols[0], self);

                        components::embed_panel::draw(&mut cols[1], self);
                    });
                });
        });

        self.persist_config_if_changed();
    }
}
