// src/config/state.rs
use super::consts::{DEFAULT_OUT_DIR, DEFAULT_REGION};
use super::options::StyleConfig;

/// Lookup form contents and panel toggles. Not persisted.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub region: String,
    pub realm: String,
    pub name: String,

    /// Inline validation message under the form
    pub form_error: Option<String>,

    pub show_history: bool,

    /// Where "Download" writes the generated file
    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            region: s!(DEFAULT_REGION),
            realm: s!(),
            name: s!(),
            form_error: None,
            show_history: false,
            out_dir_text: s!(DEFAULT_OUT_DIR),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub config: StyleConfig,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(config: StyleConfig) -> Self {
        Self { config, gui: GuiState::default() }
    }
}
