// src/overlay.rs
//
// What the overlay shows for one (character, config) pair. The native preview
// draws exactly these lines; the generated document's script renders the same
// rules from live data.

use crate::{
    character::CharacterRecord,
    config::options::StyleConfig,
    style::ResolvedStyle,
};

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayView {
    pub style: ResolvedStyle,
    pub avatar_url: String,
    pub name: String,
    /// Present only when the realm is shown
    pub realm: Option<String>,
    /// "Class (Spec)"
    pub details: String,
    /// Rounded overall score, only when positive
    pub score: Option<i64>,
    pub item_level: Option<f64>,
    pub guild: Option<String>,
}

impl OverlayView {
    pub fn build(character: &CharacterRecord, config: &StyleConfig) -> Self {
        Self {
            style: ResolvedStyle::resolve(config, &character.class),
            avatar_url: character.thumbnail_url.clone(),
            name: character.name.clone(),
            realm: config.show_realm.then(|| character.realm.clone()),
            details: format!("{} ({})", character.class, character.active_spec_name),
            score: character.display_score(),
            item_level: if config.show_item_level { character.item_level() } else { None },
            guild: if config.show_guild { character.guild_name().map(String::from) } else { None },
        }
    }

    pub fn score_line(&self) -> Option<String> {
        self.score.map(|s| format!("Mythic+ Score: {s}"))
    }

    pub fn item_level_line(&self) -> Option<String> {
        self.item_level.map(|il| format!("Item Level: {il}"))
    }

    pub fn guild_line(&self) -> Option<String> {
        self.guild.as_ref().map(|g| format!("<{g}>"))
    }

    /// Item level and guild, in display order.
    pub fn additional_lines(&self) -> Vec<String> {
        self.item_level_line().into_iter().chain(self.guild_line()).collect()
    }
}
