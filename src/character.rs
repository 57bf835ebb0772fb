// src/character.rs
//
// Character profile as returned by the Raider.IO profile endpoint.
// Deserialization is lenient: every scalar defaults when missing or null and
// the optional sections (scores, gear, guild) become `None` when absent or null.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub race: String,
    #[serde(deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active_spec_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active_spec_role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(deserialize_with = "null_as_default")]
    pub faction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub achievement_points: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub honorable_kills: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_banner: String,
    pub mythic_plus_scores_by_season: Option<Vec<SeasonScores>>,
    pub gear: Option<Gear>,
    pub guild: Option<GuildRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonScores {
    #[serde(deserialize_with = "null_as_default")]
    pub season: String,
    /// Keyed by role or spec slot: `all`, `dps`, `healer`, `tank`, `spec_0`..`spec_3`.
    #[serde(deserialize_with = "scores_skip_null")]
    pub scores: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gear {
    #[serde(deserialize_with = "null_as_default")]
    pub item_level_equipped: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub item_level_total: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub artifact_traits: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildRef {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub realm: String,
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Null score slots are dropped rather than failing the whole profile.
fn scores_skip_null<'de, D>(d: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Option<f64>>>::deserialize(d)?.unwrap_or_default();
    Ok(raw.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))).collect())
}

impl CharacterRecord {
    /// Current-season overall score, if the profile carried one.
    pub fn current_score(&self) -> Option<f64> {
        self.mythic_plus_scores_by_season
            .as_ref()?
            .first()?
            .scores
            .get("all")
            .copied()
    }

    /// Overall score rounded for display; `None` unless strictly positive.
    pub fn display_score(&self) -> Option<i64> {
        match self.current_score() {
            Some(score) if score > 0.0 => Some(score.round() as i64),
            _ => None,
        }
    }

    /// Equipped item level; `None` when gear is absent or reports zero.
    pub fn item_level(&self) -> Option<f64> {
        match &self.gear {
            Some(gear) if gear.item_level_equipped > 0.0 => Some(gear.item_level_equipped),
            _ => None,
        }
    }

    pub fn guild_name(&self) -> Option<&str> {
        self.guild.as_ref().map(|g| g.name.as_str())
    }
}
