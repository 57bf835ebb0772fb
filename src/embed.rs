// src/embed.rs
//
// Standalone overlay document for an OBS browser source.
//
// The document is rendered in a sandbox with no link back to this app, so all
// styling and the visibility flags are frozen into it here. Only the
// character's statistics are refreshed in place by the embedded script
// (on load, every 30 minutes, and whenever the source becomes visible again).

use crate::{
    character::CharacterRecord,
    config::{
        consts::{API_BASE, PROFILE_FIELDS, REFRESH_INTERVAL_MS},
        options::{Layout, StyleConfig},
    },
    core::html::{escape_html, escape_js, fill_template},
    style::{CLASS_COLORS, ResolvedStyle, WHITE},
};

pub const LOADING_MESSAGE: &str = "Loading character data...";
pub const FETCH_ERROR_MESSAGE: &str =
    "Unable to load character data. Please check your internet connection.";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>WoW Character Overlay - {{title_name}}</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
            background: transparent;
            overflow: hidden;
            padding: 16px;
        }

        .overlay-container {
            font-size: {{font_size}}px;
            color: {{text_color}};
            background: {{background}};
            border-radius: 8px;
            display: {{display}};
            align-items: {{align_items}};
            gap: {{gap}};
            width: fit-content;
            max-width: 400px;
            padding: 16px;
        }

        .avatar {
            width: 48px;
            height: 48px;
            border-radius: 50%;
            border: 2px solid {{class_color}};
            flex-shrink: 0;
        }

        .character-info {
            {{info_rule}}
        }

        .character-name {
            font-weight: bold;
            {{name_rule}}
            margin-bottom: 2px;
        }

        .character-details {
            color: {{secondary_color}};
            margin-bottom: 4px;
        }

        .mythic-score {
            font-weight: 600;
            margin-bottom: 4px;
        }

        .additional-info {
            {{additional_rule}}
            color: {{secondary_color}};
        }

        .additional-info > div {
            {{additional_item_rule}}
        }

        .error {
            color: #EF4444;
            padding: 16px;
            background: rgba(239, 68, 68, 0.1);
            border-radius: 8px;
            border: 1px solid rgba(239, 68, 68, 0.3);
        }

        .loading {
            color: {{text_color}};
            padding: 16px;
            text-align: center;
        }
    </style>
</head>
<body>
    <div id="overlay">
        <div class="loading">{{loading_message}}</div>
    </div>

    <script>
        const API_BASE = '{{api_base}}';
        const API_FIELDS = '{{api_fields}}';
        const CHARACTER_DATA = {
            region: '{{region}}',
            realm: '{{realm}}',
            name: '{{name}}'
        };

        const OVERLAY_CONFIG = {
            showRealm: {{show_realm}},
            showItemLevel: {{show_item_level}},
            showGuild: {{show_guild}},
            secondaryColor: '{{secondary_color_js}}'
        };

        const WOW_CLASS_COLORS = {
{{class_colors}}
        };

        function esc(value) {
            return String(value == null ? '' : value)
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;')
                .replace(/'/g, '&#39;');
        }

        async function fetchCharacterData() {
            try {
                const params = new URLSearchParams({
                    region: CHARACTER_DATA.region,
                    realm: CHARACTER_DATA.realm,
                    name: CHARACTER_DATA.name,
                    fields: API_FIELDS
                });

                const response = await fetch(API_BASE + '?' + params.toString());
                if (!response.ok) throw new Error('Character not found');

                return await response.json();
            } catch (error) {
                console.error('Failed to fetch character data:', error);
                return null;
            }
        }

        function renderOverlay(character) {
            const overlay = document.getElementById('overlay');

            if (!character) {
                overlay.innerHTML = '<div class="error">{{error_message}}</div>';
                return;
            }

            const seasons = character.mythic_plus_scores_by_season;
            const currentScore = seasons && seasons[0] && seasons[0].scores ? (seasons[0].scores.all || 0) : 0;
            const itemLevel = character.gear ? (character.gear.item_level_equipped || 0) : 0;

            let characterNameHtml = esc(character.name);
            if (OVERLAY_CONFIG.showRealm) {
                characterNameHtml += ' <span style="color: ' + OVERLAY_CONFIG.secondaryColor + '">- ' + esc(character.realm) + '</span>';
            }

            let mythicScoreHtml = '';
            if (currentScore > 0) {
                mythicScoreHtml = '<div class="mythic-score">Mythic+ Score: ' + Math.round(currentScore) + '</div>';
            }

            let additionalInfoHtml = '';
            const additionalItems = [];

            if (OVERLAY_CONFIG.showItemLevel && itemLevel > 0) {
                additionalItems.push('<div>Item Level: ' + itemLevel + '</div>');
            }

            if (OVERLAY_CONFIG.showGuild && character.guild) {
                additionalItems.push('<div>&lt;' + esc(character.guild.name) + '&gt;</div>');
            }

            if (additionalItems.length > 0) {
                additionalInfoHtml = '<div class="additional-info">' + additionalItems.join('') + '</div>';
            }

            const classColor = WOW_CLASS_COLORS[character.class] || '{{fallback_color}}';

            overlay.innerHTML =
                '<div class="overlay-container">' +
                    '<img src="' + esc(character.thumbnail_url) + '" alt="' + esc(character.name) + '" class="avatar" style="border-color: ' + classColor + '" />' +
                    '<div class="character-info">' +
                        '<div class="character-name">' + characterNameHtml + '</div>' +
                        '<div class="character-details">' + esc(character.class) + ' (' + esc(character.active_spec_name) + ')</div>' +
                        mythicScoreHtml +
                        additionalInfoHtml +
                    '</div>' +
                '</div>';
        }

        async function updateOverlay() {
            const character = await fetchCharacterData();
            renderOverlay(character);
        }

        // Initial load
        updateOverlay();

        // Auto-refresh
        setInterval(updateOverlay, {{refresh_ms}});

        // Refresh when the source becomes visible again
        document.addEventListener('visibilitychange', function() {
            if (!document.hidden) {
                updateOverlay();
            }
        });
    </script>
</body>
</html>"#;

/// Build the overlay document for `character` styled by `config`.
/// Output depends only on the two inputs.
pub fn generate_embed(character: &CharacterRecord, config: &StyleConfig) -> String {
    let style = ResolvedStyle::resolve(config, &character.class);
    let vertical = matches!(style.layout, Layout::Vertical);

    let font_size = style.font_size_px.to_string();
    let title_name = escape_html(&character.name);
    let region = escape_js(&character.region);
    let realm = escape_js(&character.realm);
    let name = escape_js(&character.name);
    let secondary_color_js = escape_js(&style.secondary_color);
    let class_colors = class_colors_js();
    let refresh_ms = REFRESH_INTERVAL_MS.to_string();

    let vars: &[(&str, &str)] = &[
        ("title_name", title_name.as_str()),
        ("font_size", font_size.as_str()),
        ("text_color", style.text_color.as_str()),
        ("background", style.background.as_str()),
        ("display", if vertical { "block" } else { "flex" }),
        ("align_items", if vertical { "flex-start" } else { "center" }),
        ("gap", if vertical { "8px" } else { "16px" }),
        ("class_color", style.class_color.as_str()),
        ("info_rule", if vertical { "margin-top: 8px;" } else { "flex: 1;" }),
        ("name_rule", if vertical { "" } else { "font-size: 1.125em;" }),
        ("secondary_color", style.secondary_color.as_str()),
        ("additional_rule", if vertical { "margin-top: 4px;" } else { "display: flex; gap: 16px;" }),
        ("additional_item_rule", if vertical { "margin-bottom: 2px;" } else { "" }),
        ("loading_message", LOADING_MESSAGE),
        ("api_base", API_BASE),
        ("api_fields", PROFILE_FIELDS),
        ("region", region.as_str()),
        ("realm", realm.as_str()),
        ("name", name.as_str()),
        ("show_realm", bool_js(config.show_realm)),
        ("show_item_level", bool_js(config.show_item_level)),
        ("show_guild", bool_js(config.show_guild)),
        ("secondary_color_js", secondary_color_js.as_str()),
        ("class_colors", class_colors.as_str()),
        ("error_message", FETCH_ERROR_MESSAGE),
        ("fallback_color", WHITE),
        ("refresh_ms", refresh_ms.as_str()),
    ];

    let doc = fill_template(TEMPLATE, vars);
    logd!("Embed: generated {} bytes for {} ({})", doc.len(), character.name, character.class);
    doc
}

fn bool_js(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// The shared class table rendered as object-literal entries.
fn class_colors_js() -> String {
    CLASS_COLORS
        .iter()
        .map(|(class, color)| format!("            '{}': '{}'", escape_js(class), color))
        .collect::<Vec<_>>()
        .join(",\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_placeholder_is_filled() {
        let doc = generate_embed(&CharacterRecord::default(), &StyleConfig::default());
        assert!(!doc.contains("{{"), "unfilled placeholder left in document");
        assert!(!doc.contains("}}"));
    }

    #[test]
    fn class_table_lists_every_class() {
        let js = class_colors_js();
        assert_eq!(js.lines().count(), CLASS_COLORS.len());
        assert!(js.contains("'Death Knight': '#C41E3A'"));
        assert!(!js.ends_with(','));
    }
}
