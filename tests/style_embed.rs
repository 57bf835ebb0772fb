// tests/style_embed.rs
//
// Style resolution and the generated overlay document.

use wow_overlay::character::{CharacterRecord, Gear, GuildRef, SeasonScores};
use wow_overlay::config::options::{ColorScheme, FontSize, Layout, StyleConfig};
use wow_overlay::embed::{generate_embed, FETCH_ERROR_MESSAGE, LOADING_MESSAGE};
use wow_overlay::overlay::OverlayView;
use wow_overlay::style::{self, ResolvedStyle, CLASS_COLORS};

fn character(class: &str) -> CharacterRecord {
    CharacterRecord {
        name: "Thrall".into(),
        race: "Orc".into(),
        class: class.into(),
        active_spec_name: "Arms".into(),
        region: "us".into(),
        realm: "Stormrage".into(),
        thumbnail_url: "https://render.worldofwarcraft.com/us/character/thrall.jpg".into(),
        mythic_plus_scores_by_season: Some(vec![SeasonScores {
            season: "season-tww-1".into(),
            scores: [("all".to_string(), 2874.6)].into_iter().collect(),
        }]),
        gear: Some(Gear { item_level_equipped: 639.0, ..Default::default() }),
        guild: Some(GuildRef { name: "Frostwolf".into(), realm: "Stormrage".into() }),
        ..Default::default()
    }
}

#[test]
fn default_warrior_uses_class_color() {
    let s = ResolvedStyle::resolve(&StyleConfig::default(), "Warrior");
    assert_eq!(s.text_color, "#C69B6D");
    assert_eq!(s.class_color, "#C69B6D");
    assert_eq!(s.secondary_color, "#9CA3AF");
    assert_eq!(s.background, "transparent");
    assert_eq!(s.font_size_px, 16);
}

#[test]
fn minimal_opaque_large() {
    let cfg = StyleConfig {
        background_transparent: false,
        color_scheme: ColorScheme::Minimal,
        font_size: FontSize::Large,
        ..StyleConfig::default()
    };
    let s = ResolvedStyle::resolve(&cfg, "Mage");
    assert_eq!(s.text_color, "#FFFFFF");
    assert_eq!(s.background, "rgba(17, 24, 39, 0.9)");
    assert_eq!(s.font_size_px, 18);
    // the avatar ring keeps the class color under every scheme
    assert_eq!(s.class_color, "#3FC7EB");
}

#[test]
fn custom_scheme_uses_custom_colors() {
    let mut cfg = StyleConfig { background_transparent: false, ..StyleConfig::default() };
    cfg.color_scheme = ColorScheme::Custom;
    let s = ResolvedStyle::resolve(&cfg, "Warrior");
    assert_eq!(s.text_color, cfg.custom_colors.primary);
    assert_eq!(s.secondary_color, cfg.custom_colors.secondary);
    assert_eq!(s.background, cfg.custom_colors.background);

    cfg.background_transparent = true;
    assert_eq!(style::background_color(&cfg), "transparent");
}

#[test]
fn unknown_class_is_white() {
    assert_eq!(style::class_color("Necromancer"), "#FFFFFF");
    assert_eq!(style::class_color(""), "#FFFFFF");
}

#[test]
fn embed_is_deterministic() {
    let c = character("Warrior");
    let cfg = StyleConfig::default();
    assert_eq!(generate_embed(&c, &cfg), generate_embed(&c, &cfg));
}

#[test]
fn embed_carries_resolved_style_and_identity() {
    let c = character("Warrior");
    let cfg = StyleConfig::default();
    let doc = generate_embed(&c, &cfg);

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>WoW Character Overlay - Thrall</title>"));
    assert!(doc.contains("color: #C69B6D;"));
    assert!(doc.contains("background: transparent;"));
    assert!(doc.contains("font-size: 16px;"));
    assert!(doc.contains("region: 'us'"));
    assert!(doc.contains("realm: 'Stormrage'"));
    assert!(doc.contains("name: 'Thrall'"));
    assert!(doc.contains("showRealm: true"));
    assert!(doc.contains("1800000"));
    assert!(doc.contains("https://raider.io/api/v1/characters/profile"));
    assert!(!doc.contains("{{"));
}

#[test]
fn embed_reflects_flags_and_layout() {
    let c = character("Warrior");
    let cfg = StyleConfig {
        show_realm: false,
        show_item_level: false,
        show_guild: false,
        layout: Layout::Vertical,
        ..StyleConfig::default()
    };
    let doc = generate_embed(&c, &cfg);
    assert!(doc.contains("showRealm: false"));
    assert!(doc.contains("showItemLevel: false"));
    assert!(doc.contains("showGuild: false"));
    assert!(doc.contains("display: block;"));

    let horizontal = generate_embed(&c, &StyleConfig::default());
    assert!(horizontal.contains("display: flex;"));
    assert_ne!(doc, horizontal);
}

#[test]
fn embed_ships_every_class_color() {
    let doc = generate_embed(&character("Priest"), &StyleConfig::default());
    for (class, color) in CLASS_COLORS {
        assert!(doc.contains(&format!("'{class}': '{color}'")), "missing {class}");
    }
}

#[test]
fn hostile_identity_is_escaped() {
    let mut c = character("Warrior");
    c.name = "</script><b>x".into();
    c.realm = "O'Brien".into();
    let doc = generate_embed(&c, &StyleConfig::default());
    assert!(!doc.contains("</script><b>"));
    assert!(doc.contains("&lt;/script&gt;&lt;b&gt;x"));
    assert!(doc.contains(r"realm: 'O\'Brien'"));
}

#[test]
fn preview_and_document_agree_on_colors() {
    let c = character("Druid");
    let mut cfg = StyleConfig { background_transparent: false, ..StyleConfig::default() };
    cfg.color_scheme = ColorScheme::Custom;
    cfg.custom_colors.primary = "#123456".into();

    let view = OverlayView::build(&c, &cfg);
    let doc = generate_embed(&c, &cfg);
    assert!(doc.contains(&format!("color: {};", view.style.text_color)));
    assert!(doc.contains(&format!("background: {};", view.style.background)));
    assert!(doc.contains(&format!("border: 2px solid {};", view.style.class_color)));
    assert!(doc.contains(&format!("secondaryColor: '{}'", view.style.secondary_color)));
    assert!(doc.contains(&format!("color: {};", view.style.secondary_color)));
    assert_eq!(view.score_line().as_deref(), Some("Mythic+ Score: 2875"));
}

#[test]
fn custom_secondary_is_frozen_into_script() {
    let mut cfg = StyleConfig::default();
    cfg.color_scheme = ColorScheme::Custom;
    cfg.custom_colors.secondary = "#ABCDEF".into();
    let doc = generate_embed(&character("Warrior"), &cfg);
    assert!(doc.contains("secondaryColor: '#ABCDEF'"));

    let class_doc = generate_embed(&character("Warrior"), &StyleConfig::default());
    assert!(class_doc.contains("secondaryColor: '#9CA3AF'"));
}

#[test]
fn script_handles_failure_and_visibility() {
    let doc = generate_embed(&character("Warrior"), &StyleConfig::default());
    assert!(doc.contains(&format!(r#"<div class="error">{FETCH_ERROR_MESSAGE}</div>"#)));
    assert!(doc.contains(&format!(r#"<div class="loading">{LOADING_MESSAGE}</div>"#)));
    assert!(doc.contains("addEventListener('visibilitychange'"));
    assert!(doc.contains("!document.hidden"));
    assert!(doc.contains("setInterval(updateOverlay, 1800000)"));
}
