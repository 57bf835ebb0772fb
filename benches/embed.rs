// benches/embed.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use wow_overlay::{
    character::{CharacterRecord, Gear, GuildRef},
    config::options::{ColorScheme, Layout, StyleConfig},
    embed::generate_embed,
    overlay::OverlayView,
};

fn sample() -> CharacterRecord {
    CharacterRecord {
        name: "Thrall".into(),
        class: "Shaman".into(),
        active_spec_name: "Enhancement".into(),
        region: "us".into(),
        realm: "Stormrage".into(),
        gear: Some(Gear { item_level_equipped: 639.0, ..Default::default() }),
        guild: Some(GuildRef { name: "Frostwolf".into(), realm: "Stormrage".into() }),
        ..Default::default()
    }
}

fn bench_embed(c: &mut Criterion) {
    let character = sample();
    let default_cfg = StyleConfig::default();
    let custom_cfg = StyleConfig {
        color_scheme: ColorScheme::Custom,
        layout: Layout::Vertical,
        background_transparent: false,
        ..StyleConfig::default()
    };

    c.bench_function("embed_default", |b| {
        b.iter(|| black_box(generate_embed(black_box(&character), black_box(&default_cfg)).len()))
    });

    c.bench_function("embed_custom_vertical", |b| {
        b.iter(|| black_box(generate_embed(black_box(&character), black_box(&custom_cfg)).len()))
    });

    c.bench_function("overlay_view", |b| {
        b.iter(|| black_box(OverlayView::build(black_box(&character), black_box(&default_cfg))))
    });
}

criterion_group!(benches, bench_embed);
criterion_main!(benches);
