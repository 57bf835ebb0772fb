// src/cli.rs
//
// Headless generator: look up one character and write its overlay document.
// Style defaults come from the same preference store the GUI uses.

use std::{env, io::Write, path::PathBuf};

use color_eyre::eyre::{bail, eyre, Result, WrapErr};

use crate::{
    config::{
        consts::{DEFAULT_OUT_DIR, DEFAULT_REGION},
        options::{ColorScheme, FontSize, Layout, StyleConfig},
    },
    core::net::ProfileClient,
    embed, file,
    lookup::prepare_query,
    store::{FileStore, Preferences},
    style::parse_css_color,
};

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub region: Option<String>,
    pub realm: Option<String>,
    pub name: Option<String>,
    /// `-` means stdout
    pub out: Option<String>,

    pub font_size: Option<FontSize>,
    pub scheme: Option<ColorScheme>,
    pub layout: Option<Layout>,
    pub opaque: bool,
    pub hide_realm: bool,
    pub hide_guild: bool,
    pub hide_item_level: bool,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: Option<String>,

    pub save_config: bool,
    pub history: bool,
    pub verbose: bool,
    pub help: bool,
}

pub fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    if args.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    crate::log::init_stderr(args.verbose);

    let mut prefs = Preferences::new(FileStore::default());

    if args.history {
        for e in prefs.history() {
            println!("{}\t{}\t{}", e.region, e.realm, e.name);
        }
        return Ok(());
    }

    let mut config = prefs.load_config();
    apply_style(&args, &mut config);
    if args.save_config {
        prefs.save_config(&config);
        logf!("CLI: Config saved");
    }

    let (Some(realm), Some(name)) = (args.realm.as_deref(), args.name.as_deref()) else {
        if args.save_config {
            return Ok(());
        }
        bail!("Specify --realm <realm> and --name <name> (see --help)");
    };
    let region = args.region.as_deref().unwrap_or(DEFAULT_REGION);

    let query = prepare_query(region, realm, name)?;
    prefs.add_to_history(&query);

    let client = ProfileClient::new()?;
    let character = client
        .fetch(&query)
        .wrap_err_with(|| format!("Lookup failed for {}-{}-{}", query.region, query.realm, query.name))?;

    let html = embed::generate_embed(&character, &config);

    match args.out.as_deref() {
        Some("-") => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
        Some(path) => {
            let path = file::write_overlay_to(&PathBuf::from(file::normalize_separators(path)), &html)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let path = file::write_overlay(&file::normalize_dir_path(DEFAULT_OUT_DIR), &character, &html)?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Flags override the stored config; anything not given is left alone.
pub fn apply_style(args: &Args, config: &mut StyleConfig) {
    if let Some(v) = args.font_size { config.font_size = v; }
    if let Some(v) = args.scheme { config.color_scheme = v; }
    if let Some(v) = args.layout { config.layout = v; }
    if args.opaque { config.background_transparent = false; }
    if args.hide_realm { config.show_realm = false; }
    if args.hide_guild { config.show_guild = false; }
    if args.hide_item_level { config.show_item_level = false; }
    if let Some(v) = &args.primary { config.custom_colors.primary = v.clone(); }
    if let Some(v) = &args.secondary { config.custom_colors.secondary = v.clone(); }
    if let Some(v) = &args.background { config.custom_colors.background = v.clone(); }
}

pub fn parse_args<I>(raw: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut a = Args::default();
    let mut args = raw.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match arg.as_str() {
            "-r" | "--region" => a.region = Some(value(&arg)?.to_ascii_lowercase()),
            "--realm" => a.realm = Some(value(&arg)?),
            "-n" | "--name" => a.name = Some(value(&arg)?),
            "-o" | "--out" => a.out = Some(value(&arg)?),
            "--font-size" => {
                let v = value(&arg)?;
                a.font_size = Some(FontSize::parse(&v).ok_or_else(|| eyre!("Unknown font size: {v}"))?);
            }
            "--scheme" => {
                let v = value(&arg)?;
                a.scheme = Some(ColorScheme::parse(&v).ok_or_else(|| eyre!("Unknown color scheme: {v}"))?);
            }
            "--layout" => {
                let v = value(&arg)?;
                a.layout = Some(Layout::parse(&v).ok_or_else(|| eyre!("Unknown layout: {v}"))?);
            }
            "--opaque" => a.opaque = true,
            "--hide-realm" => a.hide_realm = true,
            "--hide-guild" => a.hide_guild = true,
            "--hide-ilvl" => a.hide_item_level = true,
            "--primary" => a.primary = Some(color(value(&arg)?)?),
            "--secondary" => a.secondary = Some(color(value(&arg)?)?),
            "--background" => a.background = Some(color(value(&arg)?)?),
            "--save-config" => a.save_config = true,
            "--history" => a.history = true,
            "-v" | "--verbose" => a.verbose = true,
            "-h" | "--help" => a.help = true,
            _ => bail!("Unknown arg: {arg}"),
        }
    }
    Ok(a)
}

fn color(v: String) -> Result<String> {
    match parse_css_color(&v) {
        Some(_) => Ok(v),
        None => Err(eyre!("Not a color: {v}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> Result<Args> {
        parse_args(v.iter().map(|s| s!(*s)))
    }

    #[test]
    fn lookup_flags() {
        let a = parse(&["--region", "EU", "--realm", "Silvermoon", "-n", "Jaina", "-o", "-"]).unwrap();
        assert_eq!(a.region.as_deref(), Some("eu"));
        assert_eq!(a.realm.as_deref(), Some("Silvermoon"));
        assert_eq!(a.name.as_deref(), Some("Jaina"));
        assert_eq!(a.out.as_deref(), Some("-"));
    }

    #[test]
    fn style_flags_override_config() {
        let a = parse(&["--scheme", "custom", "--primary", "#ff0000", "--layout", "vertical", "--hide-guild", "--opaque"]).unwrap();
        let mut cfg = StyleConfig::default();
        apply_style(&a, &mut cfg);
        assert_eq!(cfg.color_scheme, ColorScheme::Custom);
        assert_eq!(cfg.layout, Layout::Vertical);
        assert_eq!(cfg.custom_colors.primary, "#ff0000");
        assert!(!cfg.show_guild);
        assert!(cfg.show_realm);
        assert!(!cfg.background_transparent);
    }

    #[test]
    fn bad_values_rejected() {
        assert!(parse(&["--font-size", "huge"]).is_err());
        assert!(parse(&["--primary", "red; }"]).is_err());
        assert!(parse(&["--realm"]).is_err());
        assert!(parse(&["--wat"]).is_err());
    }
}
