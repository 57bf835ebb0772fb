// src/config/consts.rs

// Net config
pub const API_BASE: &str = "https://raider.io/api/v1/characters/profile";
pub const PROFILE_FIELDS: &str = "mythic_plus_scores_by_season:current,gear,guild";
pub const USER_AGENT: &str = concat!("wow_overlay/", env!("CARGO_PKG_VERSION"));

/// (value, label) pairs offered by the region picker.
pub const REGIONS: &[(&str, &str)] = &[
    ("us", "US"),
    ("eu", "EU"),
    ("kr", "KR"),
    ("tw", "TW"),
];
pub const DEFAULT_REGION: &str = "us";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const OVERLAY_CONFIG_KEY: &str = "wow-overlay-config";
pub const SEARCH_HISTORY_KEY: &str = "wow-overlay-search-history";
pub const MAX_HISTORY_ITEMS: usize = 10;

// Generated overlay
pub const REFRESH_INTERVAL_MS: u64 = 30 * 60 * 1000;
pub const OVERLAY_WIDTH: u32 = 400;
pub const OVERLAY_HEIGHT: u32 = 150;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DOWNLOAD_PREFIX: &str = "wow-overlay-";
