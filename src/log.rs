// src/log.rs
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::fmt::time;

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Route log output to `.store/debug.log` (GUI default).
/// Best-effort: if the file can't be opened or a subscriber is already set,
/// logging silently stays off.
pub fn init_file() {
    let _ = fs::create_dir_all(STORE_DIR);
    let path = Path::new(STORE_DIR).join(LOG_FILE);

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(time::uptime())
        .with_max_level(Level::DEBUG)
        .try_init();
}

/// Route log output to stderr (CLI). `verbose` lowers the threshold to DEBUG.
pub fn init_stderr(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(time::uptime())
        .with_max_level(level)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
