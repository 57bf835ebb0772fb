// src/gui/actions/download.rs
use std::path::Path;

use crate::{file, gui::app::App};

/// Save the generated overlay into the output folder.
pub fn download(app: &mut App) {
    let Some(character) = app.character() else {
        logd!("Download: Clicked, but there's no character");
        app.status("Nothing to download");
        return;
    };

    let dir = file::normalize_dir_path(&app.state.gui.out_dir_text);
    let html = s!(app.embed_code(&character));

    let msg = match file::write_overlay(&dir, &character, &html) {
        Ok(path) => {
            logf!("Download: OK → {}", path.display());
            format!("Saved {}", path.display())
        }
        Err(e) => {
            loge!("Download: Error: {}", e);
            format!("Download error: {e}")
        }
    };
    app.status(msg);
}

/// Open the output folder in the system file explorer.
pub fn open_output_folder(app: &mut App) {
    let dir = file::normalize_dir_path(&app.state.gui.out_dir_text);
    let folder_to_open = file::find_nearest_existing_parent(&dir);

    // Convert to absolute path to ensure correct folder is opened
    let absolute_folder = match std::fs::canonicalize(&folder_to_open) {
        Ok(abs_path) => abs_path,
        Err(e) => {
            let msg = format!("Cannot resolve folder path: {}", e);
            loge!("{}", msg);
            app.status(msg);
            return;
        }
    };

    if let Err(e) = open_folder_in_explorer(&absolute_folder) {
        loge!("Failed to open folder: {}", e);
        app.status(format!("Failed to open folder: {}", e));
    } else {
        logf!("Opened folder: {}", absolute_folder.display());
    }
}

/// Cross-platform function to open a folder in the system file explorer.
fn open_folder_in_explorer(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("explorer")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn explorer: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn open: {}", e))?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .map_err(|e| format!("Failed to spawn xdg-open: {}", e))?;
        Ok(())
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    {
        let _ = path;
        Err("Opening folders not supported on this platform".to_string())
    }
}
