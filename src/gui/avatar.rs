// src/gui/avatar.rs
//
// Background download + decode of the character thumbnail for the preview.
// A failed download just leaves the preview without a picture.

use std::{
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::{core::net::ProfileClient, error::Result};

enum Pending {
    Empty,
    Loading,
    Ready(ColorImage),
    Failed,
}

struct Shared {
    generation: u64,
    pending: Pending,
}

pub struct AvatarSlot {
    url: Option<String>,
    generation: u64,
    shared: Arc<Mutex<Shared>>,
    texture: Option<TextureHandle>,
}

impl Default for AvatarSlot {
    fn default() -> Self {
        Self {
            url: None,
            generation: 0,
            shared: Arc::new(Mutex::new(Shared { generation: 0, pending: Pending::Empty })),
            texture: None,
        }
    }
}

impl AvatarSlot {
    /// Forget the current picture; any download still running is discarded.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.url = None;
        self.texture = None;
        if let Ok(mut sh) = self.shared.lock() {
            sh.generation = self.generation;
            sh.pending = Pending::Empty;
        }
    }

    /// Start downloading `url` unless it's already the current picture.
    pub fn request(&mut self, url: &str, client: &Arc<ProfileClient>, ctx: &egui::Context) {
        if url.is_empty() || self.url.as_deref() == Some(url) {
            return;
        }
        self.clear();
        self.url = Some(s!(url));
        if let Ok(mut sh) = self.shared.lock() {
            sh.pending = Pending::Loading;
        }

        let generation = self.generation;
        let shared = self.shared.clone();
        let client = client.clone();
        let url = s!(url);
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let outcome = client.fetch_bytes(&url).and_then(|bytes| decode(&bytes));
            if let Ok(mut sh) = shared.lock() {
                if sh.generation != generation {
                    return;
                }
                sh.pending = match outcome {
                    Ok(img) => Pending::Ready(img),
                    Err(e) => {
                        logd!("Avatar: {} failed: {}", url, e);
                        Pending::Failed
                    }
                };
            }
            ctx2.request_repaint();
        });
    }

    /// Move a finished download onto the GPU. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let Ok(mut sh) = self.shared.lock() else { return };
        if let Pending::Ready(_) = sh.pending {
            if let Pending::Ready(img) = std::mem::replace(&mut sh.pending, Pending::Empty) {
                self.texture = Some(ctx.load_texture("avatar", img, TextureOptions::LINEAR));
            }
        }
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.texture.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.shared
            .lock()
            .map(|sh| matches!(sh.pending, Pending::Loading))
            .unwrap_or(false)
    }

    pub fn failed(&self) -> bool {
        self.shared
            .lock()
            .map(|sh| matches!(sh.pending, Pending::Failed))
            .unwrap_or(false)
    }
}

/// PNG/JPEG bytes → egui image.
pub fn decode(bytes: &[u8]) -> Result<ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw()))
}
