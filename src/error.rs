// src/error.rs
use crate::core::validate::ValidationError;

pub const NOT_FOUND_MESSAGE: &str =
    "Character not found. Please check the region, realm, and character name.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
    #[error("API Error: {status} - {text}")]
    Api { status: u16, text: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
