// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod character;
pub mod config;
pub mod core;
pub mod embed;
pub mod error;
pub mod file;
pub mod gui;
pub mod lookup;
pub mod overlay;
pub mod store;
pub mod style;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
