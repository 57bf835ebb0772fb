// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,download,search,...}.

mod copy;      // src/gui/actions/copy.rs
mod download;  // src/gui/actions/download.rs
mod search;    // src/gui/actions/search.rs

pub use copy::copy;
pub use download::{download, open_output_folder};
pub use search::{pick_history, search};
