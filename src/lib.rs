//! picdrop - a drag-and-drop picture upload dialog
//!
//! Binds the headless controller from `picdrop_core` to browser markup when
//! built for wasm, and to a logging simulator on native targets.

pub mod config;
pub mod constants;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::{FileUploader, ProgressBar};
#[cfg(target_arch = "wasm32")]
pub use wasm::*;
