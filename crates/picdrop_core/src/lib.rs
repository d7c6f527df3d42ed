//! picdrop_core - headless state machine for the picdrop upload dialog.
//!
//! The crate models a picture upload dialog without any browser dependency:
//! file intake with thumbnails, selection, removal with undo, and a simulated
//! sequential upload driven by timer ticks. A front end implements
//! [`UploaderView`] to render state changes and calls [`Uploader::tick`]
//! whenever a [`SendStep::Scheduled`] delay elapses.

pub mod classes;
pub mod error;
pub mod file;
pub mod grid;
pub mod item;
pub mod queue;
pub mod removed;
pub mod send;
pub mod settings;
pub mod uploader;
pub mod view;
pub mod warnings;

#[cfg(test)]
mod tests;

pub use error::UploaderError;
pub use file::FileInfo;
pub use item::{Item, ItemId, ItemState, Thumbnail};
pub use queue::CancelToken;
pub use send::{SendStep, SendSummary};
pub use settings::{Capabilities, UploaderSettings, UploaderSetup};
pub use uploader::{Intake, Uploader};
pub use view::{DialogState, UploaderView, count_suffix, progress_width};
