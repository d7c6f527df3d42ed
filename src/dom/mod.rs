//! Browser binding for the upload dialog.
//!
//! Locates the dialog markup, renders the controller through [`DomView`],
//! turns DOM events into controller calls and drives sends with
//! `setTimeout`.

mod elements;
mod progress_bar;
mod uploader;
mod view;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use picdrop_core::Uploader;

pub use elements::DialogElements;
pub use progress_bar::ProgressBar;
pub use uploader::FileUploader;
pub use view::DomView;

/// Controller shared between the JS handle and the DOM listeners.
pub type SharedUploader = Rc<RefCell<Uploader<DomView>>>;

/// Handle held by listeners so a dropped dialog stops reacting.
pub type WeakUploader = Weak<RefCell<Uploader<DomView>>>;

/// Run `f` against the controller if it is still alive and not busy.
pub fn with_uploader<R>(
    handle: &WeakUploader,
    f: impl FnOnce(&mut Uploader<DomView>) -> R,
) -> Option<R> {
    let shared = handle.upgrade()?;
    let Ok(mut uploader) = shared.try_borrow_mut() else {
        log::warn!("⚠️ Uploader busy - event dropped");
        return None;
    };
    Some(f(&mut uploader))
}
