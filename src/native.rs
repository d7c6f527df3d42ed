//! Native (non-browser) driver for the dialog controller.
//!
//! Renders every view call as a log line and drives sends with a blocking
//! sleep loop in place of browser timers.

use picdrop_core::{
    CancelToken, DialogState, FileInfo, Item, ItemId, SendStep, SendSummary, Thumbnail,
    Uploader, UploaderError, UploaderSetup, UploaderView, count_suffix,
};

use crate::config::UploaderConfig;

/// View that narrates the dialog through the `log` facade.
#[derive(Debug, Default)]
pub struct LogView {
    /// Last progress value logged, used to avoid repeating it
    last_progress: Option<u8>,
}

impl LogView {
    /// Create a logging view.
    pub fn new() -> Self {
        Self::default()
    }
}

fn thumbnail_label(thumbnail: &Thumbnail) -> &'static str {
    match thumbnail {
        Thumbnail::Loading => "spinner",
        Thumbnail::DataUrl(_) => "thumbnail",
        Thumbnail::Placeholder => "placeholder",
    }
}

impl UploaderView for LogView {
    fn show_count(&mut self, count: usize) {
        log::info!("🔢 {} picture{}", count, count_suffix(count));
    }

    fn set_dialog_state(&mut self, state: DialogState) {
        log::info!("🔄 Dialog is now {}", state.class_name());
    }

    fn show_warning(&mut self, message: Option<&str>) {
        match message {
            Some(message) => log::warn!("❗ {}", message),
            None => log::debug!("Warning panel cleared"),
        }
    }

    fn insert_item(&mut self, item: &Item) {
        log::info!(
            "➕ '{}' ({}) shown with {}",
            item.name,
            item.id,
            thumbnail_label(&item.thumbnail)
        );
    }

    fn update_item(&mut self, item: &Item) {
        log::debug!(
            "✏️ '{}' is {:?}{}",
            item.name,
            item.state,
            if item.selected { ", selected" } else { "" }
        );
    }

    fn detach_item(&mut self, id: ItemId) {
        log::info!("➖ {} taken out of the grid", id);
    }

    fn discard_item(&mut self, id: ItemId) {
        log::debug!("🗑️ {} discarded", id);
    }

    fn show_undo_banner(&mut self, visible: bool, label: Option<&str>) {
        match (visible, label) {
            (true, Some(label)) => log::info!("↩️ Undo available for '{}'", label),
            (true, None) => log::info!("↩️ Undo available"),
            (false, _) => log::debug!("Undo banner hidden"),
        }
    }

    fn show_current_upload(&mut self, name: &str, thumbnail: &Thumbnail) {
        log::info!("📤 Now sending '{}' ({})", name, thumbnail_label(thumbnail));
        self.last_progress = None;
    }

    fn set_progress(&mut self, percent: u8) {
        if self.last_progress != Some(percent) {
            log::debug!("⏳ {}%", percent);
            self.last_progress = Some(percent);
        }
    }

    fn set_sent_count(&mut self, sent: usize) {
        log::info!("✅ {} sent", sent);
    }

    fn set_pending_count(&mut self, pending: usize) {
        log::info!("📦 {} to send", pending);
    }
}

/// Options for a simulated session.
#[derive(Debug, Clone, Default)]
pub struct SimulationOptions {
    /// Dialog configuration
    pub config: UploaderConfig,
    /// Cancel the send after this many ticks
    pub cancel_after: Option<usize>,
    /// Don't sleep between ticks
    pub fast: bool,
}

/// Stage `files` in a fresh dialog and run one send to completion.
///
/// There is no file reading on native, so every item gets the placeholder
/// thumbnail straight away.
pub fn simulate(
    files: &[FileInfo],
    options: &SimulationOptions,
) -> Result<SendSummary, UploaderError> {
    let setup = UploaderSetup {
        settings: options.config.settings(),
        capabilities: picdrop_core::Capabilities {
            thumbnail_reader: false,
            class_lookup: true,
        },
        has_grid: true,
    };
    let mut uploader = Uploader::new(LogView::new(), setup);

    let staged = uploader.add_files(files);
    log::info!("🖼️ Staged {} of {} files", staged.len(), files.len());

    let token = CancelToken::new();
    let mut step = uploader.send(token.clone())?;
    let mut ticks = 0usize;

    loop {
        match step {
            SendStep::Finished(summary) => return Ok(summary),
            SendStep::Scheduled(delay) => {
                if !options.fast {
                    std::thread::sleep(delay);
                }
                ticks += 1;
                if options.cancel_after == Some(ticks) {
                    token.cancel();
                }
                step = uploader.tick()?;
            }
        }
    }
}
