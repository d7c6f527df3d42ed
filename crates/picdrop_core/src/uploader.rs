//! The upload dialog controller.
//!
//! `Uploader` owns every piece of dialog state: the picture grid, the
//! selection, the removed stack, the warning log and the active send. Each
//! operation mutates that state and reports the change to its view. Nothing
//! here touches the browser, so the same controller runs under the DOM
//! binding, the native simulator and the tests.

use crate::error::UploaderError;
use crate::file::FileInfo;
use crate::grid::PictureGrid;
use crate::item::{Item, ItemId, ItemState, Thumbnail};
use crate::queue::{CancelToken, UploadQueue};
use crate::removed::RemovedStack;
use crate::send::{Phase, SendSession, SendStep, SendSummary};
use crate::settings::{Capabilities, UploaderSettings, UploaderSetup};
use crate::view::{DialogState, UploaderView};
use crate::warnings::WarningLog;

/// Message shown when the dialog has no picture grid.
const BROKEN_STRUCTURE_MESSAGE: &str =
    "Sorry, the internal structure of the uploader seems to be broken - cannot upload pictures.";

/// Result of offering a file to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intake {
    /// A tentative item was created; call `thumbnail_ready` once the file is read
    AwaitingThumbnail(ItemId),
    /// The item was staged straight away with the placeholder thumbnail
    Staged(ItemId),
}

impl Intake {
    /// The item created for the file.
    pub fn id(&self) -> ItemId {
        match self {
            Intake::AwaitingThumbnail(id) | Intake::Staged(id) => *id,
        }
    }
}

/// Stateful controller for one upload dialog.
pub struct Uploader<V: UploaderView> {
    view: V,
    settings: UploaderSettings,
    capabilities: Capabilities,
    grid: Option<PictureGrid>,
    selection: Vec<ItemId>,
    removed: RemovedStack,
    warnings: WarningLog,
    count: usize,
    state: DialogState,
    session: Option<SendSession>,
    next_id: u64,
}

impl<V: UploaderView> Uploader<V> {
    /// Create a controller rendering into `view`.
    ///
    /// A setup without a picture grid still yields a controller, but it
    /// refuses to create items.
    pub fn new(mut view: V, setup: UploaderSetup) -> Self {
        let grid = if setup.has_grid {
            Some(PictureGrid::new())
        } else {
            log::warn!("⚠️ No picture grid - pictures cannot be added");
            None
        };

        if !setup.capabilities.thumbnail_reader {
            log::warn!("⚠️ No thumbnail reader - placeholder images will be shown");
        }

        view.show_count(0);
        view.set_dialog_state(DialogState::Empty);
        view.show_undo_banner(false, None);

        Self {
            view,
            settings: setup.settings,
            capabilities: setup.capabilities,
            grid,
            selection: Vec::new(),
            removed: RemovedStack::new(),
            warnings: WarningLog::new(),
            count: 0,
            state: DialogState::Empty,
            session: None,
            next_id: 0,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The view this controller renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Number of staged pictures (the displayed count).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current dialog state.
    pub fn dialog_state(&self) -> DialogState {
        self.state
    }

    /// Selected items, in selection order.
    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// The picture grid, if the dialog has one.
    pub fn grid(&self) -> Option<&PictureGrid> {
        self.grid.as_ref()
    }

    /// Look up an item in the grid.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.grid.as_ref()?.get(id)
    }

    /// The removed-items stack.
    pub fn removed(&self) -> &RemovedStack {
        &self.removed
    }

    /// Outstanding warnings.
    pub fn warnings(&self) -> &WarningLog {
        &self.warnings
    }

    /// Whether a send is running.
    pub fn is_sending(&self) -> bool {
        self.session.is_some()
    }

    /// Number of items still waiting in the active send.
    pub fn queued(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.queue.len())
    }

    /// Transfer timing in use.
    pub fn settings(&self) -> &UploaderSettings {
        &self.settings
    }

    // ========================================================================
    // Warnings
    // ========================================================================

    /// Log a warning and show it in the error panels.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("⚠️ {}", message);
        self.warnings.push(message);
        self.view.show_warning(self.warnings.current());
    }

    /// Dismiss the newest warning.
    pub fn dismiss_warning(&mut self) {
        if self.warnings.is_empty() {
            return;
        }
        let next = self.warnings.dismiss();
        self.view.show_warning(next);
    }

    /// Report a failed operation and hand the error back.
    fn fail<T>(&mut self, error: UploaderError) -> Result<T, UploaderError> {
        match &error {
            UploaderError::UnknownItem(_) => log::warn!("⚠️ {}", error),
            UploaderError::NotAnImage { name } => {
                self.warn(format!("{name} is not an image file - will not add"))
            }
            UploaderError::MissingMimeType { name } => {
                self.warn(format!("{name} may not be an image (no mime type). Will not add it."))
            }
            UploaderError::StructureMissing { .. } => {
                log::warn!("⚠️ {}", error);
                self.warn(BROKEN_STRUCTURE_MESSAGE);
            }
            _ => self.warn(error.to_string()),
        }
        Err(error)
    }

    // ========================================================================
    // Count and dialog state
    // ========================================================================

    fn refresh_count(&mut self) {
        let count = self.grid.as_ref().map_or(0, PictureGrid::staged_count);
        if count != self.count {
            log::debug!("🔢 Picture count {} -> {}", self.count, count);
        }
        self.count = count;
        self.view.show_count(count);

        if self.state != DialogState::Sending {
            self.set_state(if count == 0 {
                DialogState::Empty
            } else {
                DialogState::Collecting
            });
        }
    }

    fn set_state(&mut self, state: DialogState) {
        if self.state != state {
            log::debug!("🔄 Dialog {:?} -> {:?}", self.state, state);
            self.state = state;
            self.view.set_dialog_state(state);
        }
    }

    // ========================================================================
    // File intake
    // ========================================================================

    /// Offer a file to the dialog.
    ///
    /// Non-image files are rejected with a warning. Accepted files get a
    /// tentative item at the head of the grid right away.
    pub fn add_file(&mut self, file: &FileInfo) -> Result<Intake, UploaderError> {
        if let Err(error) = file.check_image() {
            return self.fail(error);
        }
        if self.grid.is_none() {
            return self.fail(UploaderError::structure_missing("picture grid"));
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;

        let item = Item::tentative(id, file.display_name());
        log::info!("🖼️ Adding '{}' ({})", item.name, id);
        self.view.insert_item(&item);
        if let Some(grid) = self.grid.as_mut() {
            grid.insert_head(item);
        }

        if self.capabilities.thumbnail_reader {
            Ok(Intake::AwaitingThumbnail(id))
        } else {
            self.thumbnail_ready(id, None)?;
            Ok(Intake::Staged(id))
        }
    }

    /// Offer a batch of files.
    ///
    /// Files that are not images are skipped. Any other failure ends the
    /// batch, since it would repeat for every remaining file.
    pub fn add_files<'a>(&mut self, files: impl IntoIterator<Item = &'a FileInfo>) -> Vec<Intake> {
        let mut intakes = Vec::new();
        for file in files {
            match self.add_file(file) {
                Ok(intake) => intakes.push(intake),
                Err(error) if error.is_invalid_input() => {}
                Err(_) => break,
            }
        }
        intakes
    }

    /// Finish loading a tentative item.
    ///
    /// `data_url` is the thumbnail read from the file, or `None` when it could
    /// not be read, in which case the placeholder graphic is used.
    pub fn thumbnail_ready(
        &mut self,
        id: ItemId,
        data_url: Option<String>,
    ) -> Result<(), UploaderError> {
        let Some(item) = self.grid.as_mut().and_then(|grid| grid.get_mut(id)) else {
            return self.fail(UploaderError::UnknownItem(id));
        };
        if item.state != ItemState::Pending {
            let error = UploaderError::InvalidTransition(format!(
                "thumbnail for {id} arrived twice"
            ));
            log::warn!("⚠️ {}", error);
            return Err(error);
        }

        item.thumbnail = match data_url {
            Some(url) => Thumbnail::DataUrl(url),
            None => Thumbnail::Placeholder,
        };
        item.state = ItemState::NeedsUpload;
        let snapshot = item.clone();

        log::debug!("✅ '{}' ready for upload", snapshot.name);
        self.view.update_item(&snapshot);
        self.refresh_count();
        Ok(())
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Handle a click on an item.
    ///
    /// Without `additive` the previous selection is cleared first. Items
    /// committed to a send cannot be selected.
    pub fn click_item(&mut self, id: ItemId, additive: bool) -> Result<(), UploaderError> {
        if self.item(id).is_none() {
            return self.fail(UploaderError::UnknownItem(id));
        }
        if !additive {
            self.clear_selection();
        }

        let Some(item) = self.grid.as_mut().and_then(|grid| grid.get_mut(id)) else {
            return Ok(());
        };
        if item.state == ItemState::WillUpload || item.selected {
            return Ok(());
        }

        item.selected = true;
        let snapshot = item.clone();
        self.view.update_item(&snapshot);
        self.selection.push(id);
        Ok(())
    }

    /// Deselect every item.
    pub fn clear_selection(&mut self) {
        let selected = std::mem::take(&mut self.selection);
        let Some(grid) = self.grid.as_mut() else {
            return;
        };
        for id in selected {
            if let Some(item) = grid.get_mut(id) {
                item.selected = false;
                self.view.update_item(item);
            }
        }
    }

    // ========================================================================
    // Removal and undo
    // ========================================================================

    /// Remove an item from the grid, keeping it on the removed stack.
    pub fn remove_item(&mut self, id: ItemId) -> Result<(), UploaderError> {
        let Some(item) = self.item(id) else {
            return self.fail(UploaderError::UnknownItem(id));
        };
        match item.state {
            ItemState::Pending => {
                let name = item.name.clone();
                return self.fail(UploaderError::InvalidTransition(format!(
                    "{name} is still loading and cannot be removed"
                )));
            }
            ItemState::WillUpload => {
                let name = item.name.clone();
                return self.fail(UploaderError::InvalidTransition(format!(
                    "{name} is being sent and cannot be removed"
                )));
            }
            ItemState::NeedsUpload => {}
        }

        let Some(mut item) = self.grid.as_mut().and_then(|grid| grid.detach(id)) else {
            return self.fail(UploaderError::UnknownItem(id));
        };
        if item.selected {
            item.selected = false;
            self.selection.retain(|selected| *selected != id);
            self.view.update_item(&item);
        }

        self.view.detach_item(id);
        self.removed.push(item);
        self.view.show_undo_banner(true, self.removed.undo_label());
        self.refresh_count();
        Ok(())
    }

    /// Restore the most recently removed item to the head of the grid.
    pub fn undo_remove(&mut self) -> Option<ItemId> {
        let grid = self.grid.as_mut()?;
        let item = self.removed.pop()?;
        let id = item.id;

        self.view.insert_item(&item);
        grid.insert_head(item);

        self.view
            .show_undo_banner(self.removed.can_undo(), self.removed.undo_label());
        self.refresh_count();
        Some(id)
    }

    /// Restore every removed item. Returns how many were restored.
    ///
    /// Restored items land at the head of the grid in the order they were
    /// removed.
    pub fn undo_all(&mut self) -> usize {
        let items = self.removed.drain_all();
        let restored = items.len();

        if let Some(grid) = self.grid.as_mut() {
            for item in items.into_iter().rev() {
                self.view.insert_item(&item);
                grid.insert_head(item);
            }
        }

        self.view.show_undo_banner(false, None);
        self.refresh_count();
        restored
    }

    // ========================================================================
    // Send
    // ========================================================================

    /// Start sending every staged item.
    ///
    /// The returned step tells the driver when to call [`Uploader::tick`].
    /// Cancelling `token` stops the send at the next tick boundary.
    pub fn send(&mut self, token: CancelToken) -> Result<SendStep, UploaderError> {
        if self.session.is_some() {
            return self.fail(UploaderError::InvalidTransition(
                "a send is already in progress".to_string(),
            ));
        }
        let Some(grid) = self.grid.as_mut() else {
            return self.fail(UploaderError::structure_missing("picture grid"));
        };

        let ids = grid.ids_in_state(ItemState::NeedsUpload);
        for id in &ids {
            if let Some(item) = grid.get_mut(*id) {
                item.state = ItemState::WillUpload;
                item.selected = false;
                self.view.update_item(item);
            }
        }
        self.selection.retain(|id| !ids.contains(id));

        log::info!("📤 Sending {} pictures", ids.len());
        self.set_state(DialogState::Sending);
        self.view.set_pending_count(ids.len());
        self.view.set_sent_count(0);

        let queue: UploadQueue = ids.into_iter().collect();
        self.session = Some(SendSession::new(queue, token));
        Ok(self.start_next())
    }

    /// Cancel the active send. Returns false if nothing is being sent.
    pub fn cancel(&mut self) -> bool {
        match &self.session {
            Some(session) => {
                log::info!("🛑 Send cancellation requested");
                session.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Advance the active send by one timer tick.
    pub fn tick(&mut self) -> Result<SendStep, UploaderError> {
        let Some(session) = self.session.as_ref() else {
            return Err(UploaderError::InvalidTransition(
                "no send in progress".to_string(),
            ));
        };

        let phase = session.phase;
        Ok(match phase {
            Phase::StartNext => self.start_next(),
            Phase::Transfer => self.advance_transfer(),
        })
    }

    /// Begin transferring the queue head, or finish if there is none.
    fn start_next(&mut self) -> SendStep {
        self.view.set_progress(0);

        loop {
            let Some(session) = self.session.as_mut() else {
                return self.finish_send();
            };
            if session.token.is_cancelled() {
                return self.finish_send();
            }
            let Some(head) = session.queue.head() else {
                return self.finish_send();
            };

            match self.grid.as_ref().and_then(|grid| grid.get(head)) {
                Some(item) => {
                    log::debug!("📤 Sending '{}'", item.name);
                    self.view.show_current_upload(&item.name, &item.thumbnail);
                    session.progress = 0;
                    session.phase = Phase::Transfer;
                    return SendStep::Scheduled(self.settings.tick_interval);
                }
                None => {
                    log::warn!("⚠️ Queued item {} left the grid, skipping", head);
                    session.queue.pop_head();
                }
            }
        }
    }

    /// Add one step of progress to the queue head.
    fn advance_transfer(&mut self) -> SendStep {
        let step = self.settings.progress_step;
        let Some(session) = self.session.as_mut() else {
            return self.finish_send();
        };

        let progress = session.advance(step);
        self.view.set_progress(progress);

        if progress >= 100 {
            session.progress = 0;
            session.phase = Phase::StartNext;

            if let Some(id) = session.queue.pop_head() {
                session.sent += 1;
                let sent = session.sent;
                if let Some(item) = self.grid.as_mut().and_then(|grid| grid.detach(id)) {
                    log::info!("✅ Sent '{}'", item.name);
                }
                self.view.discard_item(id);
                self.view.set_sent_count(sent);
                self.refresh_count();
            }
        }

        let cancelled = self
            .session
            .as_ref()
            .is_some_and(|session| session.token.is_cancelled());
        if cancelled {
            return self.finish_send();
        }
        SendStep::Scheduled(self.settings.tick_interval)
    }

    /// Close the active send, returning unsent items to the staged set.
    fn finish_send(&mut self) -> SendStep {
        let Some(mut session) = self.session.take() else {
            return SendStep::Finished(SendSummary::default());
        };

        let remaining = session.queue.abandon();
        if let Some(grid) = self.grid.as_mut() {
            for id in &remaining {
                if let Some(item) = grid.get_mut(*id) {
                    item.state = ItemState::NeedsUpload;
                    self.view.update_item(item);
                }
            }
        }

        self.set_state(if self.count == 0 {
            DialogState::Empty
        } else {
            DialogState::Collecting
        });

        let summary = SendSummary {
            sent: session.sent,
            reverted: remaining.len(),
            cancelled: session.token.is_cancelled(),
            elapsed: session.started.elapsed(),
        };
        log::info!(
            "📦 Send finished: {} sent, {} returned{} in {:.1}s",
            summary.sent,
            summary.reverted,
            if summary.cancelled { " (cancelled)" } else { "" },
            summary.elapsed.as_secs_f32()
        );
        SendStep::Finished(summary)
    }
}
