//! CSS class names making up the dialog's markup contract.
//!
//! The first group is looked up inside the dialog container; the second group
//! is toggled by the uploader to reflect state.

// ============================================================================
// Marker classes (consumed)
// ============================================================================

/// Text label inside a progress widget
pub const LABEL: &str = "fc-label";
/// Fill bar inside a progress widget, width set to the progress percentage
pub const PROGRESS_FILL: &str = "fc-progress-fill";
/// Panel that shows warning messages
pub const ERROR_MESSAGE: &str = "fc-error-message";
/// Instructions panel, also a drop target
pub const INSTRUCTIONS: &str = "fc-instructions";
/// Displays the number of staged pictures
pub const COUNT: &str = "fc-count";
/// Displays the plural suffix for the count
pub const COUNT_SUFFIX: &str = "fc-count-sfx";
/// Controls that open the file chooser
pub const SHOW_CHOOSER: &str = "fc-show-chooser";
/// The hidden `<input type="file">`
pub const HIDDEN_FILE_INPUT: &str = "fc-hidden-fc";
/// Container of picture items
pub const PICTURE_GRID: &str = "fc-picture-grid";
/// Panel containing activation and upload controls
pub const CONTROLS_PANEL: &str = "fc-controls-panel";
/// Panel containing the send button
pub const ACTIVATE_CONTROLS: &str = "fc-activate-ctrls";
/// Send button
pub const SEND_BUTTON: &str = "fc-do-upload";
/// Panel containing the upload progress UI
pub const UPLOADING_CONTROLS: &str = "fc-uploading-ctrls";
/// `<img>` previewing the item being sent
pub const CURRENT_UPLOAD_IMG: &str = "fc-current-upload-img";
/// Progress widget container for the item being sent
pub const CURRENT_PROGRESS: &str = "fc-current-progress";
/// Shows the name of the item being sent
pub const SENDING_PATH: &str = "fc-sending-path";
/// Cancel button
pub const STOP_UPLOAD: &str = "fc_stop_upload";
/// Banner offering to undo removals
pub const UNDO_BANNER: &str = "fc-undo-banner";
/// Undo the most recent removal
pub const UNDO_REMOVE: &str = "fc-undo-remove";
/// Undo every removal
pub const UNDO_ALL: &str = "fc-undo-all";
/// Shows the name of the item the next undo restores
pub const UNDO_LABEL: &str = "fc-undo-label";
/// Displays the number of pictures sent so far
pub const PICS_SENT: &str = "fc-pics-sent";
/// Displays the number of pictures in the active send
pub const PICS_COUNT: &str = "fc-pics-count";

// ============================================================================
// State classes (produced)
// ============================================================================

/// Dialog holds no staged pictures
pub const EMPTY: &str = "fc-empty";
/// Dialog is collecting pictures
pub const COLLECTING: &str = "fc-collecting";
/// Dialog is sending pictures
pub const SENDING: &str = "fc-sending";
/// Dialog is showing a warning
pub const ERRORED: &str = "fc-errored";
/// A picture item node
pub const IMG_ITEM: &str = "fc-img-item";
/// Item staged for the next send
pub const NEED_UPLOAD: &str = "fc-need-upload";
/// Item committed to the active send
pub const WILL_UPLOAD: &str = "fc-will-upload";
/// Highlighted item
pub const SELECTED: &str = "fc-selected";
/// Remove button inside an item
pub const REMOVE: &str = "fc-remove";
/// Hidden element
pub const HIDDEN: &str = "fc-hidden";
/// Drop target with files dragged over it
pub const DRAG_OVER: &str = "fc-drag-over";
