//! Global constants for the picdrop dialog

/// Spinner shown in a tentative item while its thumbnail loads
pub const DEFAULT_SPINNER_SRC: &str = "./images/bar_spinner.gif";

/// Graphic shown when a thumbnail cannot be read
pub const DEFAULT_PLACEHOLDER_SRC: &str = "./images/file_upload/no_thumbnail.png";

/// Container attribute holding JSON configuration
pub const CONFIG_ATTRIBUTE: &str = "data-fc-config";

/// Item attribute holding the file name
pub const NAME_ATTRIBUTE: &str = "data-name";

/// Text of the per-item remove button
pub const REMOVE_LABEL: &str = "remove";
