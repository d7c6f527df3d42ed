//! Error types for uploader operations.
//!
//! None of these are fatal to the controller. Every operation that fails
//! leaves the dialog state unchanged, and the outer surfaces log the error
//! instead of surfacing it to the page.

use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur while operating the upload dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploaderError {
    /// A browser capability the feature depends on is unavailable
    #[error("Capability unavailable: {capability}")]
    CapabilityMissing {
        /// Name of the missing capability
        capability: String,
    },

    /// An element the operation needs is not present in the dialog
    #[error("Dialog structure is missing {element}")]
    StructureMissing {
        /// Description of the missing element
        element: String,
    },

    /// The referenced item is not in the grid
    #[error("Unknown item {0}")]
    UnknownItem(ItemId),

    /// The file's MIME type is not an image type
    #[error("{name} is not an image file")]
    NotAnImage {
        /// Display name of the rejected file
        name: String,
    },

    /// The file has no MIME type at all
    #[error("{name} may not be an image (no mime type)")]
    MissingMimeType {
        /// Display name of the rejected file
        name: String,
    },

    /// The operation is not allowed in the current state
    #[error("Invalid operation: {0}")]
    InvalidTransition(String),
}

impl UploaderError {
    /// Create a capability-missing error.
    pub fn capability_missing(capability: impl Into<String>) -> Self {
        Self::CapabilityMissing {
            capability: capability.into(),
        }
    }

    /// Create a structure-missing error.
    pub fn structure_missing(element: impl Into<String>) -> Self {
        Self::StructureMissing {
            element: element.into(),
        }
    }

    /// Whether this error only rejects a single input file.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            UploaderError::NotAnImage { .. } | UploaderError::MissingMimeType { .. }
        )
    }
}
