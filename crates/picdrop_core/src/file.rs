//! File intake: the File-like input and MIME sniffing.

use crate::error::UploaderError;

/// Name used for files that don't report one.
pub const UNNAMED_FILE: &str = "no name";

/// Supported image file extensions and the MIME type each implies.
pub const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tiff", "image/tiff"),
    ("tif", "image/tiff"),
    ("svg", "image/svg+xml"),
];

/// A file offered to the dialog by the chooser or a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// File name, if the browser reports one
    pub name: Option<String>,
    /// MIME type, if the browser reports one
    pub mime_type: Option<String>,
}

impl FileInfo {
    /// Create a file description. Empty strings are treated as absent.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let name = name.into();
        let mime_type = mime_type.into();
        Self {
            name: (!name.is_empty()).then_some(name),
            mime_type: (!mime_type.is_empty()).then_some(mime_type),
        }
    }

    /// Describe a file by name only, guessing the MIME type from its extension.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name).map(str::to_string);
        Self {
            name: (!name.is_empty()).then_some(name),
            mime_type,
        }
    }

    /// The name shown for this file.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_FILE)
    }

    /// Check that this file looks like an image.
    pub fn check_image(&self) -> Result<(), UploaderError> {
        let name = self.display_name().to_string();
        match self.mime_type.as_deref() {
            None => Err(UploaderError::MissingMimeType { name }),
            Some(mime) if is_image_mime(mime) => Ok(()),
            Some(_) => Err(UploaderError::NotAnImage { name }),
        }
    }
}

/// Whether a MIME type names an image.
pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image")
}

/// Guess an image MIME type from a filename's extension.
pub fn guess_mime_type(filename: &str) -> Option<&'static str> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}
