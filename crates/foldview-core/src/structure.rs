//! Structure-file payloads returned by a prediction service or read from disk.
//!
//! The payload is treated as opaque text. It is never parsed here; it is handed
//! to the viewer and written out for download unchanged.

use crate::error::InputError;
use std::fs;
use std::path::Path;

/// Filename offered for the downloaded structure.
pub const STRUCTURE_FILE_NAME: &str = "predicted_structure.pdb";
pub const STRUCTURE_MIME_TYPE: &str = "chemical/x-pdb";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructurePayload(String);

impl StructurePayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Load a locally stored structure file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        String::from_utf8(bytes)
            .map(Self)
            .map_err(|_| InputError::NotUtf8(path.display().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<String> for StructurePayload {
    fn from(text: String) -> Self {
        Self(text)
    }
}
