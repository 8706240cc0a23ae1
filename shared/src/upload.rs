use crate::error::ClientError;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Image formats the analysis service accepts, keyed by MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ImageKind {
    #[strum(serialize = "image/jpeg")]
    Jpeg,
    #[strum(serialize = "image/png")]
    Png,
    #[strum(serialize = "image/webp")]
    Webp,
}

impl ImageKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::from_str(mime).ok()
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "webp" => Some(ImageKind::Webp),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        self.into()
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_list() -> String {
        use strum::IntoEnumIterator;
        ImageKind::iter()
            .map(ImageKind::mime_type)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// What the browser tells us about a file before any bytes are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub declared_mime_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub file_name: String,
    pub kind: ImageKind,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(file_name: impl Into<String>, declared_mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            declared_mime_type: declared_mime_type.into(),
            size_bytes,
        }
    }

    /// Type is checked before size, so an oversized file of the wrong type
    /// reports the type error.
    pub fn validate(&self, max_bytes: u64) -> Result<ValidatedUpload, ClientError> {
        let kind = ImageKind::from_mime(&self.declared_mime_type).ok_or_else(|| {
            ClientError::InvalidFileType {
                mime: self.declared_mime_type.clone(),
            }
        })?;

        if self.size_bytes > max_bytes {
            return Err(ClientError::FileTooLarge {
                size: self.size_bytes,
                limit: max_bytes,
            });
        }

        Ok(ValidatedUpload {
            file_name: self.file_name.clone(),
            kind,
            size_bytes: self.size_bytes,
        })
    }
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
