use thiserror::Error;

pub const INVALID_TYPE_MESSAGE: &str = "Please upload a valid image file (JPEG, PNG, or WEBP)";
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Analysis failed. Please try again or check your connection.";
pub const DEMO_FAILED_MESSAGE: &str = "Failed to load sample image";
pub const PREVIEW_FAILED_MESSAGE: &str = "Could not read the selected image";

/// Coarse grouping of [`ClientError`] used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFileType,
    FileTooLarge,
    NetworkOrServerFailure,
    Input,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("Unsupported file type: {mime:?}")]
    InvalidFileType { mime: String },
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server returned {status}")]
    Server { status: u16 },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to read file: {0}")]
    PreviewRead(String),
    #[error("Error loading sample image: {0}")]
    DemoFetch(String),
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::InvalidFileType { .. } => ErrorKind::InvalidFileType,
            ClientError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            ClientError::Network(_) | ClientError::Server { .. } | ClientError::Decode(_) => {
                ErrorKind::NetworkOrServerFailure
            }
            ClientError::PreviewRead(_) | ClientError::DemoFetch(_) => ErrorKind::Input,
        }
    }

    /// Static text shown to the user. Server and transport failures
    /// deliberately share one message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::InvalidFileType { .. } => INVALID_TYPE_MESSAGE.to_string(),
            ClientError::FileTooLarge { limit, .. } => {
                format!("File size exceeds {}MB limit", limit / (1024 * 1024))
            }
            ClientError::Network(_) | ClientError::Server { .. } | ClientError::Decode(_) => {
                ANALYSIS_FAILED_MESSAGE.to_string()
            }
            ClientError::PreviewRead(_) => PREVIEW_FAILED_MESSAGE.to_string(),
            ClientError::DemoFetch(_) => DEMO_FAILED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid API base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Invalid upload limit: {0}")]
    InvalidLimit(u64),
}
