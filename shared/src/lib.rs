pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod response;
pub mod state;
pub mod upload;

pub use config::{ClientConfig, DemoSample};
pub use error::{ClientError, ConfigError, ErrorKind};
pub use report::{AnalysisReport, ElaPreview, TimeUnit, Verdict};
pub use response::{AnalysisResponse, HealthResponse, ServiceStatus};
pub use state::{Ticket, TransitionError, UiEvent, UiState, UploadSession, ViewFlags};
pub use upload::{ImageKind, UploadCandidate, ValidatedUpload, MAX_UPLOAD_BYTES};
