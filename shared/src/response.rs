use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Body of a successful `POST /predict`. Every field may be missing; `null`
/// is treated the same as absent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ela_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ela_path: Option<String>,
}

impl AnalysisResponse {
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Maps a transport-level status onto the failure path. Anything outside
/// 2xx is a failure, whatever the body says.
pub fn check_status(status: u16) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::Server { status })
    }
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Unknown,
    Ready,
    ModelNotLoaded,
    /// The service answered `/health` with a status other than "ok".
    Unhealthy,
    Unreachable,
}

impl ServiceStatus {
    pub fn from_health(health: &HealthResponse) -> Self {
        match (health.status.eq_ignore_ascii_case("ok"), health.model_loaded) {
            (true, true) => ServiceStatus::Ready,
            (true, false) => ServiceStatus::ModelNotLoaded,
            (false, _) => ServiceStatus::Unhealthy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "Checking service...",
            ServiceStatus::Ready => "Service ready",
            ServiceStatus::ModelNotLoaded => "Service up, model not loaded",
            ServiceStatus::Unhealthy => "Service reported a problem",
            ServiceStatus::Unreachable => "Service unreachable",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "status-unknown",
            ServiceStatus::Ready => "status-ready",
            ServiceStatus::ModelNotLoaded => "status-degraded",
            ServiceStatus::Unhealthy => "status-unhealthy",
            ServiceStatus::Unreachable => "status-down",
        }
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
