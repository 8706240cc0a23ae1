use crate::error::ConfigError;
use crate::report::TimeUnit;
use crate::upload::MAX_UPLOAD_BYTES;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PREDICT_PATH: &str = "/predict";
pub const DEFAULT_HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSample {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub predict_path: String,
    pub health_path: String,
    pub max_upload_bytes: u64,
    pub processing_time_unit: TimeUnit,
    pub demo_samples: Vec<DemoSample>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            predict_path: DEFAULT_PREDICT_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            max_upload_bytes: MAX_UPLOAD_BYTES,
            processing_time_unit: TimeUnit::Auto,
            demo_samples: Vec::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides the base URL, e.g. from the page's `?api=` parameter.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        parse_base(base_url)?;
        self.api_base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_base(&self.api_base_url)?;
        if self.max_upload_bytes == 0 || self.max_upload_bytes > MAX_UPLOAD_BYTES {
            return Err(ConfigError::InvalidLimit(self.max_upload_bytes));
        }
        Ok(())
    }

    pub fn predict_url(&self) -> String {
        self.endpoint(&self.predict_path)
    }

    pub fn health_url(&self) -> String {
        self.endpoint(&self.health_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base(base_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }

    Ok(url)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
