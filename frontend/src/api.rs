use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::demo::{file_name_from_path, sample_mime_type};
use shared::response::check_status;
use shared::{AnalysisResponse, ClientConfig, ClientError, HealthResponse, ServiceStatus, Ticket};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Talks to the analysis service. Outcomes are handed to caller-supplied
/// callbacks; nothing here touches the DOM.
#[derive(Clone)]
pub struct AnalysisClient {
    config: Rc<ClientConfig>,
}

impl AnalysisClient {
    pub fn new(config: Rc<ClientConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn submit(
        &self,
        ticket: Ticket,
        file: GlooFile,
        on_done: Callback<(Ticket, Result<AnalysisResponse, ClientError>)>,
    ) {
        let url = self.config.predict_url();
        log::info!("Submitting {} to {}", file.name(), url);

        spawn_local(async move {
            let outcome = post_predict(&url, &file).await;
            on_done.emit((ticket, outcome));
        });
    }

    pub fn check_health(&self, on_done: Callback<ServiceStatus>) {
        let url = self.config.health_url();

        spawn_local(async move {
            let status = match get_health(&url).await {
                Ok(health) => ServiceStatus::from_health(&health),
                Err(e) => {
                    log::warn!("Health check failed: {}", e);
                    ServiceStatus::Unreachable
                }
            };
            on_done.emit(status);
        });
    }

    pub fn fetch_sample(&self, path: String, on_done: Callback<Result<GlooFile, ClientError>>) {
        spawn_local(async move {
            on_done.emit(get_sample(&path).await);
        });
    }
}

async fn post_predict(url: &str, file: &GlooFile) -> Result<AnalysisResponse, ClientError> {
    let form_data =
        web_sys::FormData::new().map_err(|e| ClientError::Network(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(|e| ClientError::Network(format!("{:?}", e)))?;

    let response = Request::post(url)
        .body(form_data)
        .map_err(|e| ClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    check_status(response.status())?;

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    AnalysisResponse::from_json(&body)
}

async fn get_health(url: &str) -> Result<HealthResponse, ClientError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    check_status(response.status())?;

    response
        .json::<HealthResponse>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

async fn get_sample(path: &str) -> Result<GlooFile, ClientError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| ClientError::DemoFetch(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::DemoFetch(format!(
            "{} returned {}",
            path,
            response.status()
        )));
    }

    let served_type = response.headers().get("content-type");
    let bytes = response
        .binary()
        .await
        .map_err(|e| ClientError::DemoFetch(e.to_string()))?;

    let mime = sample_mime_type(path, served_type.as_deref());
    Ok(GlooFile::new_with_options(
        &file_name_from_path(path),
        bytes.as_slice(),
        Some(&mime),
        None,
    ))
}
