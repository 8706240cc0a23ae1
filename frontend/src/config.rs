use shared::ClientConfig;
use web_sys::UrlSearchParams;

const BUNDLED_CONFIG: &str = include_str!("../../config/client.yaml");

/// Bundled YAML config, with the base URL optionally replaced by the
/// page's `?api=` query parameter.
pub fn load() -> ClientConfig {
    let config = match ClientConfig::from_yaml(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid bundled config, using defaults: {}", e);
            ClientConfig::default()
        }
    };

    match api_override() {
        Some(base_url) => match config.clone().with_base_url(&base_url) {
            Ok(overridden) => {
                log::info!("API base overridden to {}", overridden.api_base_url);
                overridden
            }
            Err(e) => {
                log::warn!("Ignoring ?api= override: {}", e);
                config
            }
        },
        None => config,
    }
}

fn api_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("api").filter(|value| !value.is_empty())
}
