use super::*;

#[test]
fn defaults_point_at_local_service() {
    let config = ClientConfig::default();
    assert_eq!(config.predict_url(), "http://localhost:8000/predict");
    assert_eq!(config.health_url(), "http://localhost:8000/health");
    assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.processing_time_unit, TimeUnit::Auto);
}

#[test]
fn empty_yaml_document_uses_defaults() {
    let config = ClientConfig::from_yaml("{}").unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn parses_full_document() {
    let yaml = r#"
api_base_url: "https://forensics.example.com/api/"
predict_path: predict
processing_time_unit: milliseconds
demo_samples:
  - label: Spliced
    path: /static/samples/spliced.jpg
"#;
    let config = ClientConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.predict_url(), "https://forensics.example.com/api/predict");
    assert_eq!(config.processing_time_unit, TimeUnit::Milliseconds);
    assert_eq!(
        config.demo_samples,
        vec![DemoSample { label: "Spliced".into(), path: "/static/samples/spliced.jpg".into() }]
    );
}

#[test]
fn rejects_relative_base_url() {
    let err = ClientConfig::from_yaml("api_base_url: /api").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
}

#[test]
fn rejects_non_base_url() {
    let err = ClientConfig::from_yaml("api_base_url: \"mailto:ops@example.com\"").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
}

#[test]
fn rejects_zero_upload_limit() {
    let err = ClientConfig::from_yaml("max_upload_bytes: 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLimit(0)));
}

#[test]
fn upload_limit_cannot_exceed_ten_megabytes() {
    let err = ClientConfig::from_yaml("max_upload_bytes: 20971520").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLimit(20_971_520)));

    let at_cap = ClientConfig::from_yaml("max_upload_bytes: 10485760").unwrap();
    assert_eq!(at_cap.max_upload_bytes, MAX_UPLOAD_BYTES);

    let smaller = ClientConfig::from_yaml("max_upload_bytes: 1048576").unwrap();
    assert_eq!(smaller.max_upload_bytes, 1_048_576);
}

#[test]
fn rejects_malformed_yaml() {
    let err = ClientConfig::from_yaml("processing_time_unit: [fortnights]").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn base_url_override_trims_trailing_slash() {
    let config = ClientConfig::default().with_base_url("http://10.0.0.5:9000/").unwrap();
    assert_eq!(config.api_base_url, "http://10.0.0.5:9000");
    assert_eq!(config.predict_url(), "http://10.0.0.5:9000/predict");
}

#[test]
fn base_url_override_rejects_garbage() {
    assert!(ClientConfig::default().with_base_url("not a url").is_err());
}

#[test]
fn bundled_config_is_valid() {
    let config = ClientConfig::from_yaml(include_str!("../../config/client.yaml")).unwrap();
    assert_eq!(config.predict_url(), "http://localhost:8000/predict");
    assert!(!config.demo_samples.is_empty());
}
