use dermi_core::config::{UploadConfig, DEFAULT_ENDPOINT};

#[test]
fn test_default_config() {
    let config = UploadConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert!(config.round_color_channels);
    assert!(config.gate_on_success);
    assert_eq!(config.timeout_secs, None);
}

#[test]
fn test_toml_round_trip() {
    let config = UploadConfig {
        endpoint: "https://skin.example.com/api/process".to_string(),
        round_color_channels: false,
        gate_on_success: false,
        timeout_secs: Some(30),
    };

    let toml_str = toml::to_string_pretty(&config).unwrap();
    let parsed: UploadConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_missing_keys_take_defaults() {
    let parsed: UploadConfig =
        toml::from_str("endpoint = \"http://10.0.0.2:8000/process\"\n").unwrap();
    assert_eq!(parsed.endpoint, "http://10.0.0.2:8000/process");
    assert!(parsed.round_color_channels);
    assert!(parsed.gate_on_success);
    assert_eq!(parsed.timeout_secs, None);
}

#[test]
fn test_empty_document_is_all_defaults() {
    let parsed: UploadConfig = toml::from_str("").unwrap();
    assert_eq!(parsed, UploadConfig::default());
}

#[test]
fn test_timeout_is_read() {
    let parsed: UploadConfig = toml::from_str("timeout_secs = 15\n").unwrap();
    assert_eq!(parsed.timeout_secs, Some(15));
}
