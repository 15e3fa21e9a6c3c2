mod common;

use std::io::Write;

use approx::assert_abs_diff_eq;
use dermi_core::client::ProcessClient;
use dermi_core::config::UploadConfig;
use dermi_core::error::{DermiError, ProcessingError};

fn config_for(endpoint: &str) -> UploadConfig {
    UploadConfig {
        endpoint: endpoint.to_string(),
        timeout_secs: Some(5),
        ..Default::default()
    }
}

fn image_fixture(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create image fixture");
    file.write_all(bytes).expect("write image fixture");
    file
}

#[test]
fn test_upload_parses_full_response() {
    let body = r#"{"EI": 5, "r": 10, "g": 20, "b": 30, "l": 1, "a": 2, "b2": 3}"#;
    let server = common::serve_once(common::json_response(body));
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    let file = image_fixture(b"jpeg-bytes-go-here");

    let analysis = client.process_file(file.path()).unwrap();

    assert_eq!(analysis.index_line().unwrap(), "EI: 5");
    let rgb = analysis.rgb.unwrap();
    assert_eq!(rgb.to_u8(true), [10, 20, 30]);
    assert_eq!(rgb.caption(true), "R: 10 G: 20 B: 30");
    assert_eq!(analysis.lab.unwrap().summary(), "L: 1  a: 2  b: 3");
}

#[test]
fn test_upload_sends_multipart_image_field() {
    let server = common::serve_once(common::json_response(r#"{"EI": 1}"#));
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    let file = image_fixture(b"raw-pixel-payload");

    client.process_file(file.path()).unwrap();

    let request = server.into_request();
    let request_text = String::from_utf8_lossy(&request);
    assert!(request_text.starts_with("POST /process"), "got: {request_text}");
    assert!(
        request_text.contains("name=\"image\""),
        "multipart field name missing: {request_text}"
    );
    assert!(
        request_text.contains("raw-pixel-payload"),
        "file bytes missing from body"
    );
}

#[test]
fn test_zero_index_response_is_a_processing_error() {
    let server = common::serve_once(common::json_response(r#"{"EI": 0}"#));
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    let file = image_fixture(b"x");

    let err = client.process_file(file.path()).unwrap_err();
    match err {
        DermiError::Processing(ProcessingError::ZeroErythemaIndex) => {}
        other => panic!("expected processing error, got: {other}"),
    }
}

#[test]
fn test_zero_index_passes_with_gating_off() {
    let server = common::serve_once(common::json_response(r#"{"EI": 0}"#));
    let mut config = config_for(&server.url);
    config.gate_on_success = false;
    let client = ProcessClient::new(config).unwrap();
    let file = image_fixture(b"x");

    let analysis = client.process_file(file.path()).unwrap();
    assert_abs_diff_eq!(analysis.erythema_index.unwrap(), 0.0);
}

#[test]
fn test_non_json_body_is_a_malformed_response() {
    let response =
        "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\nContent-Length: 9\r\nConnection: close\r\n\r\nexploded!"
            .to_string();
    let server = common::serve_once(response);
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    let file = image_fixture(b"x");

    let err = client.process_file(file.path()).unwrap_err();
    match err {
        DermiError::MalformedResponse(_) => {}
        other => panic!("expected malformed response, got: {other}"),
    }
}

#[test]
fn test_unreachable_endpoint_is_a_transport_error() {
    let client = ProcessClient::new(config_for(&common::dead_endpoint_url())).unwrap();
    let file = image_fixture(b"x");

    let err = client.process_file(file.path()).unwrap_err();
    match err {
        DermiError::Transport(_) => {}
        other => panic!("expected transport error, got: {other}"),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let server = common::serve_once(common::json_response(r#"{"EI": 1}"#));
    let client = ProcessClient::new(config_for(&server.url)).unwrap();

    let err = client
        .process_file(std::path::Path::new("/definitely/not/here.jpg"))
        .unwrap_err();
    match err {
        DermiError::Io(_) => {}
        other => panic!("expected I/O error, got: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Health probe
// ---------------------------------------------------------------------------

#[test]
fn test_probe_url_is_the_sibling_test_route() {
    let client = ProcessClient::new(config_for("http://localhost:8000/process")).unwrap();
    assert_eq!(client.probe_url().unwrap().as_str(), "http://localhost:8000/test");

    let client = ProcessClient::new(config_for("http://host/api/process")).unwrap();
    assert_eq!(client.probe_url().unwrap().as_str(), "http://host/api/test");
}

#[test]
fn test_probe_accepts_2xx() {
    let server = common::serve_once(common::json_response(r#"{"test": "test"}"#));
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    client.probe().unwrap();
}

#[test]
fn test_probe_rejects_server_error() {
    let response =
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string();
    let server = common::serve_once(response);
    let client = ProcessClient::new(config_for(&server.url)).unwrap();
    assert!(client.probe().is_err());
}
