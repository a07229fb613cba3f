use predicates::prelude::*;
use serde_json::json;

#[allow(dead_code)]
mod common;
use common::*;

#[test]
fn test_results_empty_list() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/entity-classification/results")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let helper = ClassifyTestHelper::new("test_results_empty_list", &server.url());
    helper
        .run_command(&["results"])
        .success()
        .stdout(predicate::str::contains("Analysis Results"))
        .stdout(predicate::str::contains("Requires Review"))
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_results_backend_down() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/entity-classification/results")
        .with_status(500)
        .create();

    let helper = ClassifyTestHelper::new("test_results_backend_down", &server.url());
    helper
        .run_command(&["results"])
        .failure()
        .stdout(predicate::str::contains("Failed to fetch results"))
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_result_abc123() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/entity-classification/results/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "analysis_id": "abc123",
                "entities": {"people": ["Alice"]},
                "safety_flags": {"requires_review": true}
            })
            .to_string(),
        )
        .create();

    let helper = ClassifyTestHelper::new("test_result_abc123", &server.url());
    helper
        .run_command(&["result", "abc123"])
        .success()
        .stdout(predicate::str::contains("Get Result by Analysis ID"))
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Yes"));
}

#[test]
fn test_result_json_output() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/entity-classification/results/abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"analysis_id": "abc123"}"#)
        .create();

    let helper = ClassifyTestHelper::new("test_result_json_output", &server.url());
    helper
        .run_command(&["result", "abc123", "--json"])
        .success()
        .stdout(predicate::str::contains(r#""analysis_id": "abc123""#));
}

#[test]
fn test_result_blank_id() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

    let helper = ClassifyTestHelper::new("test_result_blank_id", &server.url());
    helper
        .run_command(&["result", "   "])
        .failure()
        .stdout(predicate::str::contains("Analysis ID is required"));
    mock.assert();
}

#[test]
fn test_result_not_found() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/entity-classification/results/nope")
        .with_status(404)
        .with_body(r#"{"detail": "Analysis not found"}"#)
        .create();

    let helper = ClassifyTestHelper::new("test_result_not_found", &server.url());
    helper
        .run_command(&["result", "nope"])
        .failure()
        .stdout(predicate::str::contains(
            "Invalid Analysis ID or result not found",
        ))
        .stdout(predicate::str::contains("Analysis not found").not());
}

#[test]
fn test_upload_success() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/transcript/upload")
        .with_status(200)
        .create();

    let helper = ClassifyTestHelper::new("test_upload_success", &server.url());
    helper.write_file("episode.txt", "hello transcript");
    helper
        .run_command(&["upload", "episode.txt"])
        .success()
        .stdout(predicate::str::contains("File uploaded successfully"));
    mock.assert();
}

#[test]
fn test_upload_failure() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/api/transcript/upload")
        .with_status(500)
        .create();

    let helper = ClassifyTestHelper::new("test_upload_failure", &server.url());
    helper.write_file("episode.txt", "hello transcript");
    helper
        .run_command(&["upload", "episode.txt"])
        .failure()
        .stdout(predicate::str::contains("Error uploading file"));
}

#[test]
fn test_upload_missing_file() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", mockito::Matcher::Any).expect(0).create();

    let helper = ClassifyTestHelper::new("test_upload_missing_file", &server.url());
    helper
        .run_command(&["upload", "nothing-here.txt"])
        .failure()
        .stdout(predicate::str::contains("Unable to find"));
    mock.assert();
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let helper = ClassifyTestHelper::new("test_invalid_base_url_is_config_error", "ftp://nope");
    helper
        .run_command(&["results"])
        .code(2)
        .stdout(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_version() {
    let helper = ClassifyTestHelper::new("test_version", "http://localhost:8080");
    helper
        .run_command(&["version", "--short"])
        .success()
        .stdout(predicate::str::contains(format!(
            "classify {}",
            env!("CARGO_PKG_VERSION")
        )));
}
