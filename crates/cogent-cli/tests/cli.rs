//! End-to-end tests for the `cogent` binary.
//!
//! Each test spawns the real binary against a wiremock judge, so the whole
//! path is covered: argument parsing, config layering, the HTTP round trip,
//! and the exit-code contract.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cogent() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cogent"));
    // Keep ambient configuration out of the child process.
    cmd.env_remove("COGENT_ENDPOINT")
        .env_remove("COGENT_MODEL")
        .env_remove("COGENT_TEMPERATURE")
        .env_remove("COGENT_SYSTEM_PROMPT")
        .env_remove("COGENT_TIMEOUT_SECS");
    cmd
}

fn write_exchange(dir: &Path) -> PathBuf {
    let file = dir.join("exchange.json");
    let exchange = serde_json::json!({
        "messages": [
            { "role": "user", "content": "Can you help me find information about database backups?" },
            { "role": "assistant", "content": "Sure: full, incremental, and differential backups cover most needs. Schedule them and test your restores." }
        ],
        "seed": 42
    });
    std::fs::write(&file, exchange.to_string()).unwrap();
    file
}

fn verdict_content(makes_sense: bool, reasoning: &str) -> String {
    serde_json::json!({ "makesSense": makes_sense, "reasoning": reasoning }).to_string()
}

fn envelope(content: &str) -> serde_json::Value {
    serde_json::json!({ "message": { "role": "assistant", "content": content } })
}

async fn mount_verdict(server: &MockServer, makes_sense: bool, reasoning: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(&verdict_content(makes_sense, reasoning))),
        )
        .mount(server)
        .await;
}

#[test]
fn init_writes_sample_files() {
    let dir = tempfile::tempdir().unwrap();

    cogent()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created exchange.json"))
        .stdout(predicate::str::contains("Created cogent.yaml"));

    let raw = std::fs::read_to_string(dir.path().join("exchange.json")).unwrap();
    let sample: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(sample["messages"][0]["role"], "user");
    assert_eq!(sample["messages"][1]["role"], "assistant");
    assert_eq!(sample["seed"], 42);

    let config = std::fs::read_to_string(dir.path().join("cogent.yaml")).unwrap();
    assert!(config.contains("gemma2:2b"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("exchange.json"), "mine").unwrap();

    cogent()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped exchange.json (exists)"));

    // The pre-existing file is untouched.
    let raw = std::fs::read_to_string(dir.path().join("exchange.json")).unwrap();
    assert_eq!(raw, "mine");
}

#[test]
fn init_honors_out_flag() {
    let dir = tempfile::tempdir().unwrap();

    cogent()
        .current_dir(dir.path())
        .args(["init", "--out", "pair.json"])
        .assert()
        .success();

    assert!(dir.path().join("pair.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn check_exits_zero_on_coherent_verdict() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "Grounded answer to the question asked.").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .assert()
        .success()
        .stdout(predicate::str::contains("verdict: makes sense"))
        .stdout(predicate::str::contains(
            "reasoning: Grounded answer to the question asked.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_exits_one_on_incoherent_verdict() {
    let server = MockServer::start().await;
    mount_verdict(&server, false, "The reply ignores the question.").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("verdict: does not make sense"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_json_output_prints_wire_fields() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    let assert = cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .args(["--output", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let verdict: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(verdict["makesSense"], true);
    assert_eq!(verdict["reasoning"], "ok");
}

#[test]
fn check_missing_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    cogent()
        .current_dir(dir.path())
        .args(["check", "--file", "nope.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read exchange"));
}

#[test]
fn check_invalid_exchange_json_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("exchange.json");
    std::fs::write(&file, "not json").unwrap();

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse exchange"));
}

#[test]
fn check_empty_messages_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("exchange.json");
    std::fs::write(&file, r#"{ "messages": [] }"#).unwrap();

    // The empty exchange is rejected before any request goes out, so a dead
    // endpoint does not turn this into an infrastructure error.
    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", "http://127.0.0.1:9/api/chat"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty exchange"));
}

#[test]
fn check_invalid_config_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());
    let config = dir.path().join("custom.yaml");
    std::fs::write(&config, "temperature: warm\n").unwrap();

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn check_unreachable_endpoint_is_infra_error() {
    // Bind and release an ephemeral port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("http://127.0.0.1:{port}/api/chat")])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("network error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_http_failure_is_infra_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("judge melted"))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HTTP 500"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_undecodable_verdict_is_infra_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope("the model rambled")))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid verdict payload"));
}

#[tokio::test(flavor = "multi_thread")]
async fn check_flag_beats_env_beats_config_file() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());
    let config = dir.path().join("custom.yaml");
    std::fs::write(
        &config,
        format!(
            "endpoint: \"{}/api/chat\"\nmodel: \"file-model\"\n",
            server.uri()
        ),
    )
    .unwrap();

    cogent()
        .env("COGENT_MODEL", "env-model")
        .args(["check", "--file"])
        .arg(&file)
        .arg("--config")
        .arg(&config)
        .args(["--model", "flag-model"])
        .assert()
        .success();

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "flag-model");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_env_beats_config_file() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());
    let config = dir.path().join("custom.yaml");
    std::fs::write(
        &config,
        format!(
            "endpoint: \"{}/api/chat\"\nmodel: \"file-model\"\n",
            server.uri()
        ),
    )
    .unwrap();

    cogent()
        .env("COGENT_MODEL", "env-model")
        .args(["check", "--file"])
        .arg(&file)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "env-model");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_reads_default_config_from_working_directory() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    write_exchange(dir.path());
    std::fs::write(
        dir.path().join("cogent.yaml"),
        format!(
            "endpoint: \"{}/api/chat\"\nmodel: \"from-cwd-config\"\n",
            server.uri()
        ),
    )
    .unwrap();

    cogent()
        .current_dir(dir.path())
        .args(["check", "--file", "exchange.json"])
        .assert()
        .success();

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "from-cwd-config");
}

#[tokio::test(flavor = "multi_thread")]
async fn check_seed_flag_overrides_file_seed() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .args(["--seed", "7"])
        .assert()
        .success();

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["options"]["seed"], 7);
}

#[tokio::test(flavor = "multi_thread")]
async fn check_system_prompt_flag_reaches_wire() {
    let server = MockServer::start().await;
    mount_verdict(&server, true, "ok").await;
    let dir = tempfile::tempdir().unwrap();
    let file = write_exchange(dir.path());

    cogent()
        .args(["check", "--file"])
        .arg(&file)
        .args(["--endpoint", &format!("{}/api/chat", server.uri())])
        .args(["--system-prompt", "The assistant narrates a fantasy world."])
        .assert()
        .success();

    let requests = server.received_requests().await.expect("requests recorded");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    let instruction = messages.last().unwrap();
    assert_eq!(instruction["role"], "system");
    assert!(instruction["content"]
        .as_str()
        .unwrap()
        .contains("CONTEXT: The assistant narrates a fantasy world."));
}
