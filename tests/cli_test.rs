//! CLI integration tests

use predicates::prelude::*;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use assert_cmd::Command;
use std::thread;
use tempfile::TempDir;

const FILE_URL: &str = "https://www.figma.com/file/KEY123/Kit";

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("astrum-figma").unwrap();
    cmd.current_dir(cwd)
        .env_remove("ASTRUM_PATH")
        .env_remove("FIGMA_TOKEN")
        .env_remove("FIGMA_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_data(cwd: &Path, content: &str) {
    let dir = cwd.join("pattern-library");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("data.json"), content).unwrap();
}

fn read_data(cwd: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(cwd.join("pattern-library/data.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn settings_json(groups: &str) -> String {
    format!(
        r#"{{"groups":{groups},"figma":{{"token":"figd_secret_9876","url":"{FILE_URL}"}}}}"#
    )
}

/// 1 回だけ応答する HTTP サーバーを起動し、API ベース URL を返す
fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
        .unwrap();
    });

    format!("http://{addr}/v1")
}

#[test]
fn test_root_help() {
    let temp = TempDir::new().unwrap();
    cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Import Figma components into an Astrum pattern library",
        ))
        .stdout(predicate::str::contains("fetch"));
}

#[test]
fn test_no_subcommand_with_settings_shows_help() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &settings_json("[]"));

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_info_masks_token() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &settings_json("[]"));

    cmd(temp.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(FILE_URL))
        .stdout(predicate::str::contains("9876"))
        .stdout(predicate::str::contains("figd_secret").not());
}

#[test]
fn test_info_without_settings_and_closed_input_fails() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .arg("info")
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("No Figma settings found!"));
}

#[test]
fn test_edit_saves_settings() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .arg("edit")
        .write_stdin(format!("figd_new\n{FILE_URL}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Figma settings saved successfully"));

    let data = read_data(temp.path());
    assert_eq!(data["figma"]["token"], "figd_new");
    assert_eq!(data["figma"]["url"], FILE_URL);
    assert_eq!(data["groups"], serde_json::json!([]));
}

#[test]
fn test_edit_respects_astrum_path() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .env("ASTRUM_PATH", "library")
        .arg("edit")
        .write_stdin(format!("figd_new\n{FILE_URL}\n"))
        .assert()
        .success();

    assert!(temp.path().join("library/data.json").exists());
    assert!(!temp.path().join("pattern-library").exists());
}

#[test]
fn test_fetch_unreachable_api_imports_nothing() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &settings_json("[]"));

    cmd(temp.path())
        .env("FIGMA_API_URL", "http://127.0.0.1:9/v1")
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not fetch components"))
        .stdout(predicate::str::contains("No components found").not());

    let data = read_data(temp.path());
    assert_eq!(data["groups"], serde_json::json!([]));
    assert!(data["figma"].get("lastFetched").is_none());
}

#[test]
fn test_fetch_empty_file_reports_no_components() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), &settings_json("[]"));
    let api = serve_once(r#"{"name":"Kit","components":{}}"#);

    cmd(temp.path())
        .env("FIGMA_API_URL", api)
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("No components found in the Figma file."))
        .stdout(predicate::str::contains("Could not fetch").not());

    assert!(read_data(temp.path())["figma"]["lastFetched"].is_string());
}

#[test]
fn test_sync_alias_imports_components() {
    let temp = TempDir::new().unwrap();
    write_data(
        temp.path(),
        &settings_json(r#"[{"name":"untitled-group","title":"Untitled Group","components":[]}]"#),
    );
    let api = serve_once(
        r#"{"name":"Kit","components":{
            "1:1":{"name":"Buttons/Primary"},
            "1:2":{"name":"Buttons/Secondary"},
            "-1:3":{"name":"Internal/Hidden"},
            "1:4":{"name":""}
        }}"#,
    );

    cmd(temp.path())
        .env("FIGMA_API_URL", api)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("component(s) imported"))
        .stdout(predicate::str::contains("Add your component markup to"));

    let data = read_data(temp.path());
    let groups = data["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["name"], "buttons");
    assert_eq!(groups[1]["name"], "untitled-group");

    let components = groups[0]["components"].as_array().unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[0]["name"], "primary");
    assert_eq!(components[0]["nodeId"], "1:1");
    assert_eq!(components[1]["name"], "secondary");
    assert!(data["figma"]["lastFetched"].is_string());

    let base = temp.path().join("pattern-library/components/buttons");
    assert!(base.join("description.md").exists());
    assert!(base.join("primary/markup.html").exists());
    assert!(base.join("primary/description.md").exists());
    assert!(base.join("secondary/markup.html").exists());
    assert!(!temp.path().join("pattern-library/components/internal").exists());
}

#[test]
fn test_fetch_without_settings_prompts() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .arg("fetch")
        .write_stdin(format!("figd_new\n{FILE_URL}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No Figma settings found!"));

    assert_eq!(read_data(temp.path())["figma"]["token"], "figd_new");
}

#[test]
fn test_corrupt_data_file_fails() {
    let temp = TempDir::new().unwrap();
    write_data(temp.path(), "{not json");

    cmd(temp.path())
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("data.json"));
}
