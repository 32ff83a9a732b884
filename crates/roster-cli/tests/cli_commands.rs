use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SUPPORT: &str = "An error occured, please contact support support@enioka.com for help.";

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").expect("roster binary");
    cmd.env("HOME", home);
    cmd.env_remove("ROSTER_ADDR");
    cmd.env_remove("ROSTER_CONFIG");
    cmd
}

fn users_body() -> serde_json::Value {
    json!([
        { "id": 1, "login": "root", "roles": [1] },
        { "id": 5, "login": "bob", "email": "bob@example.com", "roles": [2] }
    ])
}

#[test]
fn user_list_prints_cache() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(users_body().to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--insecure", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob@example.com"));
}

#[test]
fn role_list_prints_roles() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/role")
        .with_status(200)
        .with_body(json!([{ "id": 1, "name": "administrator" }]).to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--insecure", "role", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("administrator"));
}

#[test]
fn user_create_reports_and_prints_refreshed_list() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let create = server
        .mock("POST", "/user")
        .match_body(Matcher::PartialJson(json!({
            "login": "alice",
            "email": "alice@example.com",
            "roles": [2]
        })))
        .with_status(200)
        .expect(1)
        .create();
    let list = server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(json!([{ "id": 9, "login": "alice" }]).to_string())
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "user",
            "create",
            "--login",
            "alice",
            "--email",
            "alice@example.com",
            "--role",
            "2",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully created user: alice"))
        .stdout(predicate::str::contains("\"id\": 9"));

    create.assert();
    list.assert();
}

#[test]
fn user_update_sends_merged_record() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(users_body().to_string())
        .expect(2)
        .create();
    let update = server
        .mock("PUT", "/user/5")
        .match_body(Matcher::PartialJson(json!({
            "id": 5,
            "login": "bob",
            "email": "bob@example.com",
            "locked": true
        })))
        .with_status(200)
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "user",
            "update",
            "5",
            "--locked",
            "true",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully updated user bob"));

    update.assert();
}

#[test]
fn user_update_unknown_id_fails() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(users_body().to_string())
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "user",
            "update",
            "42",
            "--login",
            "nobody",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user not found: 42"));
}

#[test]
fn user_delete_batch_pluralizes() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("DELETE", Matcher::Regex(r"^/user/(7|9)$".to_string()))
        .with_status(204)
        .expect(2)
        .create();
    server
        .mock("GET", "/user")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "user",
            "delete",
            "7",
            "9",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully deleted users"));
}

#[test]
fn user_delete_partial_failure_exits_non_zero() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("DELETE", "/user/1")
        .with_status(204)
        .create();
    server
        .mock("DELETE", "/user/2")
        .with_status(500)
        .with_body("database unavailable")
        .create();
    let list = server
        .mock("GET", "/user")
        .with_status(200)
        .with_body("[]")
        .expect(0)
        .create();

    base_cmd(home_dir.path())
        .args([
            "--addr",
            &server.url(),
            "--insecure",
            "user",
            "delete",
            "1",
            "2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(SUPPORT))
        .stderr(predicate::str::contains("Successfully").not());

    list.assert();
}

#[test]
fn plain_http_without_insecure_is_refused() {
    let home_dir = tempdir().expect("tempdir");

    base_cmd(home_dir.path())
        .args(["--addr", "http://127.0.0.1:9", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to use http://"));
}

#[test]
fn config_set_is_used_by_later_commands() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    server
        .mock("GET", "/role")
        .with_status(200)
        .with_body("[]")
        .create();

    base_cmd(home_dir.path())
        .args([
            "config",
            "set",
            "--addr",
            &server.url(),
            "--refresh",
            "awaited",
        ])
        .assert()
        .success();

    let saved = fs::read_to_string(home_dir.path().join(".roster").join("config.json"))
        .expect("config file");
    assert!(saved.contains("\"refresh\": \"awaited\""));

    base_cmd(home_dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep-stale"));

    base_cmd(home_dir.path())
        .args(["--insecure", "role", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}
