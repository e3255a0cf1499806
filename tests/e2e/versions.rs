use super::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn version_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tag/game_version"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"version": "1.20.2", "version_type": "release", "date": "2023-09-20T09:02:57Z", "major": false},
                {"version": "23w31a", "version_type": "snapshot", "date": "2023-08-01T12:00:00Z", "major": false},
                {"version": "1.20.1", "version_type": "release", "date": "2023-06-12T13:25:51Z", "major": false}
            ]"#,
        ))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_versions_lists_all_in_order() {
    let server = version_server().await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());

    let mut cmd = ctx.modbundle();
    cmd.arg("versions");
    let assert = TestContext::run_blocking(cmd).await.success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["1.20.2", "23w31a  (snapshot)", "1.20.1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_versions_releases_only() {
    let server = version_server().await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());

    let mut cmd = ctx.modbundle();
    cmd.args(["versions", "--releases-only"]);
    TestContext::run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("23w31a").not())
        .stdout(predicate::str::contains("1.20.1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_versions_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tag/game_version"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());

    let mut cmd = ctx.modbundle();
    cmd.arg("versions");
    TestContext::run_blocking(cmd)
        .await
        .failure()
        .stderr(predicate::str::contains("HTTP 500"));
}
