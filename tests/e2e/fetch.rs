use super::*;
use predicates::prelude::*;
use std::io::{Cursor, Read};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SODIUM_ONLY: &str = r#"[{"displayName":"Sodium","slug":"sodium","hostId":"sodium"}]"#;

/// Serve one release of sodium for 1.20.1/fabric, plus its jar
async fn sodium_server() -> MockServer {
    let server = MockServer::start().await;
    let body = format!(
        r#"[{{
            "name": "Sodium 0.5.3",
            "version_number": "mc1.20.1-0.5.3",
            "game_versions": ["1.20.1"],
            "loaders": ["fabric"],
            "files": [{{
                "url": "{}/files/sodium-fabric-mc1.20.1-0.5.3.jar",
                "filename": "sodium-fabric-mc1.20.1-0.5.3.jar",
                "primary": true,
                "size": 9
            }}]
        }}]"#,
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/project/sodium/version"))
        .and(query_param("game_versions", "[\"1.20.1\"]"))
        .and(query_param("loaders", "[\"fabric\"]"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/sodium-fabric-mc1.20.1-0.5.3.jar"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jar bytes".to_vec()))
        .mount(&server)
        .await;

    server
}

fn read_entry(archive: &[u8], name: &str) -> String {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut file = zip.by_name(name).unwrap();
    let mut contents = String::new();
    file.read_to_string(&mut contents).unwrap();
    contents
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_single_mod() {
    let server = sodium_server().await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());
    ctx.write_mods(SODIUM_ONLY);

    let mut cmd = ctx.modbundle();
    cmd.args(["fetch", "-v", "1.20.1", "-l", "fabric", "-o", "out"]);
    TestContext::run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("✔ Saved"))
        .stdout(predicate::str::contains("(1/1 mods)"));

    let archive_path = ctx
        .temp
        .path()
        .join("out")
        .join("minecraft-mods-1.20.1-fabric.zip");
    let archive = std::fs::read(&archive_path).unwrap();

    assert_eq!(
        read_entry(&archive, "mods/sodium-fabric-mc1.20.1-0.5.3.jar"),
        "jar bytes"
    );
    let readme = read_entry(&archive, "README.txt");
    assert!(readme.contains("Version: 1.20.1"));
    assert!(readme.contains("Loader: fabric"));
    assert!(readme.contains("Total mods: 1"));
    assert!(readme.contains("Successfully downloaded: 1"));
    assert!(readme.contains("- Sodium mc1.20.1-0.5.3 (sodium-fabric-mc1.20.1-0.5.3.jar)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_partial_reports_missing_mods() {
    let server = sodium_server().await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());

    // Default list: only sodium resolves, the rest get 404s
    let mut cmd = ctx.modbundle();
    cmd.args(["fetch", "-v", "1.20.1", "-l", "fabric"]);
    TestContext::run_blocking(cmd)
        .await
        .success()
        .stdout(predicate::str::contains("(1/4 mods)"))
        .stdout(predicate::str::contains("Mods not downloaded:"))
        .stdout(predicate::str::contains("Lithium: no release found"));

    let archive = std::fs::read(ctx.temp.path().join("minecraft-mods-1.20.1-fabric.zip")).unwrap();
    let readme = read_entry(&archive, "README.txt");
    assert!(readme.contains("Total mods: 4"));
    assert!(readme.contains("Failed: 3"));
    assert!(readme.contains("Failed to download:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_nothing_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/project/sodium/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());
    ctx.write_mods(SODIUM_ONLY);

    let mut cmd = ctx.modbundle();
    cmd.args(["fetch", "-v", "1.20.1", "-l", "fabric"]);
    TestContext::run_blocking(cmd)
        .await
        .failure()
        .stdout(predicate::str::contains("✖ No mods could be downloaded"))
        .stdout(predicate::str::contains("Sodium: no release found for 1.20.1 (fabric)"))
        .stdout(predicate::str::contains("Possible causes:"));

    assert!(!ctx
        .temp
        .path()
        .join("minecraft-mods-1.20.1-fabric.zip")
        .exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_missing_version_makes_no_requests() {
    let server = MockServer::start().await;
    let ctx = TestContext::new();
    ctx.write_config(&server.uri());

    let mut cmd = ctx.modbundle();
    cmd.args(["fetch", "--no-input", "-l", "fabric"]);
    TestContext::run_blocking(cmd)
        .await
        .failure()
        .stdout(predicate::str::contains("✖ Select a game version and a loader"))
        .stderr(predicate::str::contains("help:"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
