use super::*;
use predicates::prelude::*;

#[test]
fn test_config_path() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ctx.config_file().display().to_string(),
        ))
        .stdout(predicate::str::contains(ctx.mods_file().display().to_string()));
}

#[test]
fn test_config_show_creates_default() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "api_base_url: https://api.modrinth.com/v2",
        ))
        .stdout(predicate::str::contains("compression_level: 6"));

    assert!(ctx.config_file().exists());
}

#[test]
fn test_invalid_config_is_reported() {
    let ctx = TestContext::new();
    std::fs::write(ctx.config_file(), "compression_level: 42\n").unwrap();

    ctx.modbundle()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("compression_level must be between 0 and 9"))
        .stderr(predicate::str::contains("modbundle config path"));
}
