use super::*;
use predicates::prelude::*;

#[test]
fn test_list_shows_defaults() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["mods", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mods (4):"))
        .stdout(predicate::str::contains("1. Sodium (sodium)"))
        .stdout(predicate::str::contains("4. Iris Shaders (iris)"));

    // Listing never writes
    assert!(!ctx.mods_file().exists());
}

#[test]
fn test_add_persists() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["mods", "add", "Mod Menu", "modmenu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added Mod Menu (modmenu)"));

    let stored = std::fs::read_to_string(ctx.mods_file()).unwrap();
    assert!(stored.contains("\"hostId\": \"modmenu\""));
    assert!(stored.contains("\"displayName\": \"Mod Menu\""));

    ctx.modbundle()
        .args(["mods", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5. Mod Menu (modmenu)"));
}

#[test]
fn test_add_duplicate_fails() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["mods", "add", "Sodium", "sodium"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the list"))
        .stderr(predicate::str::contains("help:"));

    assert!(!ctx.mods_file().exists());
}

#[test]
fn test_remove_by_position_and_id() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["mods", "remove", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Removed Lithium (lithium)"));

    ctx.modbundle()
        .args(["mods", "remove", "iris"])
        .assert()
        .success();

    ctx.modbundle()
        .args(["mods", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mods (2):"))
        .stdout(predicate::str::contains("2. Fabric API (fabric-api)"))
        .stdout(predicate::str::contains("Lithium").not());
}

#[test]
fn test_remove_unknown_fails() {
    let ctx = TestContext::new();

    ctx.modbundle()
        .args(["mods", "remove", "not-a-mod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the list"));
}

#[test]
fn test_corrupt_list_falls_back_to_defaults() {
    let ctx = TestContext::new();
    ctx.write_mods("{ not json");

    ctx.modbundle()
        .args(["mods", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("using the default list"))
        .stdout(predicate::str::contains("1. Sodium (sodium)"));
}

#[test]
fn test_reset() {
    let ctx = TestContext::new();
    ctx.write_mods(r#"[{"displayName":"Mod Menu","slug":"modmenu","hostId":"modmenu"}]"#);

    ctx.modbundle()
        .args(["mods", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 mods)"));

    ctx.modbundle()
        .args(["mods", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mod Menu").not());
}
