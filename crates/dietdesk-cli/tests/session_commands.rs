use dietdesk_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn status_reports_signed_out_initially() {
    let world = TestWorld::new();
    world
        .run(&["session", "status"])
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn login_then_status_reports_signed_in() {
    let world = TestWorld::new();
    world
        .run(&["session", "login", "--token", "abc123"])
        .success()
        .stdout(predicate::str::contains("Signed in"));

    world
        .run(&["session", "status"])
        .success()
        .stdout(predicate::str::contains("Signed in (token ...c123)"));
}

#[test]
fn logout_clears_the_session() {
    let world = TestWorld::new();
    world.login("abc123").unwrap();

    world.run(&["session", "logout"]).success();
    world
        .run(&["session", "status"])
        .success()
        .stdout(predicate::str::contains("Not signed in"));
    assert!(!world.token_path().exists());
}

#[test]
fn placeholder_token_is_rejected() {
    let world = TestWorld::new();
    world
        .run(&["session", "login", "--token", "demo-token"])
        .failure()
        .stderr(predicate::str::contains("placeholder"));
    assert!(!world.token_path().exists());
}

#[test]
fn empty_token_is_rejected() {
    let world = TestWorld::new();
    world
        .run(&["session", "login", "--token", "  "])
        .failure();
}

#[test]
fn status_supports_json_output() {
    let world = TestWorld::new();
    world.login("abc123").unwrap();
    world
        .run(&["--format", "json", "session", "status"])
        .success()
        .stdout(predicate::str::contains("\"authorized\":true"));
}

#[test]
fn data_dir_resolution_honors_dietdesk_path_env() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("envdir");

    let mut cmd = assert_cmd::Command::cargo_bin("dietdesk").unwrap();
    cmd.env("DIETDESK_PATH", &data_dir)
        .args(["session", "login", "--token", "abc123"])
        .assert()
        .success();

    assert!(data_dir.join("token").exists());
}

#[test]
fn full_token_never_echoed_by_status() {
    let world = TestWorld::new();
    world.login("super-secret-token-value").unwrap();
    world
        .run(&["session", "status"])
        .success()
        .stdout(predicate::str::contains("super-secret").not());
}
