use dietdesk_testing::{fixtures, MockApi, TestWorld};
use predicates::prelude::*;

#[test]
fn notify_list_requires_a_session() {
    let world = TestWorld::new();
    // Deliberately unreachable: the guard must refuse before any call.
    world.configure("http://127.0.0.1:9").unwrap();

    world
        .run(&["notify", "list"])
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn notify_list_requires_configuration() {
    let world = TestWorld::new();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "list"])
        .failure()
        .stderr(predicate::str::contains("dietdesk init"));
}

#[test]
fn notify_list_renders_normalized_items() {
    let server = MockApi::serve(fixtures::envelope(vec![
        fixtures::pc_del(2, 42, "New", "duplicate entry"),
        fixtures::legacy(4, "success", "Indent approved", "Indent #12 approved", true),
    ]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "list"])
        .success()
        .stdout(predicate::str::contains("PC Delete Request - Indent #42"))
        .stdout(predicate::str::contains("Status: New | Remarks: duplicate entry"))
        .stdout(predicate::str::contains("Indent approved"))
        .stdout(predicate::str::contains("2 unread notifications"));

    assert_eq!(server.requests(), ["GET /notifications"]);
    assert_eq!(server.authorization_headers(), ["Bearer abc123"]);
}

#[test]
fn notify_list_excludes_read_items() {
    let server = MockApi::serve(fixtures::envelope(vec![
        fixtures::pc_del(1, 10, "Open", "already handled"),
        fixtures::legacy(2, "success", "Old news", "seen it", false),
    ]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "list"])
        .success()
        .stdout(predicate::str::contains("No new notifications."));
}

#[test]
fn notify_list_supports_json_output() {
    let server = MockApi::serve(fixtures::envelope(vec![fixtures::stock_new(
        1,
        "quantity revised",
    )]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["--format", "json", "notify", "list"])
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Stock-New\""))
        .stdout(predicate::str::contains("\"message\": \"quantity revised\""));
}

#[test]
fn notify_open_pc_del_resolves_delete_route_and_acknowledges() {
    let server = MockApi::serve(fixtures::envelope(vec![fixtures::pc_del(
        2,
        42,
        "New",
        "duplicate entry",
    )]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "open", "2"])
        .success()
        .stdout(predicate::str::contains("/delete-pc"))
        .stdout(predicate::str::contains("indent: #42"));

    assert!(server
        .requests()
        .contains(&"PUT /notifications/2/read".to_string()));
}

#[test]
fn notify_open_stock_new_resolves_stock_update_route() {
    let server = MockApi::serve(fixtures::envelope(vec![fixtures::stock_new(
        1,
        "quantity revised",
    )]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "open", "1"])
        .success()
        .stdout(predicate::str::contains("/stock-update"))
        .stdout(predicate::str::contains("carrying notification #1"));
}

#[test]
fn notify_open_pc_dtd_has_no_navigation() {
    let server = MockApi::serve(fixtures::envelope(vec![fixtures::pc_dtd(3, 9, "cleanup")]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "open", "3"])
        .success()
        .stdout(predicate::str::contains("No further action"));

    assert!(server
        .requests()
        .contains(&"PUT /notifications/3/read".to_string()));
}

#[test]
fn notify_open_unknown_id_fails_cleanly() {
    let server = MockApi::serve(fixtures::envelope(vec![fixtures::stock_new(1, "x")]));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "open", "99"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn notify_read_all_clears_a_mixed_list() {
    let server = MockApi::serve(fixtures::envelope(fixtures::mixed_pending()));
    let world = TestWorld::new();
    world.configure(server.base_url()).unwrap();
    world.login("abc123").unwrap();

    world
        .run(&["notify", "read-all"])
        .success()
        .stdout(predicate::str::contains("Marked 5 notifications as read."));

    assert!(server
        .requests()
        .contains(&"PUT /notifications/read-all".to_string()));
}
