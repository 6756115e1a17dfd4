#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::fs;
use std::process::{Command, Output};

use common::{bundled_templates, workspace};

fn gs(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gs"))
        .args(args)
        .arg("--templates")
        .arg(bundled_templates())
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("GS_TEMPLATES_DIR")
        .output()
        .expect("run gs")
}

#[test]
fn test_cli_init_then_create_feature() {
    let (_tmp, dir) = workspace();

    let output = gs(&dir, &["init", "shop", "--module", "github.com/acme/shop"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project shop initialized"));
    assert!(stdout.contains("shop/go.mod"));

    let project = dir.join("shop");
    let output = gs(&project, &["create", "feature", "Order"]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 6);
    assert!(stdout.contains("✅ Generated models/order.go"));

    let controller = fs::read_to_string(project.join("controllers/order_controller.go")).unwrap();
    assert!(controller.contains("\"github.com/acme/shop/services\""));
}

#[test]
fn test_cli_conflict_exits_nonzero() {
    let (_tmp, dir) = workspace();

    assert!(gs(&dir, &["create", "model", "User", "-p", "app"]).status.success());
    let output = gs(&dir, &["create", "model", "User", "-p", "app"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "{stderr}");
}

#[test]
fn test_cli_json_output() {
    let (_tmp, dir) = workspace();

    let output = gs(&dir, &["create", "router", "Book", "-p", "app", "--json"]);
    assert!(output.status.success(), "{:?}", output);
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc[0]["action"], "rendered");
    assert!(doc[0]["path"]
        .as_str()
        .unwrap()
        .ends_with("routers/book_router.go"));
}

#[test]
fn test_cli_rejects_bad_project_name() {
    let (_tmp, dir) = workspace();
    let output = gs(&dir, &["init", "bad/name"]);
    assert!(!output.status.success());
    assert!(!dir.join("bad").exists());
}
