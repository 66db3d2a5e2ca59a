//! CLI end-to-end tests
//!
//! These tests run the built binary against fixture files in a temporary
//! directory and check stdout, stderr and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn setup_fixtures(dir: &TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let rows = write(
        dir,
        "rows.json",
        r#"{"rows": [
            {"id": 1, "customer_id": "C-1", "action_type": "create",
             "created_at": "2024-03-01 09:00:00", "created_by": 7,
             "new_values": {"first_name": "มานี", "tags": [1]}},
            {"id": 2, "customer_id": "C-1", "action_type": "update",
             "created_at": "2024-03-05T10:00:00+07:00", "created_by": 8,
             "changes": {"assigned_to": {"old": 7, "new": 99},
                         "updated_at": {"old": "a", "new": "b"}}},
            {"id": 3, "customer_id": "C-2", "action_type": "delete",
             "created_at": "2024-03-06T10:00:00+07:00",
             "changes": {"phone": {"old": "0812345678", "new": null}}},
            "broken"
        ]}"#,
    );
    let actors = write(
        dir,
        "actors.json",
        r#"[{"id": 7, "firstName": "สมชาย", "lastName": "ใจดี"}, {"id": 8, "name": "มานี มีนา"}]"#,
    );
    let tags = write(dir, "tags.json", r#"[{"id": 1, "name": "VIP", "type": "SYSTEM"}]"#);
    (rows, actors, tags)
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_custlog-cli");
    Command::new(cli_bin)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn path_str(path: &std::path::Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_cli_render_text() {
    let temp_dir = TempDir::new().unwrap();
    let (rows, actors, tags) = setup_fixtures(&temp_dir);

    let output = run(&[
        "render",
        "--rows",
        path_str(&rows),
        "--actors",
        path_str(&actors),
        "--tags",
        path_str(&tags),
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = "\
[2024-03-06T10:00:00+07:00] ลบข้อมูลลูกค้า โดย ระบบ
  - เบอร์โทร: 0812345678 → -

[2024-03-05T10:00:00+07:00] ปรับปรุงข้อมูลลูกค้า โดย มานี มีนา
  - มอบหมายจาก สมชาย ใจดี ไปยัง ผู้ใช้ ID 99

[2024-03-01T09:00:00+07:00] สร้างข้อมูลลูกค้า โดย สมชาย ใจดี
  - ชื่อ: มานี
  - เพิ่มแท็ก: VIP

ข้ามรายการที่อ่านไม่ได้ 1 รายการ
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_cli_render_json_with_filters() {
    let temp_dir = TempDir::new().unwrap();
    let (rows, actors, _tags) = setup_fixtures(&temp_dir);

    let output = run(&[
        "render",
        "--rows",
        path_str(&rows),
        "--actors",
        path_str(&actors),
        "--format",
        "json",
        "--customer",
        "C-1",
        "--action",
        "update",
        "--action",
        "create",
        "--limit",
        "1",
    ]);

    assert!(output.status.success());
    let feed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = feed["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["entry"]["id"], "2");
    assert_eq!(items[0]["entry"]["actionType"], "update");
    assert_eq!(items[0]["actor"], "มานี มีนา");
    assert_eq!(items[0]["lines"][0]["field"], "assigned_to");
    assert_eq!(feed["dropped"][0]["index"], 3);
    assert_eq!(feed["dropped"][0]["reason"]["kind"], "not_an_object");
}

#[test]
fn test_cli_render_to_output_file_with_policy() {
    let temp_dir = TempDir::new().unwrap();
    let (rows, _actors, _tags) = setup_fixtures(&temp_dir);
    let config = write(
        &temp_dir,
        "policy.toml",
        "system_actor_label = \"System\"\n[actions]\ndelete = \"Deleted\"\n",
    );
    let out_path = temp_dir.path().join("feed.txt");

    let output = run(&[
        "render",
        "--rows",
        path_str(&rows),
        "--config",
        path_str(&config),
        "--fields",
        "phone,first_name",
        "--output",
        path_str(&out_path),
    ]);

    assert!(output.status.success());
    let written = fs::read_to_string(&out_path).unwrap();
    assert!(written.starts_with("[2024-03-06T10:00:00+07:00] Deleted โดย System\n"));
    assert!(!written.contains("มอบหมาย"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Rendered 2 items"));
}

#[test]
fn test_cli_normalize_reports_dropped_rows() {
    let temp_dir = TempDir::new().unwrap();
    let (rows, _actors, _tags) = setup_fixtures(&temp_dir);

    let output = run(&["normalize", "--rows", path_str(&rows)]);

    assert!(output.status.success());
    let normalized: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(normalized["entries"].as_array().unwrap().len(), 3);
    assert_eq!(normalized["entries"][0]["createdAt"], "2024-03-01T02:00:00Z");
    assert_eq!(normalized["entries"][1]["changes"][1]["kind"], "internal");
    assert_eq!(normalized["dropped"][0]["index"], 3);
}

#[test]
fn test_cli_missing_rows_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    let output = run(&["render", "--rows", path_str(&missing)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_IO]"), "stderr: {}", stderr);
}

#[test]
fn test_cli_rejects_rows_file_of_wrong_shape() {
    let temp_dir = TempDir::new().unwrap();
    let rows = write(&temp_dir, "rows.json", r#"{"items": []}"#);

    let output = run(&["render", "--rows", path_str(&rows)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_INPUT"));
}

#[test]
fn test_cli_rejects_invalid_policy() {
    let temp_dir = TempDir::new().unwrap();
    let (rows, _actors, _tags) = setup_fixtures(&temp_dir);
    let config = write(&temp_dir, "policy.toml", "naive_offset_minutes = \"seven\"");

    let output = run(&["render", "--rows", path_str(&rows), "--config", path_str(&config)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_POLICY"));
}
