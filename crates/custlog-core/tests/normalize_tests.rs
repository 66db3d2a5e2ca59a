#![allow(clippy::unwrap_used, clippy::expect_used)]

use custlog_core::errors::ExErrorKind;
use custlog_core::{
    normalize_row, normalize_rows, ActionType, FieldDelta, FieldKind, NormalizeError, RenderPolicy,
};
use serde_json::json;

#[test]
fn test_snake_and_camel_case_rows_normalize_alike() {
    let policy = RenderPolicy::default();
    let snake = normalize_row(
        &json!({
            "id": 5,
            "customer_id": "C-9",
            "action_type": "update",
            "created_at": "2024-03-05T10:00:00+07:00",
            "created_by": 7,
            "created_by_name": "สมชาย ใจดี",
            "changes": {"grade": {"old": "B", "new": "A"}}
        }),
        &policy,
    )
    .unwrap();
    let camel = normalize_row(
        &json!({
            "id": "5",
            "customerId": "C-9",
            "actionType": "UPDATE",
            "createdAt": "2024-03-05 10:00:00",
            "createdBy": "7",
            "createdByName": "สมชาย ใจดี",
            "changedFields": {"grade": {"oldValue": "B", "newValue": "A"}}
        }),
        &policy,
    )
    .unwrap();

    assert_eq!(snake, camel);
    assert_eq!(snake.action, ActionType::Update);
    assert_eq!(snake.created_at.to_rfc3339(), "2024-03-05T03:00:00+00:00");
}

#[test]
fn test_legacy_trigger_row() {
    let entry = normalize_row(
        &json!({
            "id": 77,
            "customer_id": "C-3",
            "action_type": "INSERT",
            "created_at": "2024-01-02 08:30:00",
            "old_values": null,
            "new_values": "{\"first_name\":\"มานี\",\"tags\":[{\"id\":1,\"name\":\"VIP\"}]}",
            "changed_fields": null
        }),
        &RenderPolicy::default(),
    )
    .unwrap();

    assert_eq!(entry.action, ActionType::Create);
    assert_eq!(entry.field_names().collect::<Vec<_>>(), vec!["first_name", "tags"]);
    let tags = entry.change("tags").unwrap();
    assert_eq!(tags.kind, FieldKind::TagSet);
    assert_eq!(tags.delta, FieldDelta::set(json!([{"id": 1, "name": "VIP"}])));
}

#[test]
fn test_changes_keep_payload_order() {
    let entry = normalize_row(
        &json!({
            "id": 1,
            "customer_id": "C-1",
            "action_type": "update",
            "created_at": "2024-03-05",
            "changes": {
                "phone": {"old": "1", "new": "2"},
                "assigned_to": {"old": null, "new": 8},
                "address": {"old": {"province": "ตาก"}, "new": {"province": "น่าน"}}
            }
        }),
        &RenderPolicy::default(),
    )
    .unwrap();
    assert_eq!(
        entry.field_names().collect::<Vec<_>>(),
        vec!["phone", "assigned_to", "address"]
    );
    assert_eq!(entry.change("address").unwrap().kind, FieldKind::Address);
    assert_eq!(entry.change("assigned_to").unwrap().delta.old, None);
}

#[test]
fn test_row_without_payload_has_no_changes() {
    let entry = normalize_row(
        &json!({"id": 1, "customer_id": "C-1", "action_type": "delete", "created_at": "2024-03-05"}),
        &RenderPolicy::default(),
    )
    .unwrap();
    assert!(entry.changes.is_empty());
}

#[test]
fn test_both_absent_delta_is_kept() {
    let entry = normalize_row(
        &json!({
            "id": 1, "customer_id": "C-1", "action_type": "update", "created_at": "2024-03-05",
            "changes": {"email": {"old": null, "new": null}}
        }),
        &RenderPolicy::default(),
    )
    .unwrap();
    assert_eq!(entry.changes.len(), 1);
    assert!(entry.changes[0].delta.is_empty());
}

#[test]
fn test_malformed_rows_are_rejected_with_reason() {
    let policy = RenderPolicy::default();
    let cases = vec![
        (json!("not a row"), NormalizeError::NotAnObject),
        (
            json!({"customer_id": "C", "action_type": "update", "created_at": "2024-03-05"}),
            NormalizeError::missing("id"),
        ),
        (
            json!({"id": 1, "customer_id": "", "action_type": "update", "created_at": "2024-03-05"}),
            NormalizeError::missing("customer_id"),
        ),
        (
            json!({"id": 1, "customer_id": "C", "action_type": "archive", "created_at": "2024-03-05"}),
            NormalizeError::InvalidActionType {
                value: "archive".to_string(),
            },
        ),
        (
            json!({"id": 1, "customer_id": "C", "action_type": "update"}),
            NormalizeError::missing("created_at"),
        ),
        (
            json!({"id": 1, "customer_id": "C", "action_type": "update", "created_at": "last tuesday"}),
            NormalizeError::InvalidTimestamp {
                value: "last tuesday".to_string(),
            },
        ),
    ];

    for (row, expected) in cases {
        assert_eq!(normalize_row(&row, &policy).unwrap_err(), expected, "row: {}", row);
    }
}

#[test]
fn test_normalize_rows_reports_dropped_rows_by_index() {
    let rows = vec![
        json!({"id": 1, "customer_id": "C", "action_type": "update", "created_at": "2024-03-05"}),
        json!(42),
        json!({"id": 3, "customer_id": "C", "action_type": "nope", "created_at": "2024-03-05"}),
        json!({"id": 4, "customer_id": "C", "action_type": "delete", "created_at": "2024-03-06"}),
    ];
    let out = normalize_rows(&rows, &RenderPolicy::default());

    assert_eq!(out.entries.len(), 2);
    assert_eq!(out.entries[1].id, "4");
    let dropped: Vec<(usize, ExErrorKind)> = out
        .dropped
        .iter()
        .map(|d| (d.index, d.reason.kind()))
        .collect();
    assert_eq!(
        dropped,
        vec![
            (1, ExErrorKind::MalformedRow),
            (2, ExErrorKind::InvalidActionType)
        ]
    );
}

#[test]
fn test_naive_timestamps_follow_policy_offset() {
    let policy = RenderPolicy::from_toml_str("naive_offset_minutes = 0").unwrap();
    let entry = normalize_row(
        &json!({"id": 1, "customer_id": "C", "action_type": "update", "created_at": "2024-03-05 10:00:00"}),
        &policy,
    )
    .unwrap();
    assert_eq!(entry.created_at.to_rfc3339(), "2024-03-05T10:00:00+00:00");
}
