use custlog_core::errors::{ExError, ExErrorKind, NormalizeError};
use custlog_core::RenderPolicy;

#[test]
fn test_normalize_errors_map_to_kinds() {
    let cases = vec![
        (NormalizeError::NotAnObject, ExErrorKind::MalformedRow, "ERR_MALFORMED_ROW"),
        (NormalizeError::missing("id"), ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
        (
            NormalizeError::InvalidActionType {
                value: "archive".to_string(),
            },
            ExErrorKind::InvalidActionType,
            "ERR_INVALID_ACTION_TYPE",
        ),
        (
            NormalizeError::InvalidTimestamp {
                value: "never".to_string(),
            },
            ExErrorKind::InvalidTimestamp,
            "ERR_INVALID_TIMESTAMP",
        ),
    ];

    for (err, kind, code) in cases {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), kind);
        assert_eq!(ex_err.code(), code);
        assert_eq!(ex_err.op(), Some("normalize_row"));
    }
}

#[test]
fn test_error_kind_code_mapping() {
    // Each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidPolicy, "ERR_INVALID_POLICY"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_invalid_policy_toml_is_structured() {
    let err = RenderPolicy::from_toml_str("currency_glyph = [1, 2]").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidPolicy);
    assert_eq!(err.op(), Some("load_policy"));
    assert!(err.to_string().starts_with("[ERR_INVALID_POLICY]"));
}

#[test]
fn test_json_errors_convert_to_serialization() {
    let err: ExError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert_eq!(err.kind(), ExErrorKind::Serialization);
}
