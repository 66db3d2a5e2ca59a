use serde::Serialize;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and reporting at the edges (CLI, callers that
/// surface dropped rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExErrorKind {
    // Row normalization
    /// Raw row is not a JSON object
    MalformedRow,
    /// A required row field (`id`, `customer_id`, `action_type`, `created_at`) is absent
    MissingField,
    /// `action_type` is not one of the known spellings
    InvalidActionType,
    /// `created_at` cannot be parsed as an absolute instant
    InvalidTimestamp,

    // Configuration
    /// Render policy document is not valid
    InvalidPolicy,

    // Integration/IO
    InvalidInput,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::MalformedRow => "ERR_MALFORMED_ROW",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidActionType => "ERR_INVALID_ACTION_TYPE",
            ExErrorKind::InvalidTimestamp => "ERR_INVALID_TIMESTAMP",
            ExErrorKind::InvalidPolicy => "ERR_INVALID_POLICY",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (row id, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Reasons a raw audit row is excluded from the feed
///
/// Rows are never propagated half-formed: the normalizer rejects them with
/// one of these and the pipeline reports the rejection alongside the feed.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizeError {
    /// Row is not a JSON object
    #[error("row is not a JSON object")]
    NotAnObject,

    /// A required field is absent, null or empty
    #[error("required field `{field}` is missing")]
    MissingField { field: String },

    /// `action_type` has an unknown spelling
    #[error("unknown action type: {value}")]
    InvalidActionType { value: String },

    /// `created_at` is not a parseable instant
    #[error("unparseable timestamp: {value}")]
    InvalidTimestamp { value: String },
}

impl NormalizeError {
    pub fn missing(field: &str) -> Self {
        NormalizeError::MissingField {
            field: field.to_string(),
        }
    }

    /// Error kind in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            NormalizeError::NotAnObject => ExErrorKind::MalformedRow,
            NormalizeError::MissingField { .. } => ExErrorKind::MissingField,
            NormalizeError::InvalidActionType { .. } => ExErrorKind::InvalidActionType,
            NormalizeError::InvalidTimestamp { .. } => ExErrorKind::InvalidTimestamp,
        }
    }
}

impl From<NormalizeError> for ExError {
    fn from(err: NormalizeError) -> Self {
        ExError::new(err.kind())
            .with_op("normalize_row")
            .with_message(err.to_string())
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}

impl From<toml::de::Error> for ExError {
    fn from(err: toml::de::Error) -> Self {
        ExError::new(ExErrorKind::InvalidPolicy)
            .with_op("load_policy")
            .with_message(err.to_string())
    }
}
