use thiserror::Error;

/// Errors that can occur while finalizing or exporting an invoice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeikyuError {
    /// Submission-time validation failed; one entry per offending field.
    /// The working copy is preserved unchanged so the caller can correct
    /// and resubmit.
    #[error("validation failed: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Validation(Vec<FieldError>),

    /// PDF rendering failed.
    #[error("render error: {0}")]
    Render(String),

    /// Writing the exported file failed.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeikyuError {
    /// The field errors of a `Validation` failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dot-joined path to the invalid field, with array indices for
    /// item-level errors (e.g. "items.1.description"). Paths use the
    /// serialized (camelCase) field names.
    pub field: String,
    /// User-facing message, surfaced inline next to the field.
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
