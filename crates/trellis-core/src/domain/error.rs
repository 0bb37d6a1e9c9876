// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::rules::RuleId;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (collected into violation reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    /// A compatibility rule rejected the selection. The message already names
    /// the conflicting flags and a remedy, so it is shown verbatim.
    #[error("{message}")]
    IncompatibleSelection { rule: RuleId, message: String },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown {field} '{value}', expected one of: {}", .allowed.join(", "))]
    UnknownValue {
        field: &'static str,
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Template paths must be relative and stay inside the template root: {path}")]
    InvalidTemplatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IncompatibleSelection { rule, .. } => vec![
                format!("Rule violated: {rule} ({})", rule.description()),
                "Run 'trellis check --all' to list every conflicting choice".into(),
            ],
            Self::UnknownValue { field, allowed, .. } => vec![
                format!("Valid values for --{field}:"),
                format!("  {}", allowed.join(", ")),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use lowercase letters, digits, hyphens, and underscores".into(),
                "Examples: my-app, acme_store, app2".into(),
            ],
            Self::InvalidTemplatePath { .. } => {
                vec!["This is a bug in the overlay tables, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompatibleSelection { .. } => ErrorCategory::Compatibility,
            Self::UnknownValue { .. } | Self::InvalidProjectName { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidTemplatePath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
