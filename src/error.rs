//! Error handling for fieldcheck.
//!
//! Validation itself never fails: every string is either a match or not.
//! The only failure modes in this crate are precondition violations:
//! calling [`ValidatableField::validate`](crate::field::ValidatableField::validate)
//! on a field that was never given a validator, or letting an invalid
//! input through with no error label to display. Both are programmer
//! errors: they are raised synchronously, propagate with `?`, and are
//! meant to surface during development rather than be recovered from.

use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// Result Type Alias
// ═══════════════════════════════════════════════════════════════════════════════

/// A specialized Result type for fieldcheck operations.
pub type Result<T> = std::result::Result<T, PreconditionError>;

// ═══════════════════════════════════════════════════════════════════════════════
// Precondition Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// A field was asked to validate before it was fully configured.
///
/// Neither variant is a runtime condition worth retrying; both indicate a
/// misconfigured field and are expected to propagate to the caller uncaught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// `validate()` was called on a field with no validator assigned.
    #[error("a validator must be set; call set_validator first")]
    ValidatorNotConfigured,

    /// The input was invalid but the field has no error label to display.
    #[error("an error label must be set when validating invalid input; call set_error_label first")]
    ErrorLabelNotConfigured,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
