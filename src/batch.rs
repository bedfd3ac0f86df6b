//! Aggregate validation across many fields.

use tracing::debug;

use crate::error::Result;
use crate::field::ValidatableField;

/// Validate multiple fields at once and return `Ok(true)` if every input
/// is valid.
///
/// Fields are validated in order, each exactly once, and an invalid field
/// does **not** short-circuit the pass: every field updates its own
/// displayed error state, so a user sees all invalid fields at the same
/// time.
///
/// # Errors
///
/// A [`PreconditionError`](crate::error::PreconditionError) from any
/// field aborts the pass immediately and propagates: a misconfigured
/// field is a programmer error, not an invalid input.
///
/// # Example
///
/// ```
/// use fieldcheck::batch::validate_all;
/// use fieldcheck::field::ValidatableField;
/// use fieldcheck::rules::{minimum, Email};
///
/// let mut email = ValidatableField::named("email")
///     .with_text_source(|| "user@example.com".to_string())
///     .with_validator(Email)
///     .with_error_label("Enter a valid email");
/// let mut password = ValidatableField::named("password")
///     .with_text_source(|| "short".to_string())
///     .with_validator(minimum(8))
///     .with_error_label("Password too short");
///
/// assert_eq!(validate_all([&mut email, &mut password]), Ok(false));
/// assert_eq!(email.error(), None);
/// assert_eq!(password.error(), Some("Password too short"));
/// ```
pub fn validate_all<'a, I>(fields: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a mut ValidatableField>,
{
    let mut all_valid = true;
    let mut checked = 0usize;
    let mut invalid = 0usize;

    for field in fields {
        if !field.validate()? {
            all_valid = false;
            invalid += 1;
        }
        checked += 1;
    }

    debug!(checked, invalid, "aggregate validation pass complete");
    Ok(all_valid)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
