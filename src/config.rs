//! Declarative field configuration.
//!
//! The built-in validators can be selected by name at construction time,
//! so a form definition loaded from configuration can wire fields without
//! code. Directly injecting a [`Validator`](crate::rules::Validator),
//! built-in or closure, remains the primary path; this layer only covers
//! the two named formats and the no-validator default.

use serde::{Deserialize, Serialize};

use crate::field::ValidatableField;
use crate::rules::{Email, Phone, Validator};

// ═══════════════════════════════════════════════════════════════════════════════
// Built-in Validator Selection
// ═══════════════════════════════════════════════════════════════════════════════

/// A built-in validator, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinValidator {
    /// No validator preassigned; one must be injected before validating.
    #[default]
    None,
    /// The [`Email`] format validator.
    Email,
    /// The [`Phone`] format validator.
    Phone,
}

impl BuiltinValidator {
    /// The selected validator, boxed, or `None` for
    /// [`BuiltinValidator::None`].
    pub fn into_validator(self) -> Option<Box<dyn Validator>> {
        match self {
            Self::None => None,
            Self::Email => Some(Box::new(Email)),
            Self::Phone => Some(Box::new(Phone)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Configuration
// ═══════════════════════════════════════════════════════════════════════════════

/// Construction-time configuration for one field.
///
/// # Example
///
/// ```
/// use fieldcheck::config::FieldConfig;
///
/// let config: FieldConfig = serde_json::from_str(
///     r#"{ "validator": "email", "error_label": "Enter a valid email" }"#,
/// )
/// .unwrap();
/// let mut field = config
///     .build("email")
///     .with_text_source(|| "user@example.com".to_string());
/// assert_eq!(field.validate(), Ok(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Which built-in validator to preassign, if any.
    #[serde(default)]
    pub validator: BuiltinValidator,

    /// The label to show when validation fails.
    #[serde(default)]
    pub error_label: Option<String>,
}

impl FieldConfig {
    /// Build a [`ValidatableField`] from this configuration.
    ///
    /// Text source and error display still come from the host control;
    /// a `validator` of [`BuiltinValidator::None`] leaves the field
    /// without one.
    pub fn build(self, name: impl Into<String>) -> ValidatableField {
        let mut field = ValidatableField::named(name);
        if let Some(validator) = self.validator.into_validator() {
            field.set_boxed_validator(validator);
        }
        if let Some(label) = self.error_label {
            field.set_error_label(label);
        }
        field
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
