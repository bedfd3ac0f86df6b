//! # fieldcheck
//!
//! Pluggable input validation for text-field style UI controls.
//!
//! ## Architecture
//!
//! - **Validator**: a single-method capability, "does this string
//!   satisfy a rule", implemented by the built-ins and by any plain
//!   `Fn(&str) -> bool` closure
//! - **Built-in validators**: minimum length (optionally trimmed), email
//!   shape, phone shape
//! - **ValidatableField**: couples a live text source, a validator, and
//!   an error label; `validate()` reads current text, applies the rule,
//!   and sets or clears the field's observable error state
//! - **Aggregate validation**: `validate_all` runs every field in a form
//!   exactly once, with no short-circuiting, so all errors surface together
//! - **Configuration**: built-in validators selectable by name through a
//!   serde-deserializable `FieldConfig`
//!
//! The field wraps a host control through two narrow capabilities
//! (reading text, displaying an error) instead of inheriting from a
//! widget, so the core has no UI framework dependency and tests drive it
//! with closures.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let mut email = ValidatableField::named("email")
//!     .with_text_source(|| "user@example.com".to_string())
//!     .with_validator(Email)
//!     .with_error_label("Enter a valid email address");
//!
//! let mut name = ValidatableField::named("name")
//!     .with_text_source(|| "Jo".to_string())
//!     .with_validator(minimum_trimmed(6))
//!     .with_error_label("Name must be at least 6 characters");
//!
//! assert_eq!(validate_all([&mut email, &mut name]), Ok(false));
//! assert_eq!(email.error(), None);
//! assert_eq!(name.error(), Some("Name must be at least 6 characters"));
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod field;
pub mod rules;

pub use error::{PreconditionError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::validate_all;
    pub use crate::config::{BuiltinValidator, FieldConfig};
    pub use crate::error::{PreconditionError, Result};
    pub use crate::field::{ErrorDisplay, FieldState, TextSource, ValidatableField};
    pub use crate::rules::{minimum, minimum_trimmed, Email, Minimum, Phone, Validator};
}
