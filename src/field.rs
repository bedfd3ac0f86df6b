//! The validated field holder.
//!
//! This module provides:
//! - [`TextSource`] and [`ErrorDisplay`]: the two narrow capabilities a
//!   host UI control supplies: reading the current text and rendering an
//!   error message
//! - [`ValidatableField`]: couples a text source, a [`Validator`], and an
//!   error label, and exposes a single `validate()` operation that reads
//!   live text, applies the rule, and sets or clears the field's
//!   externally observable error state
//!
//! The field *wraps* a host control through these capabilities rather
//! than inheriting from one, so the validation core can be built and
//! tested with plain closures and no UI framework present.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{PreconditionError, Result};
use crate::rules::Validator;

// ═══════════════════════════════════════════════════════════════════════════════
// Host Control Capabilities
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability to read a control's current text.
///
/// Any `Fn() -> String` closure qualifies.
pub trait TextSource {
    /// The control's text at this moment.
    fn current_text(&self) -> String;
}

impl<F> TextSource for F
where
    F: Fn() -> String,
{
    fn current_text(&self) -> String {
        self()
    }
}

/// Capability to render or clear an error message on a control.
///
/// Any `FnMut(Option<&str>)` closure qualifies. `None` clears the error.
pub trait ErrorDisplay {
    /// Show `Some(message)` on the control, or clear it with `None`.
    fn set_error(&mut self, message: Option<&str>);
}

impl<F> ErrorDisplay for F
where
    F: FnMut(Option<&str>),
{
    fn set_error(&mut self, message: Option<&str>) {
        self(message)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field State
// ═══════════════════════════════════════════════════════════════════════════════

/// The validation state of a field.
///
/// A field starts `Unvalidated` and moves to `Valid` or `Invalid` with
/// each [`ValidatableField::validate`] call. `Unvalidated` is re-entered
/// only through [`ValidatableField::reset`]; reassigning a validator or
/// error label does not change state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    /// No validation has run since construction or the last reset.
    #[default]
    Unvalidated,
    /// The most recent validation passed.
    Valid,
    /// The most recent validation failed.
    Invalid,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validatable Field
// ═══════════════════════════════════════════════════════════════════════════════

/// One input control under validation.
///
/// # Example
///
/// ```
/// use fieldcheck::field::ValidatableField;
/// use fieldcheck::rules::minimum;
///
/// let mut password = ValidatableField::named("password")
///     .with_text_source(|| "hunter2".to_string())
///     .with_validator(minimum(8))
///     .with_error_label("Password must be at least 8 characters");
///
/// assert_eq!(password.validate(), Ok(false));
/// assert_eq!(
///     password.error(),
///     Some("Password must be at least 8 characters")
/// );
/// ```
pub struct ValidatableField {
    name: String,
    text: Option<Box<dyn TextSource>>,
    display: Option<Box<dyn ErrorDisplay>>,
    validator: Option<Box<dyn Validator>>,
    error_label: Option<String>,
    error: Option<String>,
    state: FieldState,
}

impl ValidatableField {
    /// Create an unnamed field with nothing bound.
    pub fn new() -> Self {
        Self::named("")
    }

    /// Create a field with a name used in diagnostics and logging.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            display: None,
            validator: None,
            error_label: None,
            error: None,
            state: FieldState::Unvalidated,
        }
    }

    /// Bind the capability that reads the control's current text.
    pub fn with_text_source(mut self, source: impl TextSource + 'static) -> Self {
        self.bind_text(source);
        self
    }

    /// Bind the capability that renders errors on the control.
    pub fn with_display(mut self, display: impl ErrorDisplay + 'static) -> Self {
        self.bind_display(display);
        self
    }

    /// Assign a validator at construction time.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.set_validator(validator);
        self
    }

    /// Assign an error label at construction time.
    pub fn with_error_label(mut self, label: impl Into<String>) -> Self {
        self.set_error_label(label);
        self
    }

    /// Bind or replace the text source.
    pub fn bind_text(&mut self, source: impl TextSource + 'static) {
        self.text = Some(Box::new(source));
    }

    /// Bind or replace the error display.
    pub fn bind_display(&mut self, display: impl ErrorDisplay + 'static) {
        self.display = Some(Box::new(display));
    }

    /// Set a [`Validator`] for validating the field's input text.
    ///
    /// May be called any number of times; only future `validate()` calls
    /// see the new validator.
    pub fn set_validator(&mut self, validator: impl Validator + 'static) {
        self.validator = Some(Box::new(validator));
    }

    /// Set an already-boxed [`Validator`], e.g. one produced by
    /// [`BuiltinValidator::into_validator`](crate::config::BuiltinValidator::into_validator).
    pub fn set_boxed_validator(&mut self, validator: Box<dyn Validator>) {
        self.validator = Some(validator);
    }

    /// Set the label to show when [`validate`](Self::validate) returns `false`.
    pub fn set_error_label(&mut self, label: impl Into<String>) {
        self.error_label = Some(label.into());
    }

    /// The field's diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently displayed error, or `None` when the field shows none.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The field's validation state.
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Validate the field's current text against the assigned validator.
    ///
    /// Reads live text from the bound [`TextSource`] (an unbound field
    /// validates the empty string), applies the validator, then performs
    /// exactly one write to the field's error state: cleared on success,
    /// set to the error label on failure.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::ValidatorNotConfigured`] if no validator has
    /// been set, and [`PreconditionError::ErrorLabelNotConfigured`] if the
    /// input is invalid and no error label has been set. Neither writes
    /// any state.
    pub fn validate(&mut self) -> Result<bool> {
        let input = self
            .text
            .as_ref()
            .map(|source| source.current_text())
            .unwrap_or_default();

        let valid = {
            let validator = self
                .validator
                .as_ref()
                .ok_or(PreconditionError::ValidatorNotConfigured)?;
            trace!(
                field = %self.name,
                rule = %validator.description(),
                "validating field input"
            );
            validator.is_valid(&input)
        };

        if valid {
            self.apply_error(None);
            self.state = FieldState::Valid;
        } else {
            let label = self
                .error_label
                .clone()
                .ok_or(PreconditionError::ErrorLabelNotConfigured)?;
            debug!(field = %self.name, error = %label, "field input invalid");
            self.apply_error(Some(label));
            self.state = FieldState::Invalid;
        }

        Ok(valid)
    }

    /// Clear the displayed error and return the field to
    /// [`FieldState::Unvalidated`].
    ///
    /// The assigned validator and error label are untouched.
    pub fn reset(&mut self) {
        self.apply_error(None);
        self.state = FieldState::Unvalidated;
    }

    /// The single write to the externally observable error state: the
    /// internal copy and, when bound, the host display stay in lockstep.
    fn apply_error(&mut self, label: Option<String>) {
        if let Some(display) = self.display.as_mut() {
            display.set_error(label.as_deref());
        }
        self.error = label;
    }
}

impl Default for ValidatableField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatableField")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("error", &self.error)
            .field("error_label", &self.error_label)
            .field("has_validator", &self.validator.is_some())
            .field("has_text_source", &self.text.is_some())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::rules::{minimum, Email};

    fn backed_field(initial: &str) -> (ValidatableField, Rc<RefCell<String>>) {
        let backing = Rc::new(RefCell::new(initial.to_string()));
        let source = Rc::clone(&backing);
        let field = ValidatableField::named("test")
            .with_text_source(move || source.borrow().clone());
        (field, backing)
    }

    #[test]
    fn test_validate_without_validator() {
        let mut field = ValidatableField::new();
        assert_eq!(
            field.validate(),
            Err(PreconditionError::ValidatorNotConfigured)
        );
        assert_eq!(field.state(), FieldState::Unvalidated);
    }

    #[test]
    fn test_invalid_without_error_label() {
        let (mut field, _backing) = backed_field("hi");
        field.set_validator(minimum(5));

        assert_eq!(
            field.validate(),
            Err(PreconditionError::ErrorLabelNotConfigured)
        );
        // A precondition failure writes nothing.
        assert_eq!(field.state(), FieldState::Unvalidated);
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_valid_input_clears_error() {
        let (mut field, _backing) = backed_field("hello");
        field.set_validator(minimum(5));
        field.set_error_label("too short");

        assert_eq!(field.validate(), Ok(true));
        assert_eq!(field.state(), FieldState::Valid);
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_invalid_input_sets_label() {
        let (mut field, _backing) = backed_field("hi");
        field.set_validator(minimum(5));
        field.set_error_label("too short");

        assert_eq!(field.validate(), Ok(false));
        assert_eq!(field.state(), FieldState::Invalid);
        assert_eq!(field.error(), Some("too short"));
    }

    #[test]
    fn test_unbound_text_source_validates_empty_string() {
        let mut field = ValidatableField::new()
            .with_validator(minimum(0))
            .with_error_label("unused");
        assert_eq!(field.validate(), Ok(true));

        let mut field = ValidatableField::new()
            .with_validator(minimum(1))
            .with_error_label("required");
        assert_eq!(field.validate(), Ok(false));
        assert_eq!(field.error(), Some("required"));
    }

    #[test]
    fn test_revalidation_reflects_text_changes() {
        let (mut field, backing) = backed_field("bad");
        field.set_validator(Email);
        field.set_error_label("invalid email");

        assert_eq!(field.validate(), Ok(false));
        assert_eq!(field.error(), Some("invalid email"));

        *backing.borrow_mut() = "user@example.com".to_string();
        assert_eq!(field.validate(), Ok(true));
        assert_eq!(field.error(), None);
    }

    #[test]
    fn test_idempotence() {
        let (mut field, _backing) = backed_field("hi");
        field.set_validator(minimum(5));
        field.set_error_label("too short");

        assert_eq!(field.validate(), Ok(false));
        assert_eq!(field.validate(), Ok(false));
        assert_eq!(field.state(), FieldState::Invalid);
        assert_eq!(field.error(), Some("too short"));
    }

    #[test]
    fn test_external_display_observes_writes() {
        let shown: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&shown);

        let backing = Rc::new(RefCell::new("hi".to_string()));
        let source = Rc::clone(&backing);

        let mut field = ValidatableField::named("password")
            .with_text_source(move || source.borrow().clone())
            .with_display(move |message: Option<&str>| {
                sink.borrow_mut().push(message.map(str::to_string));
            })
            .with_validator(minimum(5))
            .with_error_label("too short");

        field.validate().unwrap();
        *backing.borrow_mut() = "hello".to_string();
        field.validate().unwrap();

        // One write per validate call: set, then clear.
        assert_eq!(
            *shown.borrow(),
            vec![Some("too short".to_string()), None]
        );
    }

    #[test]
    fn test_replacing_validator_affects_future_calls_only() {
        let (mut field, _backing) = backed_field("hello");
        field.set_validator(minimum(5));
        field.set_error_label("too short");
        assert_eq!(field.validate(), Ok(true));

        field.set_validator(minimum(10));
        // Setting a validator does not itself change validation state.
        assert_eq!(field.state(), FieldState::Valid);
        assert_eq!(field.validate(), Ok(false));
    }

    #[test]
    fn test_reset() {
        let (mut field, _backing) = backed_field("hi");
        field.set_validator(minimum(5));
        field.set_error_label("too short");
        field.validate().unwrap();
        assert_eq!(field.state(), FieldState::Invalid);

        field.reset();
        assert_eq!(field.state(), FieldState::Unvalidated);
        assert_eq!(field.error(), None);

        // The configuration survives a reset.
        assert_eq!(field.validate(), Ok(false));
    }

    #[test]
    fn test_closure_validator_on_field() {
        let (mut field, _backing) = backed_field("John");
        field.set_validator(|input: &str| input.starts_with('J'));
        field.set_error_label("must start with J");
        assert_eq!(field.validate(), Ok(true));
    }

    #[test]
    fn test_debug_omits_capability_internals() {
        let field = ValidatableField::named("email");
        let debug = format!("{field:?}");
        assert!(debug.contains("email"));
        assert!(debug.contains("Unvalidated"));
    }
}
