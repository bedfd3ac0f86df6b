//! The `Validator` capability and the built-in validators.
//!
//! This module provides:
//! - The [`Validator`] trait: a single-question capability, "does this
//!   string satisfy a rule"
//! - A blanket impl so any `Fn(&str) -> bool` closure is a validator
//! - Built-in validators: [`Minimum`] (length, optionally trimmed),
//!   [`Email`], [`Phone`]

use std::sync::LazyLock;

use regex::Regex;

// ═══════════════════════════════════════════════════════════════════════════════
// Pre-compiled Regex Patterns
// ═══════════════════════════════════════════════════════════════════════════════

/// Email validation regex (RFC 5322 simplified): limited-class local part,
/// `@`, then a dotted domain; at least one dot is required, so bare
/// hostnames like `user@localhost` are rejected.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).expect("Invalid email regex")
});

/// Phone validation regex: optional `+`-prefixed country code, optional
/// parenthesized group, then at least three digits with space, hyphen, or
/// dot separators.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]+[\- .]*)?(\([0-9]+\)[\- .]*)?([0-9][0-9\- .]+[0-9])$")
        .expect("Invalid phone regex")
});

// ═══════════════════════════════════════════════════════════════════════════════
// Validator Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Tests whether a string satisfies some requirement.
///
/// Implementations must be pure and total over all strings, including the
/// empty string, and must not mutate external state. There are no failure
/// modes: every input is either valid or it is not.
///
/// Any `Fn(&str) -> bool` closure is a `Validator`, so ad hoc rules need
/// no wrapper type:
///
/// ```
/// use fieldcheck::rules::Validator;
///
/// let starts_with_j = |input: &str| input.starts_with('J');
/// assert!(starts_with_j.is_valid("John"));
/// assert!(!starts_with_j.is_valid("Paul"));
/// ```
pub trait Validator {
    /// Returns `true` if the input is considered valid for some requirement.
    fn is_valid(&self, input: &str) -> bool;

    /// Get a short description of this rule, for diagnostics and logging.
    fn description(&self) -> String {
        "custom predicate".to_string()
    }
}

impl<F> Validator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, input: &str) -> bool {
        self(input)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Minimum Length Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// Validates input for meeting a minimum number of characters.
///
/// Length is measured in characters (`chars().count()`), not bytes, so
/// multi-byte input counts the way a user perceives it. A minimum of zero
/// accepts every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimum {
    length: usize,
    trim: bool,
}

impl Minimum {
    /// Create a validator requiring at least `length` characters.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            trim: false,
        }
    }

    /// Create a validator that trims leading and trailing whitespace
    /// before counting.
    pub fn trimmed(length: usize) -> Self {
        Self { length, trim: true }
    }
}

impl Validator for Minimum {
    fn is_valid(&self, input: &str) -> bool {
        let input = if self.trim { input.trim() } else { input };
        input.chars().count() >= self.length
    }

    fn description(&self) -> String {
        if self.trim {
            format!("minimum length (trimmed): {}", self.length)
        } else {
            format!("minimum length: {}", self.length)
        }
    }
}

/// Create a [`Minimum`] validator. For validating against trimmed input,
/// use [`minimum_trimmed`].
pub fn minimum(length: usize) -> Minimum {
    Minimum::new(length)
}

/// Create a [`Minimum`] validator that validates against trimmed input.
pub fn minimum_trimmed(length: usize) -> Minimum {
    Minimum::trimmed(length)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Format Validators
// ═══════════════════════════════════════════════════════════════════════════════

/// Validates input for email formatting.
///
/// The input must fully match the email grammar; in particular the empty
/// string is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Email;

impl Validator for Email {
    fn is_valid(&self, input: &str) -> bool {
        EMAIL_REGEX.is_match(input)
    }

    fn description(&self) -> String {
        "valid email format".to_string()
    }
}

/// Validates input for phone number formatting.
///
/// The input must fully match the phone grammar; in particular the empty
/// string is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Phone;

impl Validator for Phone {
    fn is_valid(&self, input: &str) -> bool {
        PHONE_REGEX.is_match(input)
    }

    fn description(&self) -> String {
        "valid phone number format".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
