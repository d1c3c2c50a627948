//! AND combinator - logical conjunction of rules
//!
//! This module provides the [`And`] combinator which combines two rules
//! with fail-fast AND semantics: both rules must pass, and the first failure
//! is reported as-is.
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let rule = And::new(email_ends_with_il(), email_length_bigger_than_10());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "user@site.il", "pw", 30);
//! assert!(evaluate(&rule, &profile).is_valid());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "u@s.com", "pw", 30);
//! assert_eq!(evaluate(&rule, &profile).reason(), Some("Email must end with .il"));
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two rules with logical AND.
///
/// The left rule runs first. If it fails, its result is returned unchanged
/// and the right rule is never evaluated. Otherwise the right rule's result
/// is returned as-is.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (second) rule.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The rule evaluated first
    /// * `right` - The rule evaluated only if `left` passes
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        match self.left.validate(input) {
            ValidationResult::Valid => self.right.validate(input),
            failed @ ValidationResult::Invalid(_) => failed,
        }
    }
}

/// Creates an `And` combinator from two rules.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::{and, check};
/// use userguard_validator::foundation::Validate;
///
/// let rule = and(
///     check(|s: &str| s.len() > 3, "too short"),
///     check(|s: &str| s.len() < 10, "too long"),
/// );
/// assert!(rule.validate("hello").is_valid());
/// assert_eq!(rule.validate("hi").reason(), Some("too short"));
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
