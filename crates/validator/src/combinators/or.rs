//! OR combinator - logical disjunction of rules
//!
//! This module provides the [`Or`] combinator which combines two rules
//! with logical OR semantics - at least one rule must pass.
//!
//! Unlike [`And`](crate::combinators::And), `Or` never short-circuits: both
//! rules are evaluated every time so that a double failure can report both
//! reasons.
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let rule = Or::new(password_includes_dollar_sign(), password_length_bigger_than_8());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "u@site.il", "abc", 30);
//! assert_eq!(
//!     evaluate(&rule, &profile).reason(),
//!     Some("Password must include $ character or Password must be longer than 8 characters"),
//! );
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Placeholder rendered for a failed operand that carries no reason.
pub const UNKNOWN_REASON: &str = "Unknown";

/// Combines two rules with logical OR.
///
/// Both rules are always evaluated, left first. If either passes the result
/// is valid. If both fail the reason is `"<left reason> or <right reason>"`.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (second) rule.
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first rule to evaluate
    /// * `right` - The second rule to evaluate
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

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let left = self.left.validate(input);
        let right = self.right.validate(input);

        if left.is_valid() || right.is_valid() {
            return ValidationResult::Valid;
        }

        ValidationResult::invalid(format!(
            "{} or {}",
            left.reason().unwrap_or(UNKNOWN_REASON),
            right.reason().unwrap_or(UNKNOWN_REASON),
        ))
    }
}

/// Creates an `Or` combinator from two rules.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::{check, or};
/// use userguard_validator::foundation::Validate;
///
/// let rule = or(
///     check(|s: &str| s.len() == 5, "not 5 long"),
///     check(|s: &str| s.len() == 10, "not 10 long"),
/// );
/// assert!(rule.validate("hello").is_valid());
/// assert_eq!(rule.validate("hi").reason(), Some("not 5 long or not 10 long"));
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
