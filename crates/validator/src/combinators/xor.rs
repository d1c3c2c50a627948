//! XOR combinator - exclusive disjunction of rules
//!
//! Both rules are always evaluated. The combination passes when exactly one
//! of them passes. On failure the individual reasons are dropped in favour of
//! a message naming the shared outcome.
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let rule = Xor::new(password_includes_dollar_sign(), password_includes_letters_numbers_only());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "u@site.il", "abc123", 30);
//! assert!(evaluate(&rule, &profile).is_valid());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "u@site.il", "abc_123", 30);
//! assert_eq!(
//!     evaluate(&rule, &profile).reason(),
//!     Some("XOR failed: both validations were false"),
//! );
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two rules with logical XOR.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xor<L, R> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (second) rule.
    pub(crate) right: R,
}

impl<L, R> Xor<L, R> {
    /// Creates a new `Xor` combinator.
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

impl<L, R> Validate for Xor<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        let left = self.left.validate(input).is_valid();
        let right = self.right.validate(input).is_valid();

        if left ^ right {
            ValidationResult::Valid
        } else {
            ValidationResult::invalid(format!("XOR failed: both validations were {left}"))
        }
    }
}

/// Creates a `Xor` combinator from two rules.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::{check, xor};
/// use userguard_validator::foundation::Validate;
///
/// let rule = xor(
///     check(|n: &i32| *n > 0, "not positive"),
///     check(|n: &i32| n % 2 == 0, "not even"),
/// );
/// assert!(rule.validate(&3).is_valid());
/// assert_eq!(rule.validate(&4).reason(), Some("XOR failed: both validations were true"));
/// ```
pub fn xor<L, R>(left: L, right: R) -> Xor<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Xor::new(left, right)
}
