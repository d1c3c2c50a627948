//! Leaf rules built from plain functions
//!
//! [`check`] turns a predicate and a fixed failure reason into a rule.
//! [`from_fn`] wraps a function that already produces a
//! [`ValidationResult`].
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::combinators::check;
//! use userguard_validator::foundation::Validate;
//!
//! let adult = check(|age: &u32| *age > 18, "User must be older than 18");
//! assert!(adult.validate(&30).is_valid());
//! assert_eq!(adult.validate(&12).reason(), Some("User must be older than 18"));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Reason, Validate, ValidationResult};

// ============================================================================
// CHECK
// ============================================================================

/// A predicate paired with the reason reported when it does not hold.
///
/// The reason is fixed when the rule is built; it is never computed from
/// the input.
///
/// # Type Parameters
///
/// * `I` - The input type
/// * `F` - The predicate type (`Fn(&I) -> bool`)
pub struct Check<I: ?Sized, F> {
    predicate: F,
    reason: Reason,
    _input: PhantomData<fn(&I)>,
}

impl<I: ?Sized, F> Check<I, F>
where
    F: Fn(&I) -> bool,
{
    /// Creates a new `Check` rule.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Returns `true` when the input is acceptable
    /// * `reason` - Describes the condition the input failed to meet
    pub fn new(predicate: F, reason: impl Into<Reason>) -> Self {
        Self {
            predicate,
            reason: reason.into(),
            _input: PhantomData,
        }
    }
}

impl<I: ?Sized, F> Check<I, F> {
    /// Returns the reason reported on failure.
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

impl<I: ?Sized, F: Clone> Clone for Check<I, F> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            reason: self.reason.clone(),
            _input: PhantomData,
        }
    }
}

impl<I: ?Sized, F> fmt::Debug for Check<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized, F> Validate for Check<I, F>
where
    F: Fn(&I) -> bool,
{
    type Input = I;

    fn validate(&self, input: &I) -> ValidationResult {
        if (self.predicate)(input) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.reason.clone())
        }
    }
}

/// Creates a [`Check`] rule from a predicate and a failure reason.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::check;
/// use userguard_validator::foundation::Validate;
///
/// let has_dollar = check(|s: &str| s.contains('$'), "Password must include $ character");
/// assert!(has_dollar.validate("pa$$").is_valid());
/// assert!(has_dollar.validate("pass").is_invalid());
/// ```
pub fn check<I, F>(predicate: F, reason: impl Into<Reason>) -> Check<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> bool,
{
    Check::new(predicate, reason)
}

// ============================================================================
// FROM FN
// ============================================================================

/// A rule backed by a function that returns a full [`ValidationResult`].
pub struct FromFn<I: ?Sized, F> {
    f: F,
    _input: PhantomData<fn(&I)>,
}

impl<I: ?Sized, F: Clone> Clone for FromFn<I, F> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _input: PhantomData,
        }
    }
}

impl<I: ?Sized, F> fmt::Debug for FromFn<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<I: ?Sized, F> Validate for FromFn<I, F>
where
    F: Fn(&I) -> ValidationResult,
{
    type Input = I;

    fn validate(&self, input: &I) -> ValidationResult {
        (self.f)(input)
    }
}

/// Creates a rule from a function returning a [`ValidationResult`].
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::from_fn;
/// use userguard_validator::foundation::{Validate, ValidationResult};
///
/// let even = from_fn(|n: &u32| {
///     if n % 2 == 0 {
///         ValidationResult::Valid
///     } else {
///         ValidationResult::invalid(format!("{n} is odd"))
///     }
/// });
/// assert_eq!(even.validate(&3).reason(), Some("3 is odd"));
/// ```
pub fn from_fn<I, F>(f: F) -> FromFn<I, F>
where
    I: ?Sized,
    F: Fn(&I) -> ValidationResult,
{
    FromFn {
        f,
        _input: PhantomData,
    }
}
