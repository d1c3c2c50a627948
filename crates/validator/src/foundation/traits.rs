//! Core traits for the validation system
//!
//! Leaf rules and combinators share one signature: [`Validate`]. Combinators
//! are ordinary `Validate` implementations, so they nest freely.

use std::rc::Rc;
use std::sync::Arc;

use crate::combinators::{And, Or, Xor};
use crate::foundation::{Rule, ValidationResult};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every rule implements.
///
/// Implementations must be pure: the same input always yields an equal
/// result, and nothing observable changes during evaluation.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::foundation::{Validate, ValidationResult};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> ValidationResult {
///         if input.trim().is_empty() {
///             ValidationResult::invalid("Value must not be blank")
///         } else {
///             ValidationResult::Valid
///         }
///     }
/// }
///
/// assert!(NotBlank.validate("alice").is_valid());
/// assert!(NotBlank.validate("  ").is_invalid());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Applies the rule to `input`.
    fn validate(&self, input: &Self::Input) -> ValidationResult;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Rc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::prelude::*;
///
/// let rule = email_ends_with_il().and(email_length_bigger_than_10());
/// let profile = Profile::new(ProfileKind::Basic, "someone", "user@site.il", "pw", 30);
/// assert!(evaluate(&rule, &profile).is_valid());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two rules with short-circuiting logical AND.
    ///
    /// If `self` fails its result is returned and `other` is never evaluated.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two rules with logical OR.
    ///
    /// Both rules are always evaluated. When both fail the reasons are joined
    /// as `"<left> or <right>"`.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Combines two rules with logical XOR.
    ///
    /// Both rules are always evaluated; exactly one must pass.
    fn xor<V>(self, other: V) -> Xor<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Xor::new(self, other)
    }

    /// Erases the concrete type into a shareable [`Rule`].
    fn into_rule(self) -> Rule<Self::Input>
    where
        Self: Send + Sync + 'static,
    {
        Rule::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
