//! NONE combinator - no rule in a sequence may pass
//!
//! Rules run in order and evaluation stops at the first rule that passes.
//! Which rule passed is not reported. An empty sequence is vacuously valid.

use crate::foundation::{Validate, ValidationResult};

/// Reason reported when some rule passed.
pub const NONE_PASSED_REASON: &str = "At least one validation passed, expected none.";

/// Requires every rule in an ordered sequence to fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoneOf<V> {
    rules: Vec<V>,
}

impl<V> NoneOf<V> {
    /// Creates a new `NoneOf` combinator.
    pub fn new(rules: Vec<V>) -> Self {
        Self { rules }
    }

    /// Returns the rules in evaluation order.
    pub fn rules(&self) -> &[V] {
        &self.rules
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V> Validate for NoneOf<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        if self.rules.iter().any(|rule| rule.validate(input).is_valid()) {
            ValidationResult::invalid(NONE_PASSED_REASON)
        } else {
            ValidationResult::Valid
        }
    }
}

/// Creates a `NoneOf` combinator from an ordered sequence of rules.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::{check, none};
/// use userguard_validator::foundation::{Validate, ValidateExt};
///
/// // Each closure is its own type, so erase them into one `Rule<str>`.
/// let rule = none([
///     check(|s: &str| s == "admin", "not admin").into_rule(),
///     check(|s: &str| s == "root", "not root").into_rule(),
/// ]);
/// assert!(rule.validate("alice").is_valid());
/// assert_eq!(
///     rule.validate("root").reason(),
///     Some("At least one validation passed, expected none."),
/// );
/// ```
pub fn none<I>(rules: I) -> NoneOf<I::Item>
where
    I: IntoIterator,
    I::Item: Validate,
{
    NoneOf::new(rules.into_iter().collect())
}
