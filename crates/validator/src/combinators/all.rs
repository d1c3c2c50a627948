//! ALL combinator - every rule in a sequence must pass
//!
//! Rules run in order and evaluation stops at the first failure, whose
//! result is returned unmodified. An empty sequence is vacuously valid.

use crate::foundation::{Validate, ValidationResult};

/// Requires every rule in an ordered sequence to pass.
///
/// # Type Parameters
///
/// * `V` - The rule type; use [`Rule`](crate::foundation::Rule) to mix
///   different concrete rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct All<V> {
    rules: Vec<V>,
}

impl<V> All<V> {
    /// Creates a new `All` combinator.
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

impl<V> Validate for All<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> ValidationResult {
        self.rules
            .iter()
            .map(|rule| rule.validate(input))
            .find(ValidationResult::is_invalid)
            .unwrap_or(ValidationResult::Valid)
    }
}

/// Creates an `All` combinator from an ordered sequence of rules.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::combinators::{all, check};
/// use userguard_validator::foundation::{Validate, ValidateExt};
///
/// // Each closure is its own type, so erase them into one `Rule<u32>`.
/// let rule = all([
///     check(|n: &u32| *n > 0, "must be positive").into_rule(),
///     check(|n: &u32| *n < 100, "must be below 100").into_rule(),
/// ]);
/// assert!(rule.validate(&42).is_valid());
/// assert_eq!(rule.validate(&0).reason(), Some("must be positive"));
/// ```
pub fn all<I>(rules: I) -> All<I::Item>
where
    I: IntoIterator,
    I::Item: Validate,
{
    All::new(rules.into_iter().collect())
}
