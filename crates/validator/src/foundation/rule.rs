//! Type-erased, shareable rules

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validate, ValidationResult};

/// A type-erased rule over `I`.
///
/// Cloning is a reference-count bump, so one composed rule can be handed to
/// any number of threads. Use it wherever rules of different concrete types
/// must live in one collection, e.g. the sequences given to
/// [`all`](crate::combinators::all) and [`none`](crate::combinators::none).
///
/// # Examples
///
/// ```rust
/// use userguard_validator::prelude::*;
///
/// let rules: Vec<Rule<Profile>> = vec![
///     age_bigger_than_18().into_rule(),
///     username_length_bigger_than_8().into_rule(),
/// ];
/// let rule = all(rules);
///
/// let profile = Profile::new(ProfileKind::Basic, "longusername", "u@site.il", "pw", 17);
/// assert_eq!(evaluate(&rule, &profile).reason(), Some("User must be older than 18"));
/// ```
pub struct Rule<I: ?Sized> {
    inner: Arc<dyn Validate<Input = I> + Send + Sync>,
}

impl<I: ?Sized> Rule<I> {
    /// Wraps a rule.
    pub fn new<V>(rule: V) -> Self
    where
        V: Validate<Input = I> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(rule),
        }
    }
}

impl<I: ?Sized> Clone for Rule<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: ?Sized> fmt::Debug for Rule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("input", &std::any::type_name::<I>())
            .finish_non_exhaustive()
    }
}

impl<I: ?Sized> Validate for Rule<I> {
    type Input = I;

    fn validate(&self, input: &I) -> ValidationResult {
        self.inner.validate(input)
    }
}
