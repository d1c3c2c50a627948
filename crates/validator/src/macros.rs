//! Macros for composing rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`compose!`]: AND-chain rules, left to right
//! - [`any_of!`]: OR-chain rules, left to right
//! - [`all_of!`]: [`All`](crate::combinators::All) over heterogeneous rules
//! - [`none_of!`]: [`NoneOf`](crate::combinators::NoneOf) over heterogeneous rules
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let email = compose![email_ends_with_il(), email_length_bigger_than_10()];
//! let weak_password = none_of![
//!     password_is_different_from_username(),
//!     password_length_bigger_than_8(),
//! ];
//!
//! let profile = Profile::new(ProfileKind::Basic, "bob", "b@site.il", "bob", 30);
//! assert_eq!(
//!     evaluate(&email, &profile).reason(),
//!     Some("Email must be longer than 10 characters"),
//! );
//! assert!(evaluate(&weak_password, &profile).is_valid());
//! ```

// ============================================================================
// CHAINING MACROS
// ============================================================================

/// AND-chains rules: `compose![a, b, c]` is `a.and(b).and(c)`.
///
/// The first failing rule's result is returned; later rules are not run.
#[macro_export]
macro_rules! compose {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::compose!($crate::combinators::And::new($first, $second) $(, $rest)*)
    };
}

/// OR-chains rules: `any_of![a, b, c]` is `a.or(b).or(c)`.
///
/// Every rule is evaluated; a total failure joins all reasons with `" or "`.
#[macro_export]
macro_rules! any_of {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::any_of!($crate::combinators::Or::new($first, $second) $(, $rest)*)
    };
}

// ============================================================================
// SEQUENCE MACROS
// ============================================================================

/// Builds an [`All`](crate::combinators::All) from rules of different types.
///
/// Each rule is erased into a [`Rule`](crate::foundation::Rule), so all of
/// them must validate the same input type and be `Send + Sync + 'static`.
/// `all_of![]` is the vacuously valid rule and needs a type annotation.
#[macro_export]
macro_rules! all_of {
    () => {
        $crate::combinators::All::new(::std::vec::Vec::<$crate::foundation::Rule<_>>::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::All::new(::std::vec![$($crate::foundation::Rule::new($rule)),+])
    };
}

/// Builds a [`NoneOf`](crate::combinators::NoneOf) from rules of different types.
///
/// Same erasure rules as [`all_of!`].
#[macro_export]
macro_rules! none_of {
    () => {
        $crate::combinators::NoneOf::new(::std::vec::Vec::<$crate::foundation::Rule<_>>::new())
    };
    ($($rule:expr),+ $(,)?) => {
        $crate::combinators::NoneOf::new(::std::vec![$($crate::foundation::Rule::new($rule)),+])
    };
}
