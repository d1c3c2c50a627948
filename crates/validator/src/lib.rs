//! # userguard-validator
//!
//! Composable validation rules for user profiles.
//!
//! ## Quick Start
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! // Compose rules with .and() / .or() / .xor(), all() and none()
//! let rule = email_ends_with_il().and(email_length_bigger_than_10());
//!
//! let profile = Profile::new(ProfileKind::Basic, "someone", "user@site.il", "pw", 30);
//! assert_eq!(evaluate(&rule, &profile), ValidationResult::Valid);
//! ```
//!
//! ## Creating Rules
//!
//! Use [`check`](combinators::check) for a predicate with a fixed failure
//! reason, or implement [`Validate`](foundation::Validate) for anything more
//! involved.
//!
//! ## Combinators
//!
//! - [`and`](combinators::and): fail-fast, first failure wins
//! - [`or`](combinators::or): evaluates both, joins reasons with `" or "`
//! - [`xor`](combinators::xor): evaluates both, exactly one must pass
//! - [`all`](combinators::all): in order, first failure wins, empty is valid
//! - [`none`](combinators::none): in order, any pass fails, empty is valid
//!
//! ## Built-in Rules
//!
//! See [`validators::profile`].

// Deep combinator nesting (And<Or<Xor<...>, ...>, ...>) produces complex types
// that are inherent to the generic combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use userguard_profile as profile;
