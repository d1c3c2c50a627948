//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Outcome**: [`ValidationResult`], [`Reason`]
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Erasure**: [`Rule`]
//! - **Entry point**: [`evaluate`]
//!
//! # Architecture
//!
//! ## 1. Results are data
//!
//! A failed validation is a value, never a panic or an `Err` that unwinds
//! the caller. Convert with [`ValidationResult::into_result`] when `?` is
//! wanted.
//!
//! ## 2. Composition
//!
//! Rules compose using combinators, each of which is itself a rule:
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let rule = password_length_bigger_than_8()
//!     .and(password_includes_dollar_sign())
//!     .and(password_is_different_from_username());
//! # let _ = rule;
//! ```
//!
//! ## 3. Static dispatch by default
//!
//! Combinators are generic structs, so a composed rule is one concrete type.
//! [`Rule`] erases that type when rules must be stored side by side.

pub mod result;
pub mod rule;
pub mod traits;

pub use result::{Reason, ValidationResult};
pub use rule::Rule;
pub use traits::{Validate, ValidateExt};

// ============================================================================
// ENTRY POINT
// ============================================================================

/// Applies `rule` to `record`.
///
/// This is the single entry point callers use; it forwards to
/// [`Validate::validate`] and records the outcome at `TRACE` level.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::prelude::*;
///
/// let profile = Profile::new(ProfileKind::Basic, "someone", "someone@site.il", "abc", 30);
/// let result = evaluate(&password_length_bigger_than_8(), &profile);
/// assert_eq!(result.reason(), Some("Password must be longer than 8 characters"));
/// ```
pub fn evaluate<V>(rule: &V, record: &V::Input) -> ValidationResult
where
    V: Validate + ?Sized,
{
    let result = rule.validate(record);
    match &result {
        ValidationResult::Valid => tracing::trace!(valid = true, "rule evaluated"),
        ValidationResult::Invalid(reason) => {
            tracing::trace!(valid = false, reason = %reason, "rule evaluated");
        }
    }
    result
}

// ============================================================================
// TESTS
// ============================================================================
