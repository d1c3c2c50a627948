//! Prelude module for convenient imports.
//!
//! Provides a single `use userguard_validator::prelude::*;` import that brings
//! in the traits, outcome types, combinators, macros and profile rules.
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let rule = age_bigger_than_18().and(username_length_bigger_than_8());
//! let profile = Profile::new(ProfileKind::Basic, "shortname", "s@site.il", "pw", 21);
//! assert!(evaluate(&rule, &profile).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core traits and outcome types
// ============================================================================

pub use crate::foundation::{Reason, Rule, Validate, ValidateExt, ValidationResult, evaluate};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, And, Check, FromFn, NoneOf, Or, Xor, all, and, check, from_fn, none, or, xor,
};
pub use crate::{all_of, any_of, compose, none_of};

// ============================================================================
// VALIDATORS: Profile rule library
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// RECORDS
// ============================================================================

pub use userguard_profile::{Profile, ProfileKind};
