//! Built-in rules
//!
//! The rule library for [`Profile`](userguard_profile::Profile) records.
//!
//! # Examples
//!
//! ```rust
//! use userguard_validator::prelude::*;
//!
//! let signup = all_of![
//!     age_bigger_than_18(),
//!     email_ends_with_il().and(email_length_bigger_than_10()),
//!     password_length_bigger_than_8().and(password_is_different_from_username()),
//! ];
//!
//! let profile =
//!     Profile::new(ProfileKind::Premium, "someone", "someone@site.il", "l0ngpassw0rd", 30);
//! assert!(evaluate(&signup, &profile).is_valid());
//! ```

pub mod profile;

pub use profile::{
    ProfileCheck, age_bigger_than_18, email_ends_with_il, email_length_bigger_than_10,
    password_includes_dollar_sign, password_includes_letters_numbers_only,
    password_is_different_from_username, password_length_bigger_than_8,
    username_length_bigger_than_8,
};
