//! Profile rules
//!
//! Each rule is a [`check`] over one or two [`Profile`] fields with a fixed
//! reason describing the unmet condition. None of them compose; callers do
//! that with the combinators.
//!
//! Lengths are counted in UTF-16 code units, so a character outside the
//! Basic Multilingual Plane counts twice.

use std::sync::LazyLock;

use regex::Regex;
use userguard_profile::Profile;

use crate::combinators::{Check, check};

/// The concrete type of every rule in this module.
pub type ProfileCheck = Check<Profile, fn(&Profile) -> bool>;

static LETTERS_AND_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").expect("letters-and-digits pattern is a valid regex")
});

fn profile_check(predicate: fn(&Profile) -> bool, reason: &'static str) -> ProfileCheck {
    check(predicate, reason)
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// ============================================================================
// EMAIL
// ============================================================================

/// The email address ends with `.il`.
#[must_use]
pub fn email_ends_with_il() -> ProfileCheck {
    profile_check(|p| p.email().ends_with(".il"), "Email must end with .il")
}

/// The email address is longer than 10 characters.
#[must_use]
pub fn email_length_bigger_than_10() -> ProfileCheck {
    profile_check(
        |p| utf16_len(p.email()) > 10,
        "Email must be longer than 10 characters",
    )
}

// ============================================================================
// PASSWORD
// ============================================================================

/// The password is longer than 8 characters.
#[must_use]
pub fn password_length_bigger_than_8() -> ProfileCheck {
    profile_check(
        |p| utf16_len(p.password()) > 8,
        "Password must be longer than 8 characters",
    )
}

/// The password is non-empty and made of ASCII letters and digits only.
#[must_use]
pub fn password_includes_letters_numbers_only() -> ProfileCheck {
    profile_check(
        |p| LETTERS_AND_DIGITS.is_match(p.password()),
        "Password must contain only letters and numbers",
    )
}

/// The password contains a `$`.
#[must_use]
pub fn password_includes_dollar_sign() -> ProfileCheck {
    profile_check(
        |p| p.password().contains('$'),
        "Password must include $ character",
    )
}

/// The password differs from the username.
#[must_use]
pub fn password_is_different_from_username() -> ProfileCheck {
    profile_check(
        |p| p.password() != p.username(),
        "Password must be different from username",
    )
}

// ============================================================================
// ACCOUNT
// ============================================================================

/// The user is older than 18.
#[must_use]
pub fn age_bigger_than_18() -> ProfileCheck {
    profile_check(|p| p.age() > 18, "User must be older than 18")
}

/// The username is longer than 8 characters.
#[must_use]
pub fn username_length_bigger_than_8() -> ProfileCheck {
    profile_check(
        |p| utf16_len(p.username()) > 8,
        "Username must be longer than 8 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use userguard_profile::ProfileKind;

    fn profile(username: &str, email: &str, password: &str, age: u32) -> Profile {
        Profile::new(ProfileKind::Basic, username, email, password, age)
    }

    #[test]
    fn test_email_ends_with_il() {
        assert!(email_ends_with_il().validate(&profile("u", "a@b.il", "p", 1)).is_valid());
        assert!(email_ends_with_il().validate(&profile("u", "a@b.com", "p", 1)).is_invalid());
        assert!(email_ends_with_il().validate(&profile("u", "a@b.il.com", "p", 1)).is_invalid());
    }

    #[test]
    fn test_length_thresholds_are_strict() {
        let rule = password_length_bigger_than_8();
        assert!(rule.validate(&profile("u", "e", "12345678", 1)).is_invalid());
        assert!(rule.validate(&profile("u", "e", "123456789", 1)).is_valid());
    }

    #[test]
    fn test_length_counts_code_units_not_bytes() {
        // 9 code units, 18 bytes
        let rule = username_length_bigger_than_8();
        assert!(rule.validate(&profile("ééééééééé", "e", "p", 1)).is_valid());
        assert!(rule.validate(&profile("éééééééé", "e", "p", 1)).is_invalid());
    }

    #[test]
    fn test_length_counts_surrogate_pairs_twice() {
        // 5 chars, 10 code units
        let rule = password_length_bigger_than_8();
        assert!(rule.validate(&profile("u", "e", "😀😀😀😀😀", 1)).is_valid());
        // 4 chars, 8 code units
        assert!(rule.validate(&profile("u", "e", "😀😀😀😀", 1)).is_invalid());

        // 6 chars, 11 code units
        let rule = email_length_bigger_than_10();
        assert!(rule.validate(&profile("u", "😀😀😀😀😀a", "p", 1)).is_valid());
    }

    #[test]
    fn test_letters_numbers_only() {
        let rule = password_includes_letters_numbers_only();
        assert!(rule.validate(&profile("u", "e", "abcXYZ123", 1)).is_valid());
        assert!(rule.validate(&profile("u", "e", "abc$123", 1)).is_invalid());
        assert!(rule.validate(&profile("u", "e", "abc\n", 1)).is_invalid());
        assert!(rule.validate(&profile("u", "e", "", 1)).is_invalid());
    }

    #[test]
    fn test_dollar_sign() {
        let rule = password_includes_dollar_sign();
        assert!(rule.validate(&profile("u", "e", "pa$s", 1)).is_valid());
        assert!(rule.validate(&profile("u", "e", "pass", 1)).is_invalid());
    }

    #[test]
    fn test_age_boundary() {
        let rule = age_bigger_than_18();
        assert!(rule.validate(&profile("u", "e", "p", 18)).is_invalid());
        assert_eq!(
            rule.validate(&profile("u", "e", "p", 19)),
            crate::foundation::ValidationResult::Valid
        );
    }

    #[test]
    fn test_reasons() {
        let p = profile("same", "x", "same", 0);
        let reasons: Vec<Option<String>> = [
            email_ends_with_il(),
            email_length_bigger_than_10(),
            password_length_bigger_than_8(),
            password_includes_dollar_sign(),
            password_is_different_from_username(),
            age_bigger_than_18(),
            username_length_bigger_than_8(),
        ]
        .iter()
        .map(|rule| rule.validate(&p).reason().map(str::to_owned))
        .collect();

        assert_eq!(
            reasons,
            [
                Some("Email must end with .il".to_owned()),
                Some("Email must be longer than 10 characters".to_owned()),
                Some("Password must be longer than 8 characters".to_owned()),
                Some("Password must include $ character".to_owned()),
                Some("Password must be different from username".to_owned()),
                Some("User must be older than 18".to_owned()),
                Some("Username must be longer than 8 characters".to_owned()),
            ]
        );
    }
}
