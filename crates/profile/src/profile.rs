//! The validated record and its factory

use std::fmt;

use crate::error::Result;
use crate::kind::ProfileKind;

/// An immutable user profile.
///
/// Fields are only reachable through accessors, so a profile never changes
/// after construction. Two profiles are equal when all of their fields are.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    kind: ProfileKind,
    username: String,
    email: String,
    password: String,
    age: u32,
}

impl Profile {
    /// Creates a profile of the given tier.
    pub fn new(
        kind: ProfileKind,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            kind,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            age,
        }
    }

    /// Returns the tier of this profile.
    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the age in years.
    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("kind", &self.kind)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("age", &self.age)
            .finish()
    }
}

/// Builds a profile from a tier tag.
///
/// The tag must be one of the canonical tags in [`ProfileKind::ALL`].
///
/// # Errors
///
/// Returns [`ProfileError::UnrecognizedKind`](crate::ProfileError::UnrecognizedKind)
/// when `kind` names no known tier.
///
/// # Examples
///
/// ```rust
/// use userguard_profile::{ProfileKind, create_profile};
///
/// let profile = create_profile("platinum", "carol", "carol@site.il", "pw", 41)?;
/// assert_eq!(profile.kind(), ProfileKind::Platinum);
///
/// assert!(create_profile("gold", "carol", "carol@site.il", "pw", 41).is_err());
/// # Ok::<(), userguard_profile::ProfileError>(())
/// ```
pub fn create_profile(
    kind: &str,
    username: impl Into<String>,
    email: impl Into<String>,
    password: impl Into<String>,
    age: u32,
) -> Result<Profile> {
    let kind = kind.parse::<ProfileKind>().inspect_err(|_| {
        tracing::debug!(kind, "rejected unrecognized profile kind");
    })?;
    let profile = Profile::new(kind, username, email, password, age);
    tracing::debug!(kind = %profile.kind, username = %profile.username, "created profile");
    Ok(profile)
}
