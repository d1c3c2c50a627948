//! Validation outcome types
//!
//! A rule never fails with a Rust error; it answers with a
//! [`ValidationResult`]. Failures carry exactly one human-readable
//! [`Reason`].

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// REASON
// ============================================================================

/// The human-readable explanation attached to an invalid result.
///
/// Static reasons (the common case for rules) are borrowed; reasons built by
/// combinators are owned. A reason is never empty.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[error("{0}")]
pub struct Reason(Cow<'static, str>);

impl Reason {
    /// Creates a reason from a static or owned string.
    ///
    /// Passing an empty string is a contract violation and trips a debug
    /// assertion.
    pub fn new(reason: impl Into<Cow<'static, str>>) -> Self {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "validation reason must not be empty");
        Self(reason)
    }

    /// Returns the reason text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reason and returns the text.
    pub fn into_inner(self) -> Cow<'static, str> {
        self.0
    }
}

// Deserialization goes through the non-empty check instead of `transparent`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Reason {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let reason = String::deserialize(deserializer)?;
        if reason.is_empty() {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&reason),
                &"a non-empty validation reason",
            ));
        }
        Ok(Self(Cow::Owned(reason)))
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for Reason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&'static str> for Reason {
    fn from(reason: &'static str) -> Self {
        Self::new(reason)
    }
}

impl From<String> for Reason {
    fn from(reason: String) -> Self {
        Self::new(reason)
    }
}

impl PartialEq<str> for Reason {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Reason {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The outcome of applying a rule to an input.
///
/// Callers match on it exhaustively; there is no third state.
///
/// # Examples
///
/// ```rust
/// use userguard_validator::foundation::ValidationResult;
///
/// let ok = ValidationResult::Valid;
/// assert!(ok.is_valid());
/// assert_eq!(ok.reason(), None);
///
/// let failed = ValidationResult::invalid("User must be older than 18");
/// assert!(failed.is_invalid());
/// assert_eq!(failed.reason(), Some("User must be older than 18"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "validation result must be checked"]
pub enum ValidationResult {
    /// The input satisfies the rule.
    Valid,
    /// The input violates the rule, for the given reason.
    Invalid(Reason),
}

impl ValidationResult {
    /// Creates an invalid result with the given reason.
    pub fn invalid(reason: impl Into<Reason>) -> Self {
        Self::Invalid(reason.into())
    }

    /// Returns `true` for [`Valid`](Self::Valid).
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` for [`Invalid`](Self::Invalid).
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the failure reason, or `None` for a valid result.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason.as_str()),
        }
    }

    /// Consumes the result and returns the failure reason, if any.
    pub fn into_reason(self) -> Option<Reason> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    /// Converts into a `Result` so a failure can be propagated with `?`.
    pub fn into_result(self) -> Result<(), Reason> {
        self.into()
    }
}

impl From<ValidationResult> for Result<(), Reason> {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<(), Reason>> for ValidationResult {
    fn from(result: Result<(), Reason>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(reason) => Self::Invalid(reason),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valid"),
            Self::Invalid(reason) => write!(f, "invalid: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_has_no_reason() {
        let result = ValidationResult::Valid;
        assert!(result.is_valid());
        assert!(!result.is_invalid());
        assert_eq!(result.reason(), None);
        assert_eq!(result.into_reason(), None);
    }

    #[test]
    fn test_invalid_has_reason() {
        let result = ValidationResult::invalid("too short");
        assert!(!result.is_valid());
        assert_eq!(result.reason(), Some("too short"));
    }

    #[test]
    fn test_owned_and_borrowed_reasons_compare_equal() {
        let borrowed = ValidationResult::invalid("a or b");
        let owned = ValidationResult::invalid(format!("{} or {}", "a", "b"));
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::Valid.into_result(), Ok(()));
        let err = ValidationResult::invalid("nope").into_result().unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }

    #[test]
    fn test_from_result() {
        let result: ValidationResult = Err(Reason::from("nope")).into();
        assert_eq!(result.reason(), Some("nope"));
        assert!(ValidationResult::from(Ok(())).is_valid());
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidationResult::Valid.to_string(), "valid");
        assert_eq!(ValidationResult::invalid("nope").to_string(), "invalid: nope");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_empty_reason() {
        let reason: Reason = serde_json::from_str("\"too short\"").unwrap();
        assert_eq!(reason, "too short");

        assert!(serde_json::from_str::<Reason>("\"\"").is_err());
        assert!(serde_json::from_str::<ValidationResult>(r#"{"Invalid": ""}"#).is_err());
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    #[cfg(debug_assertions)]
    fn test_empty_reason_is_rejected() {
        let _ = Reason::new("");
    }
}
