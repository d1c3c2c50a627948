//! Account tiers
//!
//! Tags map to tiers through a lookup over [`ProfileKind::ALL`]. Matching is
//! exact: `"Premium"` or `"premum"` are rejected instead of being folded into
//! a known tier.

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// The closed set of profile tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProfileKind {
    /// Entry tier.
    Basic,
    /// Paid tier.
    Premium,
    /// Top tier.
    Platinum,
}

impl ProfileKind {
    /// Every tier, in ascending order.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Premium, Self::Platinum];

    /// Returns the canonical tag for this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Platinum => "platinum",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| ProfileError::unrecognized_kind(tag))
    }
}
