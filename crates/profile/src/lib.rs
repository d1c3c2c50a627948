//! # userguard-profile
//!
//! The records validated by `userguard-validator`: an immutable [`Profile`],
//! the closed set of account tiers ([`ProfileKind`]), a tag-driven factory
//! and a comparator-driven sorter.
//!
//! ## Quick Start
//!
//! ```rust
//! use userguard_profile::{ProfileKind, create_profile, sort};
//!
//! let alice = create_profile("premium", "alice", "alice@site.il", "s3cret", 30)?;
//! assert_eq!(alice.kind(), ProfileKind::Premium);
//!
//! let mut profiles = vec![alice, create_profile("basic", "bob", "bob@site.il", "pw", 20)?];
//! sort::sort_by(&mut profiles, sort::compare::by_age);
//! assert_eq!(profiles[0].username(), "bob");
//! # Ok::<(), userguard_profile::ProfileError>(())
//! ```

pub mod error;
pub mod kind;
pub mod profile;
pub mod sort;

pub use error::{ProfileError, Result};
pub use kind::ProfileKind;
pub use profile::{Profile, create_profile};
