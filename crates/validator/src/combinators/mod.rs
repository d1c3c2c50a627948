//! Combinators for composing rules
//!
//! Every combinator is itself a [`Validate`](crate::foundation::Validate)
//! implementation, so composites nest without limit.
//!
//! | combinator | evaluates | short-circuits | failure reason |
//! |---|---|---|---|
//! | [`and`] | left, then right | on left failure | the first failing rule's |
//! | [`or`] | both, always | never | `"<left> or <right>"` |
//! | [`xor`] | both, always | never | `"XOR failed: both validations were <true\|false>"` |
//! | [`all`] | in order | on first failure | the first failing rule's |
//! | [`none`] | in order | on first success | `"At least one validation passed, expected none."` |
//!
//! Leaf rules come from [`check`] (predicate plus fixed reason) or
//! [`from_fn`] (a function returning a full result).

pub mod all;
pub mod and;
pub mod check;
pub mod none;
pub mod or;
pub mod xor;

pub use all::{All, all};
pub use and::{And, and};
pub use check::{Check, FromFn, check, from_fn};
pub use none::{NONE_PASSED_REASON, NoneOf, none};
pub use or::{Or, UNKNOWN_REASON, or};
pub use xor::{Xor, xor};
