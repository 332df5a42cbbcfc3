//! The sentinel contract shared by all value domains.
//!
//! A *sentinel-encoded* value reserves one element of its own type to mean
//! "unspecified". There is no separate tag: the reserved element *is* the
//! absence marker. Each domain picks its own reserved element:
//!
//! | Domain | Sentinel |
//! |--------|----------|
//! | [`Tristate`][crate::boolean::Tristate] | the `Unspecified` variant |
//! | signed integers | `MIN` of the type |
//! | [`String`], `&str` | [`UNSPECIFIED_STRING`][crate::string::UNSPECIFIED_STRING] |
//! | `f32`, `f64` | NaN |
//!
//! On top of the classification ([`is_specified`][Sentinel::is_specified])
//! every domain provides the same combinators, so code that merges layered
//! settings can be written once for all of them.
//!
//! ```rust
//! use sentinel_rs::sentinel::Sentinel;
//!
//! let current: i64 = 10;
//! assert_eq!(current.merge(i64::unspecified()), 10);
//! assert_eq!(i64::unspecified().merge(20), 20);
//! assert_eq!(i64::unspecified().render().to_string(), "{Unspecified}");
//! ```

use std::fmt::{Display, Formatter};

/// Rendering of an unspecified value, shared by every domain.
pub const UNSPECIFIED_TEXT: &str = "{Unspecified}";

/// A value type with one reserved element standing for "unspecified".
///
/// Implementors provide the sentinel, the classification and the identity
/// comparison; everything else has a default derived from those.
pub trait Sentinel: Clone {
    /// Returns the reserved "unspecified" element of the domain.
    fn unspecified() -> Self;

    /// Returns `true` if `self` is the domain sentinel.
    fn is_unspecified(&self) -> bool;

    /// Returns `true` if `self` carries real data.
    fn is_specified(&self) -> bool {
        !self.is_unspecified()
    }

    /// Returns `self` if specified, otherwise `fallback`.
    ///
    /// `fallback` may itself be unspecified.
    fn take_or_else(self, fallback: Self) -> Self {
        if self.is_specified() {
            self
        } else {
            fallback
        }
    }

    /// Merges `incoming` over `self`: `incoming` wins whenever it is specified.
    fn merge(self, incoming: Self) -> Self {
        if incoming.is_specified() {
            incoming
        } else {
            self
        }
    }

    /// Identity-level comparison.
    ///
    /// Two sentinels are always the same, even when the sentinel does not
    /// compare equal to itself natively (NaN).
    fn same(&self, other: &Self) -> bool;

    /// Value-level comparison.
    fn semantic_eq(&self, other: &Self) -> bool {
        self.same(other)
    }

    /// Combined equality. For value domains this is [`semantic_eq`][Sentinel::semantic_eq].
    fn equal(&self, other: &Self) -> bool {
        self.semantic_eq(other)
    }

    /// Returns an independent duplicate of `self`.
    fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Writes the natural text form of a specified value (without braces).
    fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result;

    /// Returns a [`Display`] adapter producing `{Unspecified}` or `{<value>}`.
    fn render(&self) -> Rendered<'_, Self> {
        Rendered(self)
    }

    /// Converts to the tagged form: `None` for the sentinel.
    fn to_option(self) -> Option<Self> {
        if self.is_specified() {
            Some(self)
        } else {
            None
        }
    }

    /// Converts from the tagged form: `None` becomes the sentinel.
    ///
    /// Note that `Some(sentinel)` also maps to the sentinel: the encoding
    /// cannot tell the two apart.
    fn from_option(value: Option<Self>) -> Self {
        value.unwrap_or_else(Self::unspecified)
    }
}

/// Display adapter returned by [`Sentinel::render`].
#[derive(Debug, Copy, Clone)]
pub struct Rendered<'a, T>(&'a T);

impl<T: Sentinel> Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_unspecified() {
            return f.write_str(UNSPECIFIED_TEXT);
        }
        f.write_str("{")?;
        self.0.fmt_specified(f)?;
        f.write_str("}")
    }
}
