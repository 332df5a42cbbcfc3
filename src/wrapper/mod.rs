//! Optional wrapper messages.
//!
//! A field typed as a wrapper message can be unspecified in two ways: the
//! field can be missing altogether, or it can hold the kind's *sentinel*.
//! [`Wrapper`] spells out both, next to a present message:
//!
//! | Variant | Meaning | Specified? |
//! |---------|---------|------------|
//! | [`Wrapper::Absent`] | no message at all | no |
//! | [`Wrapper::Unspecified`] | the kind's sentinel | no |
//! | [`Wrapper::Present`] | a shared, immutable message | yes, even with a zero payload |
//!
//! The two unspecified variants are interchangeable for classification
//! and for every comparison. Only [`Wrapper::coalesce`] tells them apart:
//! it replaces `Absent` and lets the sentinel through, and [`Wrapper::merge`]
//! and [`Wrapper::semantic_eq`] use it to normalize their inputs first.
//!
//! Present messages live behind an [`Arc`], so `Present` has an identity:
//! [`Wrapper::same`] compares pointers, while [`Wrapper::semantic_eq`]
//! compares payloads. Payloads are compared exactly, also for the float
//! kinds; use [`crate::float`] for tolerance-aware comparison.
//!
//! # Example
//!
//! ```rust
//! use sentinel_rs::wrapper::{BytesValue, Wrapper};
//!
//! let incoming = Wrapper::new(BytesValue::new(vec![0x02]));
//! let merged = Wrapper::Absent.merge(&incoming);
//! assert_eq!(merged.value(), Some(&vec![0x02]));
//! assert_eq!(merged.to_string(), "{02}");
//! ```

mod message;

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use log::debug;

pub use message::{
    BoolValue, BytesValue, DoubleValue, FloatValue, Int32Value, Int64Value, Message, StringValue,
    UInt32Value, UInt64Value,
};

use crate::sentinel::UNSPECIFIED_TEXT;

/// A possibly missing wrapper message of kind `M`.
#[derive(Debug)]
pub enum Wrapper<M> {
    /// No message.
    Absent,
    /// The sentinel of kind `M`. It has no message, so [`Wrapper::value`]
    /// returns `None`; [`Wrapper::semantic_eq`] compares it as `M::default()`.
    Unspecified,
    /// A message carrying real data.
    Present(Arc<M>),
}

impl<M> Clone for Wrapper<M> {
    /// Clones the handle. The clone refers to the same message.
    fn clone(&self) -> Self {
        match self {
            Wrapper::Absent => Wrapper::Absent,
            Wrapper::Unspecified => Wrapper::Unspecified,
            Wrapper::Present(m) => Wrapper::Present(Arc::clone(m)),
        }
    }
}

impl<M> Default for Wrapper<M> {
    fn default() -> Self {
        Wrapper::Absent
    }
}

impl<M> From<M> for Wrapper<M> {
    fn from(message: M) -> Self {
        Wrapper::Present(Arc::new(message))
    }
}

impl<M> From<Option<M>> for Wrapper<M> {
    fn from(message: Option<M>) -> Self {
        message.map_or(Wrapper::Absent, Wrapper::from)
    }
}

// Constructors and accessors
impl<M> Wrapper<M> {
    /// Wraps `message` as a present value.
    pub fn new(message: M) -> Self {
        Wrapper::Present(Arc::new(message))
    }

    /// Returns the sentinel of kind `M`.
    pub const fn unspecified() -> Self {
        Wrapper::Unspecified
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Wrapper::Absent)
    }

    /// Returns `false` for both `Absent` and `Unspecified`.
    pub const fn is_specified(&self) -> bool {
        matches!(self, Wrapper::Present(_))
    }

    pub const fn is_unspecified(&self) -> bool {
        !self.is_specified()
    }

    /// Returns the present message, if any.
    pub fn message(&self) -> Option<&M> {
        match self {
            Wrapper::Present(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    /// Returns mutable access to the present message when no other
    /// handle shares it.
    pub fn get_mut(&mut self) -> Option<&mut M> {
        match self {
            Wrapper::Present(m) => Arc::get_mut(m),
            _ => None,
        }
    }
}

// The sentinel contract
impl<M: Message> Wrapper<M> {
    /// Returns the payload of a present message.
    pub fn value(&self) -> Option<&M::Scalar> {
        self.message().map(Message::value)
    }

    /// Returns `self` if specified, otherwise `fallback`. Neither is copied.
    pub fn take_or_else(&self, fallback: &Self) -> Self {
        if self.is_specified() {
            self.clone()
        } else {
            fallback.clone()
        }
    }

    /// Replaces `Absent` with `default`. The sentinel passes through.
    pub fn coalesce(&self, default: &Self) -> Self {
        match self {
            Wrapper::Absent => default.clone(),
            _ => self.clone(),
        }
    }

    /// Merges `incoming` over `self`.
    ///
    /// When both sides are specified the result is a fresh message holding a
    /// deep copy of `incoming`'s payload, never `incoming` itself.
    pub fn merge(&self, incoming: &Self) -> Self {
        let current = self.coalesce(&Wrapper::Unspecified);
        let incoming = incoming.coalesce(&Wrapper::Unspecified);

        if current.is_unspecified() {
            return incoming;
        }
        match incoming {
            Wrapper::Present(new) => {
                debug!("merge({}): {:?} over {:?}", M::NAME, new, current);
                Wrapper::new(M::clone(&new))
            }
            _ => current,
        }
    }

    /// Identity comparison.
    ///
    /// `Absent` and `Unspecified` are the same as each other. Present
    /// messages are the same only if they are one allocation.
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Wrapper::Present(a), Wrapper::Present(b)) => Arc::ptr_eq(a, b),
            (Wrapper::Present(_), _) | (_, Wrapper::Present(_)) => false,
            _ => true,
        }
    }

    /// Payload comparison, after normalizing `Absent` to the sentinel.
    ///
    /// The sentinel's payload is `M::default()`, so a present zero value is
    /// semantically equal to an unspecified one.
    pub fn semantic_eq(&self, other: &Self) -> bool {
        let a = self.coalesce(&Wrapper::Unspecified);
        let b = other.coalesce(&Wrapper::Unspecified);

        match (a.message(), b.message()) {
            (Some(a), Some(b)) => a.value() == b.value(),
            (Some(m), None) | (None, Some(m)) => m.value() == M::default().value(),
            (None, None) => true,
        }
    }

    /// [`same`][Wrapper::same], falling back to [`semantic_eq`][Wrapper::semantic_eq].
    pub fn equal(&self, other: &Self) -> bool {
        self.same(other) || self.semantic_eq(other)
    }

    /// Returns an independent copy.
    ///
    /// Unspecified inputs yield the sentinel without allocating. A present
    /// message is deep-copied into a new allocation.
    pub fn duplicate(&self) -> Self {
        match self {
            Wrapper::Present(m) => {
                debug!("duplicate({}): {:?}", M::NAME, m);
                Wrapper::new(M::clone(m))
            }
            _ => Wrapper::Unspecified,
        }
    }
}

impl<M: Message> Display for Wrapper<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Wrapper::Present(m) => {
                f.write_str("{")?;
                m.fmt_value(f)?;
                f.write_str("}")
            }
            _ => f.write_str(UNSPECIFIED_TEXT),
        }
    }
}
