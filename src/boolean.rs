//! Tri-state booleans.
//!
//! [`Tristate`] is the only domain whose sentinel costs no data value: the
//! "unspecified" state is its own enum variant, so every encodable value is
//! a legal one.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::sentinel::Sentinel;

/// A boolean that may be left unspecified.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tristate {
    #[default]
    Unspecified,
    True,
    False,
}

impl Tristate {
    pub const fn new(value: bool) -> Self {
        if value {
            Tristate::True
        } else {
            Tristate::False
        }
    }

    pub const fn is_true(self) -> bool {
        matches!(self, Tristate::True)
    }

    pub const fn is_false(self) -> bool {
        matches!(self, Tristate::False)
    }

    /// Returns the boolean value, treating unspecified as `false`.
    pub const fn to_bool(self) -> bool {
        self.is_true()
    }

    /// Returns the boolean value, or `default` if unspecified.
    pub const fn to_bool_or(self, default: bool) -> bool {
        match self {
            Tristate::Unspecified => default,
            Tristate::True => true,
            Tristate::False => false,
        }
    }
}

impl Sentinel for Tristate {
    fn unspecified() -> Self {
        Tristate::Unspecified
    }

    fn is_unspecified(&self) -> bool {
        *self == Tristate::Unspecified
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.is_true())
    }
}

impl Display for Tristate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        Tristate::new(value)
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Tristate::Unspecified, Tristate::new)
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        match value {
            Tristate::Unspecified => None,
            Tristate::True => Some(true),
            Tristate::False => Some(false),
        }
    }
}

/// Error returned when parsing a [`Tristate`] from text fails.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseTristateError {
    /// The input was empty.
    Empty,
    /// The input was not one of `true`, `false` or `unspecified`.
    Invalid(String),
}

impl Display for ParseTristateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseTristateError::Empty => write!(f, "cannot parse tristate from empty string"),
            ParseTristateError::Invalid(s) => write!(f, "invalid tristate literal: {:?}", s),
        }
    }
}

impl std::error::Error for ParseTristateError {}

impl FromStr for Tristate {
    type Err = ParseTristateError;

    /// Parses `true`, `false` or `unspecified`, ignoring ASCII case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTristateError::Empty);
        }
        if s.eq_ignore_ascii_case("true") {
            Ok(Tristate::True)
        } else if s.eq_ignore_ascii_case("false") {
            Ok(Tristate::False)
        } else if s.eq_ignore_ascii_case("unspecified") {
            Ok(Tristate::Unspecified)
        } else {
            Err(ParseTristateError::Invalid(s.to_string()))
        }
    }
}
