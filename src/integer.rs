//! Signed integers with the type minimum reserved as the sentinel.
//!
//! `i64::MIN` (and its counterparts for the other widths) cannot carry real
//! data through this contract: a caller that stores it gets "unspecified"
//! back. Use [`Sentinel::to_option`] at the boundary if the full range is
//! needed.

use std::fmt::Formatter;

use crate::sentinel::Sentinel;

macro_rules! impl_sentinel_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel for $t {
                fn unspecified() -> Self {
                    <$t>::MIN
                }

                fn is_unspecified(&self) -> bool {
                    *self == <$t>::MIN
                }

                fn same(&self, other: &Self) -> bool {
                    self == other
                }

                fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

impl_sentinel_for_int!(i8, i16, i32, i64, i128, isize);
