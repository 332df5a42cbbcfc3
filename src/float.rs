//! Floating-point values with NaN as the sentinel.
//!
//! Unlike the integer and string domains, no legitimate value is lost: NaN
//! never carries data a caller wants to keep. What changes is comparison.
//! NaN is not equal to itself natively, so the sentinel needs special cases
//! in [`same`][Sentinel::same], and [`semantic_eq`][Sentinel::semantic_eq]
//! compares with an absolute tolerance fixed per precision:
//!
//! | Type | Tolerance |
//! |------|-----------|
//! | `f64` | [`F64_TOLERANCE`] = `1e-9` |
//! | `f32` | [`F32_TOLERANCE`] = `1e-6` |
//!
//! The tolerance check is the plain formula `|a - b| <= tolerance`. Two
//! infinities of the same sign are therefore *not* semantically equal
//! (their difference is NaN); [`same`][Sentinel::same] still holds for them.
//!
//! Specified values render in general form (see [`fmt_general`]), so
//! `1e20` renders as `{1e+20}`.
//!
//! ```rust
//! use sentinel_rs::float::F64_TOLERANCE;
//! use sentinel_rs::sentinel::Sentinel;
//!
//! assert!(1.0f64.semantic_eq(&(1.0 + 0.5 * F64_TOLERANCE)));
//! assert!(!1.0f64.semantic_eq(&(1.0 + 2.0 * F64_TOLERANCE)));
//! assert!(f64::NAN.same(&f64::NAN));
//! ```

use std::fmt::{Display, Formatter, LowerExp};

use log::trace;

use crate::sentinel::Sentinel;

/// Absolute equality tolerance for `f64`.
pub const F64_TOLERANCE: f64 = 1e-9;

/// Absolute equality tolerance for `f32`.
pub const F32_TOLERANCE: f32 = 1e-6;

/// A floating-point precision usable as a sentinel domain.
pub trait Float: Sentinel + Copy + PartialOrd + Display + LowerExp {
    /// Default tolerance used by [`Sentinel::semantic_eq`].
    const TOLERANCE: Self;

    /// Positive infinity.
    const POSITIVE_INFINITY: Self;

    /// Returns `|self - other|`.
    fn abs_diff(self, other: Self) -> Self;

    /// Returns `true` if `self` is infinite, ignoring the sentinel.
    fn is_inf(self) -> bool;
}

/// Returns `true` if `value` is specified and infinite (either sign).
pub fn is_infinite<T: Float>(value: T) -> bool {
    value.is_specified() && value.is_inf()
}

/// Returns `true` iff `|a - b| <= epsilon`.
///
/// NaN on either side yields `false`.
pub fn equals_with_tolerance<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a.abs_diff(b) <= epsilon
}

/// Writes `value` in general form: the shortest digits that round-trip,
/// switching to exponent notation when the decimal exponent is below `-4`
/// or at least `6`.
///
/// ```text
/// 1.23 -> 1.23    123456 -> 123456    1e6 -> 1e+06    1e-10 -> 1e-10
/// ```
///
/// Infinities are written as `+Inf` and `-Inf`, NaN as `NaN`.
pub fn fmt_general<T: Float>(value: T, f: &mut Formatter<'_>) -> std::fmt::Result {
    if value.is_unspecified() {
        return f.write_str("NaN");
    }
    if value.is_inf() {
        let sign = if value == T::POSITIVE_INFINITY { '+' } else { '-' };
        return write!(f, "{}Inf", sign);
    }

    let sci = format!("{:e}", value);
    let parsed = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));
    match parsed {
        Some((mantissa, exp)) if exp < -4 || exp >= 6 => {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        _ => write!(f, "{}", value),
    }
}

macro_rules! impl_float {
    ($t:ty, $tolerance:expr) => {
        impl Float for $t {
            const TOLERANCE: Self = $tolerance;
            const POSITIVE_INFINITY: Self = <$t>::INFINITY;

            fn abs_diff(self, other: Self) -> Self {
                (self - other).abs()
            }

            fn is_inf(self) -> bool {
                self.is_infinite()
            }
        }

        impl Sentinel for $t {
            fn unspecified() -> Self {
                <$t>::NAN
            }

            fn is_unspecified(&self) -> bool {
                self.is_nan()
            }

            fn same(&self, other: &Self) -> bool {
                if self.is_nan() && other.is_nan() {
                    return true;
                }
                self == other
            }

            fn semantic_eq(&self, other: &Self) -> bool {
                match (self.is_nan(), other.is_nan()) {
                    (true, true) => true,
                    (true, false) | (false, true) => false,
                    (false, false) => {
                        let res = equals_with_tolerance(*self, *other, Self::TOLERANCE);
                        trace!(
                            "semantic_eq({}, {}) with tolerance {} => {}",
                            self,
                            other,
                            Self::TOLERANCE,
                            res
                        );
                        res
                    }
                }
            }

            fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                fmt_general(*self, f)
            }
        }
    };
}

impl_float!(f64, F64_TOLERANCE);
impl_float!(f32, F32_TOLERANCE);

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_unspecified() {
        assert!(f64::unspecified().is_nan());
        assert!(f32::unspecified().is_nan());
        assert!(f64::NAN.is_unspecified());
        assert!(f32::NAN.is_unspecified());
        assert!(0.0f64.is_specified());
        assert!((-0.0f32).is_specified());
        assert!(f64::INFINITY.is_specified());
    }

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as Float>::TOLERANCE, 1e-9);
        assert_eq!(<f32 as Float>::TOLERANCE, 1e-6);
        assert!(<f64 as Float>::POSITIVE_INFINITY.is_infinite());
        assert!(<f64 as Float>::POSITIVE_INFINITY > 0.0);
        assert!(<f32 as Float>::POSITIVE_INFINITY.is_infinite());
        assert!(<f32 as Float>::POSITIVE_INFINITY > 0.0);
    }

    #[test]
    fn test_is_infinite() {
        assert!(is_infinite(f64::INFINITY));
        assert!(is_infinite(f64::NEG_INFINITY));
        assert!(is_infinite(f32::INFINITY));
        assert!(!is_infinite(1.0f64));
        assert!(!is_infinite(f64::MAX));
        assert!(!is_infinite(f64::NAN));
        assert!(!is_infinite(f32::NAN));
    }

    #[test]
    fn test_equals_with_tolerance() {
        assert!(equals_with_tolerance(1.0f64, 1.0, F64_TOLERANCE));
        assert!(equals_with_tolerance(1.0f64, 1.0 + 1e-10, F64_TOLERANCE));
        assert!(!equals_with_tolerance(1.0f64, 1.0 + 1e-8, F64_TOLERANCE));
        assert!(equals_with_tolerance(0.1f64 + 0.2, 0.3, F64_TOLERANCE));
        assert!(equals_with_tolerance(0.0f32, -1e-7, F32_TOLERANCE));
        assert!(!equals_with_tolerance(1.0f32, 1.0 + 1e-5, F32_TOLERANCE));

        // Caller-supplied epsilon.
        assert!(!equals_with_tolerance(1.0f64, 1.1, 0.01));
        assert!(equals_with_tolerance(1.0f64, 1.1, 0.2));
        assert!(!equals_with_tolerance(1.0f32, 1.1, 0.01));
        assert!(equals_with_tolerance(1.0f32, 1.1, 0.2));

        assert!(!equals_with_tolerance(f64::NAN, f64::NAN, 1.0));
    }

    #[test]
    fn test_take_or_else() {
        assert_eq!(1.5f64.take_or_else(2.5), 1.5);
        assert_eq!(f64::NAN.take_or_else(2.5), 2.5);
        assert_eq!(f32::NAN.take_or_else(2.5), 2.5);
        assert!(f32::NAN.take_or_else(f32::NAN).is_nan());
    }

    #[test]
    fn test_merge() {
        assert_eq!(1.0f32.merge(2.0), 2.0);
        assert_eq!(1.0f32.merge(f32::NAN), 1.0);
        assert_eq!(f32::NAN.merge(2.0), 2.0);
        assert_eq!(1.0f64.merge(2.0), 2.0);
        assert_eq!(1.0f64.merge(f64::NAN), 1.0);
        assert!(f64::NAN.merge(f64::NAN).is_nan());
    }

    #[test]
    fn test_same() {
        assert!(1.0f32.same(&1.0));
        assert!(!1.0f32.same(&2.0));
        assert!(f32::NAN.same(&f32::NAN));
        assert!(f64::NAN.same(&f64::NAN));
        assert!(!f64::NAN.same(&0.0));
        // No tolerance at the identity level.
        assert!(!1.0f64.same(&(1.0 + 1e-12)));
    }

    #[test]
    fn test_semantic_eq() {
        assert!(1.0f32.semantic_eq(&1.0));
        assert!(1.0f32.semantic_eq(&1.000_000_5));
        assert!(!1.0f32.semantic_eq(&1.000_002));
        assert!(1.0f64.semantic_eq(&1.000_000_000_5));
        assert!(!1.0f64.semantic_eq(&1.000_000_002));

        assert!(f64::NAN.semantic_eq(&f64::NAN));
        assert!(!f64::NAN.semantic_eq(&1.0));
        assert!(!1.0f64.semantic_eq(&f64::NAN));

        assert!(!f64::INFINITY.semantic_eq(&f64::NEG_INFINITY));
    }

    #[test]
    fn test_semantic_eq_infinities_follow_formula() {
        // |inf - inf| is NaN, which is never within tolerance.
        assert!(!f64::INFINITY.semantic_eq(&f64::INFINITY));
        assert!(!f32::NEG_INFINITY.semantic_eq(&f32::NEG_INFINITY));
        assert!(!f64::INFINITY.equal(&f64::INFINITY));
        // Identity still holds.
        assert!(f64::INFINITY.same(&f64::INFINITY));
    }

    #[test]
    fn test_equal_matches_semantic_eq() {
        let values = [0.0f64, 1.0, 1.0 + 5e-10, 1.0 + 2e-9, f64::NAN, f64::INFINITY];
        for a in values {
            for b in values {
                assert_eq!(a.equal(&b), a.semantic_eq(&b), "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(f64::NAN.render().to_string(), "{Unspecified}");
        assert_eq!(f32::NAN.render().to_string(), "{Unspecified}");
        assert_eq!(1.23f64.render().to_string(), "{1.23}");
        assert_eq!(1.23f32.render().to_string(), "{1.23}");
        assert_eq!(2.0f64.render().to_string(), "{2}");
        assert_eq!(f64::NEG_INFINITY.render().to_string(), "{-Inf}");
        assert_eq!(f32::INFINITY.render().to_string(), "{+Inf}");
    }

    #[test]
    fn test_render_general_form() {
        assert_eq!(1e20f64.render().to_string(), "{1e+20}");
        assert_eq!(1e-10f64.render().to_string(), "{1e-10}");
        assert_eq!(1e6f64.render().to_string(), "{1e+06}");
        assert_eq!(1234567.0f64.render().to_string(), "{1.234567e+06}");
        assert_eq!(123456.0f64.render().to_string(), "{123456}");
        assert_eq!(0.0001f64.render().to_string(), "{0.0001}");
        assert_eq!(0.00001f64.render().to_string(), "{1e-05}");
        assert_eq!((-2.5e-7f32).render().to_string(), "{-2.5e-07}");
        assert_eq!(0.0f64.render().to_string(), "{0}");
        assert_eq!(f64::MAX.render().to_string(), "{1.7976931348623157e+308}");
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(3.25f64.duplicate(), 3.25);
        assert!(f64::NAN.duplicate().is_nan());
    }
}
