//! Strings with a reserved marker literal as the sentinel.
//!
//! The marker starts with a NUL byte, which ordinary text never contains.
//! It is not formally excluded though: a caller that builds exactly
//! [`UNSPECIFIED_STRING`] is classified as unspecified. The empty string is
//! always specified.

use std::fmt::Formatter;

use crate::sentinel::Sentinel;

/// The reserved literal standing for "unspecified".
pub const UNSPECIFIED_STRING: &str = "\u{0}unspecified";

impl Sentinel for String {
    fn unspecified() -> Self {
        UNSPECIFIED_STRING.to_string()
    }

    fn is_unspecified(&self) -> bool {
        self == UNSPECIFIED_STRING
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Sentinel for &str {
    fn unspecified() -> Self {
        UNSPECIFIED_STRING
    }

    fn is_unspecified(&self) -> bool {
        *self == UNSPECIFIED_STRING
    }

    fn same(&self, other: &Self) -> bool {
        self == other
    }

    fn fmt_specified(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_sentinel() {
        assert_eq!(String::unspecified(), UNSPECIFIED_STRING);
        assert!(String::unspecified().is_unspecified());
        assert!(UNSPECIFIED_STRING.is_unspecified());
        assert!(UNSPECIFIED_STRING.starts_with('\0'));
    }

    #[test]
    fn test_empty_is_specified() {
        assert!(String::new().is_specified());
        assert!("".is_specified());
        assert!("unspecified".is_specified());
    }

    #[test]
    fn test_merge() {
        let foo = "foo".to_string();
        assert_eq!(foo.clone().merge(String::new()), "");
        assert_eq!(foo.clone().merge(String::unspecified()), "foo");
        assert_eq!(String::unspecified().merge(foo.clone()), "foo");
        assert!(String::unspecified()
            .merge(String::unspecified())
            .is_unspecified());

        assert_eq!("a".merge("b"), "b");
        assert_eq!("a".merge(UNSPECIFIED_STRING), "a");
    }

    #[test]
    fn test_take_or_else() {
        assert_eq!("value".take_or_else("default"), "value");
        assert_eq!("".take_or_else("default"), "");
        assert_eq!(UNSPECIFIED_STRING.take_or_else("default"), "default");
    }

    #[test]
    fn test_comparisons() {
        let a = "hello".to_string();
        let b = "hello".to_string();
        assert!(a.same(&b));
        assert!(a.semantic_eq(&b));
        assert!(a.equal(&b));
        assert!(!a.equal(&"world".to_string()));
        assert!(String::unspecified().equal(&String::unspecified()));
    }

    #[test]
    fn test_render() {
        assert_eq!(String::unspecified().render().to_string(), "{Unspecified}");
        assert_eq!("foo".render().to_string(), "{\"foo\"}");
        assert_eq!("".render().to_string(), "{\"\"}");
        assert_eq!("a\"b".render().to_string(), "{\"a\\\"b\"}");
    }

    #[test]
    fn test_duplicate() {
        let original = "copy me".to_string();
        let copy = original.duplicate();
        assert_eq!(copy, original);
        assert_ne!(copy.as_ptr(), original.as_ptr());
    }
}
