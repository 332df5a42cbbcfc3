//! Single-field scalar messages.
//!
//! These model the well-known wrapper messages of structured-message
//! frameworks (`google.protobuf.BoolValue` and friends): a struct with one
//! `value` field. The messages deliberately do not implement [`PartialEq`];
//! comparing payloads is the job of [`Wrapper`][super::Wrapper].

use std::fmt::{Debug, Formatter};

use crate::float::fmt_general;

/// A message holding exactly one scalar field.
pub trait Message: Clone + Default + Debug {
    /// The payload type.
    type Scalar: PartialEq + Debug;

    /// Short type name used in log records.
    const NAME: &'static str;

    /// Builds a message around `value`.
    fn with_value(value: Self::Scalar) -> Self;

    fn value(&self) -> &Self::Scalar;

    fn value_mut(&mut self) -> &mut Self::Scalar;

    /// Writes the natural text form of the payload.
    fn fmt_value(&self, f: &mut Formatter<'_>) -> std::fmt::Result;
}

macro_rules! scalar_message {
    ($(#[$meta:meta])* $name:ident($scalar:ty), |$this:ident, $f:ident| $fmt:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub value: $scalar,
        }

        impl $name {
            pub fn new(value: $scalar) -> Self {
                Self { value }
            }
        }

        impl Message for $name {
            type Scalar = $scalar;

            const NAME: &'static str = stringify!($name);

            fn with_value(value: $scalar) -> Self {
                Self::new(value)
            }

            fn value(&self) -> &$scalar {
                &self.value
            }

            fn value_mut(&mut self) -> &mut $scalar {
                &mut self.value
            }

            fn fmt_value(&self, $f: &mut Formatter<'_>) -> std::fmt::Result {
                let $this = &self.value;
                $fmt
            }
        }
    };
}

scalar_message!(
    /// Wrapper message for `bool`.
    BoolValue(bool),
    |v, f| write!(f, "{}", v)
);
scalar_message!(
    /// Wrapper message for a byte sequence. Rendered as lowercase hex.
    BytesValue(Vec<u8>),
    |v, f| f.write_str(&hex::encode(v))
);
scalar_message!(
    /// Wrapper message for `f64`. Rendered in general form.
    DoubleValue(f64),
    |v, f| fmt_general(*v, f)
);
scalar_message!(
    /// Wrapper message for `f32`. Rendered in general form.
    FloatValue(f32),
    |v, f| fmt_general(*v, f)
);
scalar_message!(
    /// Wrapper message for `i32`.
    Int32Value(i32),
    |v, f| write!(f, "{}", v)
);
scalar_message!(
    /// Wrapper message for `i64`.
    Int64Value(i64),
    |v, f| write!(f, "{}", v)
);
scalar_message!(
    /// Wrapper message for a UTF-8 string. Rendered quoted.
    StringValue(String),
    |v, f| write!(f, "{:?}", v)
);
scalar_message!(
    /// Wrapper message for `u32`.
    UInt32Value(u32),
    |v, f| write!(f, "{}", v)
);
scalar_message!(
    /// Wrapper message for `u64`.
    UInt64Value(u64),
    |v, f| write!(f, "{}", v)
);
