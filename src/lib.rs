//! # sentinel-rs: "Unspecified" values without a universal null
//!
//! **`sentinel-rs`** gives scalar values and single-field wrapper messages a uniform notion
//! of *unspecified*, and a fixed set of operations that behave the same way in every domain.
//! It is meant for layered settings: defaults, then a config file, then flags, where each layer
//! may leave a field unset and later layers override earlier ones.
//!
//! ## Sentinels
//!
//! A sentinel is one reserved value per domain that means "not set":
//!
//! | Domain | Sentinel | Cost |
//! |--------|----------|------|
//! | [`Tristate`][crate::boolean::Tristate] | `Unspecified` variant | none |
//! | `i8` .. `i128`, `isize` | `MIN` | `MIN` cannot carry data |
//! | `String`, `&str` | `"\0unspecified"` | that literal cannot carry data |
//! | `f32`, `f64` | NaN | none in practice |
//! | [`Wrapper<M>`][crate::wrapper::Wrapper] | `Absent` or `Unspecified` variant | none; a zero payload is still specified |
//!
//! The integer and string sentinels are lossy: storing the reserved value reads back as
//! "unspecified". Convert with [`to_option`][crate::sentinel::Sentinel::to_option] at the
//! boundary when the full range matters.
//!
//! ## Operations
//!
//! Every domain supports the same operations:
//!
//! - `is_specified` / `is_unspecified`
//! - `take_or_else(fallback)`: keep `self` if specified
//! - `merge(incoming)`: take `incoming` if specified (right-biased)
//! - `render()`: `{Unspecified}` or `{<value>}`
//! - `coalesce(default)`: wrappers only, replaces a missing message
//! - `same`: identity; `semantic_eq`: value, tolerance-aware for floats; `equal`: either
//! - `duplicate`: an independent copy
//!
//! ## Basic Usage
//!
//! ```rust
//! use sentinel_rs::boolean::Tristate;
//! use sentinel_rs::sentinel::Sentinel;
//! use sentinel_rs::wrapper::{Int64Value, Wrapper};
//!
//! // Value domains: merge layers, later layers win when set.
//! let port = 8080i64.merge(i64::unspecified()).merge(9090);
//! assert_eq!(port, 9090);
//!
//! let verbose = Tristate::Unspecified.take_or_else(Tristate::False);
//! assert!(!verbose.to_bool());
//!
//! // Floats compare with a per-precision tolerance.
//! assert!(0.3f64.semantic_eq(&(0.1 + 0.2)));
//!
//! // Wrappers: a present zero is specified, a missing message is not.
//! let zero = Wrapper::new(Int64Value::new(0));
//! assert!(zero.is_specified());
//! assert!(Wrapper::<Int64Value>::Absent.merge(&zero).is_specified());
//! assert_eq!(zero.to_string(), "{0}");
//! ```
//!
//! ## Core Components
//!
//! - **[`sentinel`]**: The [`Sentinel`][crate::sentinel::Sentinel] trait shared by value domains.
//! - **[`boolean`]**, **[`integer`]**, **[`string`]**, **[`float`]**: The value domains.
//! - **[`wrapper`]**: Wrapper messages and the [`Wrapper`][crate::wrapper::Wrapper] container.

pub mod boolean;
pub mod float;
pub mod integer;
pub mod sentinel;
pub mod string;
pub mod wrapper;
