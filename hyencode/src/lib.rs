//! Hyencode: a type-directed, format-agnostic encoding core.
//!
//! The crate splits encoding into two halves:
//!  - the value side, [`Encode`], implemented once per Rust type and resolving that type to exactly
//!    one [`Shape`] at compile time;
//!  - the format side, [`Encoder`], with one method per encoding rule, writing into a [`ByteSink`].
//!
//! A type that matches no rule has no [`Encode`] impl, so unsupported shapes are rejected by the
//! compiler instead of failing at runtime. User-defined aggregates implement [`EncodeObject`],
//! usually through `#[derive(Encode)]` (feature `derive`, enabled by default).
//!
//! Example
//! ```
//! use hyencode::prelude::*;
//!
//! #[derive(Encode)]
//! struct Account {
//!     owner: String,
//!     balance: u128,
//!     frozen: bool,
//! }
//!
//! assert_eq!(<Account as Encode>::SHAPE, Shape::Object);
//! assert_eq!(<Vec<u32> as Encode>::SHAPE, Shape::NumericArray);
//! assert_eq!(<Vec<String> as Encode>::SHAPE, Shape::Sequence);
//! ```

// Lets the derive macro's `::hyencode` paths resolve inside this crate's own tests.
extern crate self as hyencode;

/// Append-only byte sinks and the scalar trait they write.
pub mod buffer;
/// Sink allocation options.
pub mod config;
/// Value-side traits and their std implementations.
pub mod encode;
/// The format-side dispatch trait.
pub mod encoder;
/// Error type shared by every encoder.
pub mod error;
/// Fixed-width numeric primitives.
pub mod primitive;
/// Static value shapes.
pub mod shape;

pub use buffer::{ByteCounter, ByteSink, EncodeBuffer, Scalar};
pub use config::EncodeConfig;
pub use encode::{Encode, EncodeObject};
pub use encoder::Encoder;
pub use error::{EncodeError, EncodeResult};
pub use primitive::{NumericKind, Primitive};
pub use shape::Shape;

/// Derive [`EncodeObject`] and [`Encode`] for a struct, encoding fields in declaration order.
///
/// Fields marked `#[encode(skip)]` are not written.
#[cfg(feature = "derive")]
pub use hyencode_derive::Encode;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::{
        ByteSink, Encode, EncodeError, EncodeObject, EncodeResult, Encoder, Primitive, Shape,
    };
}
