//! Fixed-width numeric primitives.
//!
//! Width and signedness are carried at compile time through [`Primitive::KIND`], so an encoder
//! never has to recover them from a value at runtime. A single generic numeric rule
//! ([`crate::Encoder::encode_number`]) covers every width.
use strum::{Display, EnumIs, EnumIter};

use crate::{buffer::Scalar, shape::Shape};

/// Width and signedness of a fixed-width numeric primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIs, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum NumericKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl NumericKind {
    /// Number of bits of the encoded value.
    #[inline]
    pub const fn num_bits(&self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::U64 | Self::I64 | Self::F64 => 64,
        }
    }

    /// Number of bytes of the encoded value.
    #[inline]
    pub const fn byte_size(&self) -> usize {
        (self.num_bits() / 8) as usize
    }

    /// Returns `true` for two's-complement signed integers.
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns `true` for IEEE-754 floating-point kinds.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// The value shape this kind dispatches to.
    #[inline]
    pub const fn shape(&self) -> Shape {
        if self.is_float() {
            Shape::Float
        } else if self.is_signed() {
            Shape::SignedInteger
        } else {
            Shape::UnsignedInteger
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer or float that encoders write as a single little-endian scalar.
///
/// The trait is sealed: the set of primitive widths is closed.
pub trait Primitive: Scalar + sealed::Sealed {
    const KIND: NumericKind;

    /// Returns `true` if the value is a floating-point NaN.
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    /// Little-endian bytes of a whole slice, borrowed without copying when the host layout
    /// already matches. `None` for kinds that must be written element by element.
    #[inline]
    fn slice_le_bytes(values: &[Self]) -> Option<std::borrow::Cow<'_, [u8]>> {
        let _ = values;
        None
    }
}

macro_rules! impl_integer {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                #[inline]
                fn slice_le_bytes(values: &[Self]) -> Option<std::borrow::Cow<'_, [u8]>> {
                    #[cfg(target_endian = "little")]
                    {
                        // Integers have no padding and every byte pattern is a valid `u8`.
                        let bytes = unsafe {
                            std::slice::from_raw_parts(
                                values.as_ptr() as *const u8,
                                std::mem::size_of_val(values),
                            )
                        };
                        Some(std::borrow::Cow::Borrowed(bytes))
                    }

                    #[cfg(not(target_endian = "little"))]
                    {
                        Some(std::borrow::Cow::Owned(
                            values.iter().flat_map(|v| v.to_le_bytes()).collect(),
                        ))
                    }
                }
            }
        )*
    };
}

impl_integer!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
);

impl sealed::Sealed for f32 {}
impl Primitive for f32 {
    const KIND: NumericKind = NumericKind::F32;

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl sealed::Sealed for f64 {}
impl Primitive for f64 {
    const KIND: NumericKind = NumericKind::F64;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}
