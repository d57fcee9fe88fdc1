//! Static classification of encodable values.
use strum::{Display, EnumIs, EnumIter};

/// The structural category a type resolves to, and therefore the encoding rule applied to it.
///
/// Shapes are resolved at compile time through [`crate::Encode::SHAPE`]; they are never written
/// to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIs, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum Shape {
    /// `bool`
    Bool,
    /// `i8` to `i64`
    SignedInteger,
    /// `u8` to `u64`
    UnsignedInteger,
    /// `f32` and `f64`
    Float,
    /// 128-bit integers, written as two 64-bit words
    BigInteger,
    /// UTF-8 strings
    String,
    /// `Option<T>`
    Nullable,
    /// Homogeneous, ordered sequences
    Sequence,
    /// Sequences of fixed-width integers, written as one bulk copy
    NumericArray,
    /// Unordered collections of distinct elements
    Set,
    /// Key to value associations
    Map,
    /// User-defined aggregates that encode themselves field by field
    Object,
}

impl Shape {
    /// Returns `true` for shapes whose encoding starts with a 32-bit length prefix.
    #[inline]
    pub const fn is_length_prefixed(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Sequence | Self::NumericArray | Self::Set | Self::Map
        )
    }

    /// Returns `true` for shapes that need a canonical sort before encoding.
    #[inline]
    pub const fn is_unordered(&self) -> bool {
        matches!(self, Self::Set | Self::Map)
    }
}
