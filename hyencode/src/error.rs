use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::primitive::NumericKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum EncodeError {
    /// A floating-point value was NaN.
    #[error(
        "For portability reasons a NaN `{kind}` cannot be encoded. NaN bit patterns are not canonical across platforms."
    )]
    NonCanonicalFloat { kind: NumericKind },

    /// A string, sequence, set or map is longer than the 32-bit length prefix allows.
    #[error(
        "A length of {len} does not fit the 32-bit length prefix (maximum is {}).",
        u32::MAX
    )]
    LengthOverflow { len: usize },

    /// Raised by hand-written object encoders.
    #[error("{0}")]
    Custom(String),
}

impl EncodeError {
    /// Build a [`EncodeError::Custom`] from any displayable message.
    pub fn custom(message: impl std::fmt::Display) -> Self {
        Self::Custom(message.to_string())
    }
}

pub type EncodeResult<T> = Result<T, EncodeError>;
