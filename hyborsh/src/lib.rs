//! Hyborsh: a canonical, Borsh-style binary codec on top of [`hyencode`].
//!
//! Layout (little-endian throughout)
//!  - `bool`: one byte, `0` or `1`.
//!  - Integers and floats: their fixed-width little-endian bytes; a NaN float is rejected.
//!  - `u128`/`i128`: the low 64-bit word, then the high one.
//!  - Strings: `u32` byte length, then the UTF-8 bytes.
//!  - `Option<T>`: `0`, or `1` followed by `T`.
//!  - Sequences: `u32` element count, then each element. Integer slices are copied in bulk.
//!  - Sets: `u32` count, then the elements in ascending order.
//!  - Maps: `u32` count, then each key and value, ascending by key.
//!  - Objects and tuples: their fields in declaration order, without framing.
//!
//! Identical logical values always produce identical bytes, whatever the insertion order of
//! their sets and maps.
//!
//! Example
//! ```
//! use std::collections::HashSet;
//!
//! use hyborsh::encode_to_bytes;
//! use hyencode::Encode;
//!
//! #[derive(Encode)]
//! struct Vote {
//!     round: u32,
//!     approve: bool,
//!     voters: HashSet<u8>,
//! }
//!
//! let vote = Vote { round: 1, approve: true, voters: [3, 1, 2].into_iter().collect() };
//! let bytes = encode_to_bytes(&vote).unwrap();
//! assert_eq!(bytes, [1, 0, 0, 0, 1, 3, 0, 0, 0, 1, 2, 3]);
//! ```

/// The Borsh-style [`hyencode::Encoder`].
pub mod encoder;

use hyencode::{ByteCounter, Encode, EncodeConfig, EncodeResult, Encoder};
use log::debug;

pub use encoder::BorshEncoder;

/// Encode `value` in a fresh session and return its bytes.
pub fn encode_to_bytes<V: Encode + ?Sized>(value: &V) -> EncodeResult<Vec<u8>> {
    encode_to_bytes_with_config(value, &EncodeConfig::default())
}

/// Like [`encode_to_bytes`], with the session's buffer sized by `config`.
pub fn encode_to_bytes_with_config<V: Encode + ?Sized>(
    value: &V,
    config: &EncodeConfig,
) -> EncodeResult<Vec<u8>> {
    debug!(
        "Encoding a {} value with {} bytes reserved",
        V::SHAPE,
        config.initial_capacity
    );
    let mut encoder = BorshEncoder::with_config(config);
    encoder
        .encode(value)
        .inspect_err(|err| debug!("Encoding a {} value failed: {err}", V::SHAPE))?;

    let bytes = encoder.finish();
    debug!("Encoded a {} value into {} bytes", V::SHAPE, bytes.len());
    Ok(bytes)
}

/// Append the encoding of `value` to `out` and return the number of bytes appended.
///
/// On failure `out` is truncated back to its original length.
pub fn encode_into<V: Encode + ?Sized>(value: &V, out: &mut Vec<u8>) -> EncodeResult<usize> {
    debug!("Appending a {} value to {} bytes", V::SHAPE, out.len());
    let mut encoder = BorshEncoder::from_sink(&mut *out);
    match encoder.encode(value) {
        Ok(()) => {
            let written = encoder.len();
            encoder.finish();
            Ok(written)
        }
        Err(err) => {
            debug!("Encoding a {} value failed: {err}", V::SHAPE);
            encoder.reset();
            Err(err)
        }
    }
}

/// Exact number of bytes [`encode_to_bytes`] would produce for `value`, without allocating them.
pub fn encoded_len<V: Encode + ?Sized>(value: &V) -> EncodeResult<usize> {
    let mut encoder = BorshEncoder::from_sink(ByteCounter::new());
    encoder.encode(value)?;
    Ok(encoder.finish())
}
