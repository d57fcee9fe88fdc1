//! Byte sinks: the append-only destinations encoders write into.
//!
//! A sink accepts raw bytes or fixed-width little-endian scalars and, once a session is over,
//! is finalized into its output. Encoders never read back from a sink.
use smallvec::SmallVec;

/// Storage behind [`EncodeBuffer`]. Short encodings (a scalar, a tag and a small string) never
/// touch the heap.
///
/// The inline size must match [`crate::EncodeConfig::INLINE_CAPACITY`].
pub type DynBuf = SmallVec<[u8; 32]>;

/// A value with a fixed-width little-endian byte representation.
pub trait Scalar: Copy {
    type Bytes: AsRef<[u8]>;

    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                type Bytes = [u8; size_of::<$ty>()];

                #[inline]
                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

impl_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64);

impl Scalar for bool {
    type Bytes = [u8; 1];

    #[inline]
    fn to_le_bytes(self) -> Self::Bytes {
        [self as u8]
    }
}

/// Append-only destination of an encode session.
pub trait ByteSink {
    /// What the sink turns into once the session is finalized.
    type Output;

    fn append_bytes(&mut self, bytes: &[u8]);

    /// Write a fixed-width scalar in little-endian order.
    #[inline]
    fn append_scalar<S: Scalar>(&mut self, value: S) {
        self.append_bytes(value.to_le_bytes().as_ref());
    }

    /// Number of bytes written so far.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every byte past the first `len`. Does nothing if the sink is not longer than `len`.
    fn truncate(&mut self, len: usize);

    /// Drop every written byte so the sink can serve a new session.
    #[inline]
    fn reset(&mut self) {
        self.truncate(0);
    }

    fn finalize(self) -> Self::Output;
}

/// The default growable sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeBuffer {
    bytes: DynBuf,
}

impl EncodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer able to hold `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: DynBuf::with_capacity(capacity),
        }
    }

    /// The bytes written so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Whether the content no longer fits inline.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.bytes.spilled()
    }
}

impl ByteSink for EncodeBuffer {
    type Output = Vec<u8>;

    #[inline]
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    #[inline]
    fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }

    #[inline]
    fn finalize(self) -> Vec<u8> {
        self.bytes.into_vec()
    }
}

impl AsRef<[u8]> for EncodeBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl ByteSink for Vec<u8> {
    type Output = Vec<u8>;

    #[inline]
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    #[inline]
    fn finalize(self) -> Vec<u8> {
        self
    }
}

/// Borrowed sinks append into the caller's buffer, which keeps the bytes; finalizing yields
/// nothing.
impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Output = ();

    #[inline]
    fn append_bytes(&mut self, bytes: &[u8]) {
        (**self).append_bytes(bytes)
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        (**self).truncate(len)
    }

    #[inline]
    fn finalize(self) {}
}

/// A sink that only counts bytes. Used to size a value without materializing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCounter {
    count: usize,
}

impl ByteCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteSink for ByteCounter {
    type Output = usize;

    #[inline]
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.count += bytes.len();
    }

    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        self.count = self.count.min(len);
    }

    #[inline]
    fn finalize(self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_little_endian() {
        let mut buf = EncodeBuffer::new();
        buf.append_scalar(1u32);
        buf.append_scalar(-2i16);
        buf.append_scalar(true);
        assert_eq!(buf.as_slice(), &[1, 0, 0, 0, 0xfe, 0xff, 1]);
    }

    #[test]
    fn buffer_spills_after_inline_capacity() {
        assert_eq!(
            DynBuf::new().inline_size(),
            crate::EncodeConfig::INLINE_CAPACITY
        );

        let mut buf = EncodeBuffer::new();
        buf.append_bytes(&[0; 32]);
        assert!(!buf.spilled());
        buf.append_bytes(&[1]);
        assert!(buf.spilled());
        assert_eq!(buf.len(), 33);
    }

    #[test]
    fn reset_and_finalize() {
        let mut buf = EncodeBuffer::with_capacity(4);
        buf.append_bytes(b"abc");
        buf.reset();
        assert!(buf.is_empty());
        buf.append_bytes(b"xy");
        assert_eq!(buf.finalize(), b"xy".to_vec());
    }

    #[test]
    fn borrowed_sink_appends_to_owner() {
        fn session<S: ByteSink>(mut sink: S) -> S::Output {
            sink.append_scalar(7u16);
            sink.append_bytes(b"z");
            sink.truncate(3);
            assert_eq!(sink.len(), 3);
            sink.finalize()
        }

        let mut out = vec![9u8];
        session(&mut out);
        assert_eq!(out, vec![9, 7, 0]);
    }

    #[test]
    fn counter_counts() {
        let mut counter = ByteCounter::new();
        counter.append_scalar(1u64);
        counter.append_bytes(b"hello");
        counter.truncate(20);
        assert_eq!(counter.len(), 13);
        counter.truncate(8);
        assert_eq!(counter.finalize(), 8);
    }
}
