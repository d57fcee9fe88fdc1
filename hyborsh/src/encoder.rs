//! Borsh-style writer: little-endian scalars, `u32` length prefixes, canonical ordering of sets
//! and maps.
use hyencode::{
    ByteSink, Encode, EncodeBuffer, EncodeConfig, EncodeError, EncodeResult, Encoder, Primitive,
};
use log::{trace, warn};

/// Tag byte of an absent nullable value.
pub const TAG_ABSENT: u8 = 0;
/// Tag byte of a present nullable value.
pub const TAG_PRESENT: u8 = 1;

/// One encode session writing into the sink `S`.
///
/// The sink is exclusively owned by the session. Bytes the sink already held when the session
/// started belong to the caller and are never touched. After an error the bytes written by the
/// session are not a valid encoding and must be discarded, either with [`BorshEncoder::reset`]
/// or by dropping the encoder.
#[derive(Debug, Clone, Default)]
pub struct BorshEncoder<S: ByteSink = EncodeBuffer> {
    sink: S,
    /// Length of the sink when the session started.
    start: usize,
}

impl BorshEncoder<EncodeBuffer> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose buffer is sized according to `config`.
    pub fn with_config(config: &EncodeConfig) -> Self {
        Self::from_sink(config.new_buffer())
    }

    /// Bytes written by this session so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.sink.as_slice()[self.start..]
    }
}

impl<S: ByteSink> BorshEncoder<S> {
    /// Create a session appending to an existing sink. Whatever the sink already holds is kept.
    pub fn from_sink(sink: S) -> Self {
        let start = sink.len();
        Self { sink, start }
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of bytes written by this session so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.sink.len() - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything this session wrote so the encoder can start a new one. Bytes the sink
    /// held before the session are kept.
    pub fn reset(&mut self) {
        self.sink.truncate(self.start);
    }

    /// Give the sink back without finalizing it.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Write a `u32` length prefix. Fails without writing if `len` does not fit.
    #[inline]
    fn write_len(&mut self, len: usize) -> EncodeResult<()> {
        let len = u32::try_from(len).map_err(|_| EncodeError::LengthOverflow { len })?;
        self.sink.append_scalar(len);
        Ok(())
    }

    /// Write a 128-bit value as its low then high 64-bit word.
    #[inline]
    fn write_split_words(&mut self, bits: u128) {
        self.sink.append_scalar(bits as u64);
        self.sink.append_scalar((bits >> 64) as u64);
    }
}

impl<S: ByteSink> Encoder for BorshEncoder<S> {
    type Output = S::Output;

    #[inline]
    fn encode_bool(&mut self, value: bool) -> EncodeResult<()> {
        self.sink.append_scalar(value);
        Ok(())
    }

    #[inline]
    fn encode_number<N: Primitive>(&mut self, value: N) -> EncodeResult<()> {
        if value.is_nan() {
            warn!("Rejected a NaN {} while encoding", N::KIND);
            return Err(EncodeError::NonCanonicalFloat { kind: N::KIND });
        }

        self.sink.append_scalar(value);
        Ok(())
    }

    #[inline]
    fn encode_u128(&mut self, value: u128) -> EncodeResult<()> {
        self.write_split_words(value);
        Ok(())
    }

    #[inline]
    fn encode_i128(&mut self, value: i128) -> EncodeResult<()> {
        self.write_split_words(value as u128);
        Ok(())
    }

    #[inline]
    fn encode_string(&mut self, value: &str) -> EncodeResult<()> {
        self.write_len(value.len())?;
        self.sink.append_bytes(value.as_bytes());
        Ok(())
    }

    #[inline]
    fn encode_null(&mut self) -> EncodeResult<()> {
        self.sink.append_scalar(TAG_ABSENT);
        Ok(())
    }

    fn encode_nullable<T: Encode + ?Sized>(&mut self, value: Option<&T>) -> EncodeResult<()> {
        match value {
            None => self.encode_null(),
            Some(value) => {
                self.sink.append_scalar(TAG_PRESENT);
                self.encode(value)
            }
        }
    }

    fn encode_sequence<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        self.write_len(elements.len())?;
        for element in elements {
            self.encode(element)?;
        }
        Ok(())
    }

    fn encode_numeric_array<N: Primitive>(&mut self, values: &[N]) -> EncodeResult<()> {
        self.write_len(values.len())?;
        match N::slice_le_bytes(values) {
            Some(bytes) => {
                trace!("Bulk copy of {} {} values", values.len(), N::KIND);
                self.sink.append_bytes(&bytes);
            }
            None => {
                for value in values {
                    self.encode_number(*value)?;
                }
            }
        }
        Ok(())
    }

    fn encode_set<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut elements: Vec<&T> = elements.into_iter().collect();
        elements.sort_unstable();
        trace!("Sorted {} set elements", elements.len());

        self.write_len(elements.len())?;
        for element in elements {
            self.encode(element)?;
        }
        Ok(())
    }

    fn encode_map<'a, K, V, I>(&mut self, entries: I) -> EncodeResult<()>
    where
        K: Encode + Ord + ?Sized + 'a,
        V: Encode + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        let mut entries: Vec<(&K, &V)> = entries.into_iter().collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        trace!("Sorted {} map entries", entries.len());

        self.write_len(entries.len())?;
        for (key, value) in entries {
            self.encode(key)?;
            self.encode(value)?;
        }
        Ok(())
    }

    #[inline]
    fn finish(self) -> S::Output {
        self.sink.finalize()
    }
}
