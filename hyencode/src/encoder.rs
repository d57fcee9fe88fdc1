//! The dispatch core: one method per encoding rule.
//!
//! Values pick their rule through their [`Encode`] impl, so the rule for a given static type is
//! known at compile time and a type without an impl is rejected by the compiler. A concrete format
//! implements [`Encoder`] and decides the bytes each rule produces; the traversal of nested values
//! always comes back through [`Encoder::encode`] so every nested value shares the same sink.
use crate::{
    encode::{Encode, EncodeObject},
    error::EncodeResult,
    primitive::Primitive,
};

pub trait Encoder: Sized {
    /// What a finished session produces.
    type Output;

    /// Encode any value by handing it the active encoder.
    #[inline]
    fn encode<V: Encode + ?Sized>(&mut self, value: &V) -> EncodeResult<()> {
        value.encode(self)
    }

    /// Encode one declared field of a composite object. Formats without field framing ignore
    /// `name`.
    #[inline]
    fn encode_field<T: Encode + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> EncodeResult<()> {
        let _ = name;
        self.encode(value)
    }

    fn encode_bool(&mut self, value: bool) -> EncodeResult<()>;

    /// Numeric rule shared by every fixed-width integer and float; width and signedness come from
    /// [`Primitive::KIND`].
    fn encode_number<N: Primitive>(&mut self, value: N) -> EncodeResult<()>;

    fn encode_u128(&mut self, value: u128) -> EncodeResult<()>;

    fn encode_i128(&mut self, value: i128) -> EncodeResult<()>;

    fn encode_string(&mut self, value: &str) -> EncodeResult<()>;

    /// The absent branch of a nullable value.
    fn encode_null(&mut self) -> EncodeResult<()>;

    fn encode_nullable<T: Encode + ?Sized>(&mut self, value: Option<&T>) -> EncodeResult<()>;

    /// Composite objects delegate entirely to their own capability.
    #[inline]
    fn encode_object<C: EncodeObject + ?Sized>(&mut self, value: &C) -> EncodeResult<()> {
        value.encode_fields(self)
    }

    #[inline]
    fn encode_array<T: Encode>(&mut self, values: &[T]) -> EncodeResult<()> {
        self.encode_sequence(values)
    }

    /// Generic sequence rule over any exact-size iteration, in iteration order.
    fn encode_sequence<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator;

    /// Sequences of fixed-width integers, written in one pass.
    fn encode_numeric_array<N: Primitive>(&mut self, values: &[N]) -> EncodeResult<()>;

    /// Unordered collections. Implementations must not depend on iteration order.
    fn encode_set<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>;

    /// Key to value associations. Implementations must not depend on iteration order.
    fn encode_map<'a, K, V, I>(&mut self, entries: I) -> EncodeResult<()>
    where
        K: Encode + Ord + ?Sized + 'a,
        V: Encode + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>;

    /// Consume the encoder and return the finished output.
    fn finish(self) -> Self::Output;
}
