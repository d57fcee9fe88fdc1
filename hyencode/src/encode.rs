//! Value-side traits of the dispatch core and their implementations for std types.
//!
//! Every implementation resolves exactly one [`Shape`]:
//!
//! | Rust type | Shape |
//! |---|---|
//! | `bool` | [`Shape::Bool`] |
//! | `u8`..`u64`, `i8`..`i64`, `f32`, `f64` | integer / float |
//! | `u128`, `i128` | [`Shape::BigInteger`] |
//! | `str`, `String` | [`Shape::String`] |
//! | `Option<T>` | [`Shape::Nullable`] |
//! | `[T]`, `Vec<T>`, `[T; N]`, `VecDeque<T>` | [`Shape::Sequence`] or [`Shape::NumericArray`] |
//! | `BTreeSet<T>`, `HashSet<T>` | [`Shape::Set`] |
//! | `BTreeMap<K, V>`, `HashMap<K, V>` | [`Shape::Map`] |
//! | `()`, tuples, `#[derive(Encode)]` types | [`Shape::Object`] |
//!
//! References and smart pointers are transparent.
use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use crate::{encoder::Encoder, error::EncodeResult, primitive::Primitive, shape::Shape};

/// A value that can be written by any [`Encoder`].
pub trait Encode {
    /// The rule this type resolves to.
    const SHAPE: Shape;

    /// The rule a slice of this type resolves to.
    const SLICE_SHAPE: Shape = Shape::Sequence;

    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()>;

    /// Encode a contiguous run of values. Fixed-width integers override this with a bulk copy.
    #[inline]
    fn encode_slice<E: Encoder>(values: &[Self], encoder: &mut E) -> EncodeResult<()>
    where
        Self: Sized,
    {
        encoder.encode_array(values)
    }
}

/// The object self-encode capability of composite types.
///
/// Implementors write each declared field through [`Encoder::encode_field`], in a fixed order
/// they control. The composite has no framing of its own. Usually derived:
///
/// ```
/// use hyencode::Encode;
///
/// #[derive(Encode)]
/// struct Transfer {
///     amount: u64,
///     memo: Option<String>,
/// }
///
/// assert_eq!(<Transfer as Encode>::SHAPE, hyencode::Shape::Object);
/// ```
pub trait EncodeObject {
    fn encode_fields<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()>;
}

impl Encode for bool {
    const SHAPE: Shape = Shape::Bool;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_bool(*self)
    }
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                const SHAPE: Shape = <$ty as Primitive>::KIND.shape();
                const SLICE_SHAPE: Shape = Shape::NumericArray;

                #[inline]
                fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
                    encoder.encode_number(*self)
                }

                #[inline]
                fn encode_slice<E: Encoder>(values: &[Self], encoder: &mut E) -> EncodeResult<()> {
                    encoder.encode_numeric_array(values)
                }
            }
        )*
    };
}

impl_integer!(u8, i8, u16, i16, u32, i32, u64, i64);

macro_rules! impl_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encode for $ty {
                const SHAPE: Shape = Shape::Float;

                #[inline]
                fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
                    encoder.encode_number(*self)
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Encode for u128 {
    const SHAPE: Shape = Shape::BigInteger;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_u128(*self)
    }
}

impl Encode for i128 {
    const SHAPE: Shape = Shape::BigInteger;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_i128(*self)
    }
}

impl Encode for str {
    const SHAPE: Shape = Shape::String;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_string(self)
    }
}

impl Encode for String {
    const SHAPE: Shape = Shape::String;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_string(self)
    }
}

impl<T: Encode> Encode for Option<T> {
    const SHAPE: Shape = Shape::Nullable;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_nullable(self.as_ref())
    }
}

impl<T: Encode> Encode for [T] {
    const SHAPE: Shape = T::SLICE_SHAPE;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        T::encode_slice(self, encoder)
    }
}

impl<T: Encode> Encode for Vec<T> {
    const SHAPE: Shape = T::SLICE_SHAPE;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        T::encode_slice(self, encoder)
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    const SHAPE: Shape = T::SLICE_SHAPE;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        T::encode_slice(self, encoder)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    const SHAPE: Shape = Shape::Sequence;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_sequence(self)
    }
}

impl<T: Encode + Ord> Encode for BTreeSet<T> {
    const SHAPE: Shape = Shape::Set;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_set(self)
    }
}

impl<T: Encode + Ord, S> Encode for HashSet<T, S> {
    const SHAPE: Shape = Shape::Set;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_set(self)
    }
}

impl<K: Encode + Ord, V: Encode> Encode for BTreeMap<K, V> {
    const SHAPE: Shape = Shape::Map;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_map(self)
    }
}

impl<K: Encode + Ord, V: Encode, S> Encode for HashMap<K, V, S> {
    const SHAPE: Shape = Shape::Map;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_map(self)
    }
}

macro_rules! impl_transparent {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Encode + ?Sized> Encode for $ptr {
                const SHAPE: Shape = T::SHAPE;

                #[inline]
                fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
                    (**self).encode(encoder)
                }
            }
        )*
    };
}

impl_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B: Encode + ToOwned + ?Sized> Encode for Cow<'_, B> {
    const SHAPE: Shape = B::SHAPE;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        (**self).encode(encoder)
    }
}

impl EncodeObject for () {
    #[inline]
    fn encode_fields<E: Encoder>(&self, _encoder: &mut E) -> EncodeResult<()> {
        Ok(())
    }
}

impl Encode for () {
    const SHAPE: Shape = Shape::Object;

    #[inline]
    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_object(self)
    }
}

macro_rules! impl_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Encode),+> EncodeObject for ($($name,)+) {
            #[inline]
            fn encode_fields<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
                $( encoder.encode_field(stringify!($idx), &self.$idx)?; )+
                Ok(())
            }
        }

        impl<$($name: Encode),+> Encode for ($($name,)+) {
            const SHAPE: Shape = Shape::Object;

            #[inline]
            fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
                encoder.encode_object(self)
            }
        }
    };
}

impl_tuple!(A.0);
impl_tuple!(A.0, B.1);
impl_tuple!(A.0, B.1, C.2);
impl_tuple!(A.0, B.1, C.2, D.3);
impl_tuple!(A.0, B.1, C.2, D.3, F.4);
impl_tuple!(A.0, B.1, C.2, D.3, F.4, G.5);
impl_tuple!(A.0, B.1, C.2, D.3, F.4, G.5, H.6);
impl_tuple!(A.0, B.1, C.2, D.3, F.4, G.5, H.6, I.7);
