use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

use hyencode::prelude::*;

/// Records which rule every value was routed to, without producing bytes.
#[derive(Default)]
struct RuleRecorder {
    rules: Vec<String>,
}

impl Encoder for RuleRecorder {
    type Output = Vec<String>;

    fn encode_field<T: Encode + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> EncodeResult<()> {
        self.rules.push(format!("field {name}"));
        self.encode(value)
    }

    fn encode_bool(&mut self, value: bool) -> EncodeResult<()> {
        self.rules.push(format!("bool {value}"));
        Ok(())
    }

    fn encode_number<N: Primitive>(&mut self, _value: N) -> EncodeResult<()> {
        self.rules.push(format!("number {}", N::KIND));
        Ok(())
    }

    fn encode_u128(&mut self, _value: u128) -> EncodeResult<()> {
        self.rules.push("u128".into());
        Ok(())
    }

    fn encode_i128(&mut self, _value: i128) -> EncodeResult<()> {
        self.rules.push("i128".into());
        Ok(())
    }

    fn encode_string(&mut self, value: &str) -> EncodeResult<()> {
        self.rules.push(format!("string {value}"));
        Ok(())
    }

    fn encode_null(&mut self) -> EncodeResult<()> {
        self.rules.push("null".into());
        Ok(())
    }

    fn encode_nullable<T: Encode + ?Sized>(&mut self, value: Option<&T>) -> EncodeResult<()> {
        match value {
            None => self.encode_null(),
            Some(value) => {
                self.rules.push("present".into());
                self.encode(value)
            }
        }
    }

    fn encode_object<C: EncodeObject + ?Sized>(&mut self, value: &C) -> EncodeResult<()> {
        self.rules.push("object".into());
        value.encode_fields(self)
    }

    fn encode_sequence<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = elements.into_iter();
        self.rules.push(format!("sequence {}", elements.len()));
        for element in elements {
            self.encode(element)?;
        }
        Ok(())
    }

    fn encode_numeric_array<N: Primitive>(&mut self, values: &[N]) -> EncodeResult<()> {
        self.rules
            .push(format!("numeric array {} x{}", N::KIND, values.len()));
        Ok(())
    }

    fn encode_set<'a, T, I>(&mut self, elements: I) -> EncodeResult<()>
    where
        T: Encode + Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.rules
            .push(format!("set {}", elements.into_iter().count()));
        Ok(())
    }

    fn encode_map<'a, K, V, I>(&mut self, entries: I) -> EncodeResult<()>
    where
        K: Encode + Ord + ?Sized + 'a,
        V: Encode + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        self.rules.push(format!("map {}", entries.into_iter().count()));
        Ok(())
    }

    fn finish(self) -> Vec<String> {
        self.rules
    }
}

fn rules_of<V: Encode + ?Sized>(value: &V) -> Vec<String> {
    let mut recorder = RuleRecorder::default();
    recorder.encode(value).expect("recorder never fails");
    recorder.finish()
}

#[test]
fn primitives_route_to_their_width() {
    assert_eq!(rules_of(&true), ["bool true"]);
    assert_eq!(rules_of(&1u8), ["number u8"]);
    assert_eq!(rules_of(&-1i16), ["number i16"]);
    assert_eq!(rules_of(&1u32), ["number u32"]);
    assert_eq!(rules_of(&1i64), ["number i64"]);
    assert_eq!(rules_of(&1.0f32), ["number f32"]);
    assert_eq!(rules_of(&1.0f64), ["number f64"]);
    assert_eq!(rules_of(&1u128), ["u128"]);
    assert_eq!(rules_of(&-1i128), ["i128"]);
}

#[test]
fn strings_and_nullables() {
    assert_eq!(rules_of("hi"), ["string hi"]);
    assert_eq!(rules_of(&String::from("hi")), ["string hi"]);
    assert_eq!(rules_of(&Cow::Borrowed("hi")), ["string hi"]);
    assert_eq!(rules_of(&None::<u8>), ["null"]);
    assert_eq!(rules_of(&Some(7u8)), ["present", "number u8"]);
    assert_eq!(
        rules_of(&Some(Some("x"))),
        ["present", "present", "string x"]
    );
}

#[test]
fn integer_sequences_take_the_bulk_path() {
    assert_eq!(rules_of(&vec![1u8, 2, 3]), ["numeric array u8 x3"]);
    assert_eq!(rules_of(&[1i64, 2]), ["numeric array i64 x2"]);
    assert_eq!(rules_of(&[0u16; 4][..]), ["numeric array u16 x4"]);
    assert_eq!(<Vec<i32> as Encode>::SHAPE, Shape::NumericArray);
    assert_eq!(<[u64; 3] as Encode>::SHAPE, Shape::NumericArray);
}

#[test]
fn other_sequences_dispatch_per_element() {
    assert_eq!(
        rules_of(&vec![1.0f32, 2.0]),
        ["sequence 2", "number f32", "number f32"]
    );
    assert_eq!(
        rules_of(&vec!["a", "b"]),
        ["sequence 2", "string a", "string b"]
    );
    assert_eq!(
        rules_of(&VecDeque::from([1u8, 2])),
        ["sequence 2", "number u8", "number u8"]
    );
    assert_eq!(
        rules_of(&vec![vec![1u8], vec![]]),
        ["sequence 2", "numeric array u8 x1", "numeric array u8 x0"]
    );
    assert_eq!(<Vec<f64> as Encode>::SHAPE, Shape::Sequence);
    assert_eq!(<Vec<u128> as Encode>::SHAPE, Shape::Sequence);
}

#[test]
fn sets_and_maps() {
    let btree: BTreeSet<u8> = [1, 2].into_iter().collect();
    let hash: HashSet<String> = ["a".to_string()].into_iter().collect();
    let btree_map: BTreeMap<u8, bool> = [(1, true)].into_iter().collect();
    let hash_map: HashMap<u8, bool> = [(1, true), (2, false)].into_iter().collect();

    assert_eq!(rules_of(&btree), ["set 2"]);
    assert_eq!(rules_of(&hash), ["set 1"]);
    assert_eq!(rules_of(&btree_map), ["map 1"]);
    assert_eq!(rules_of(&hash_map), ["map 2"]);
}

#[test]
fn pointers_are_transparent() {
    assert_eq!(rules_of(&Box::new(1u8)), ["number u8"]);
    assert_eq!(rules_of(&Rc::new("x")), ["string x"]);
    assert_eq!(rules_of(&Arc::new(false)), ["bool false"]);
    assert_eq!(rules_of(&&&1u16), ["number u16"]);
    assert_eq!(<Box<str> as Encode>::SHAPE, Shape::String);
}

#[test]
fn tuples_are_objects() {
    assert_eq!(rules_of(&()), ["object"]);
    assert_eq!(
        rules_of(&(1u8, "x")),
        ["object", "field 0", "number u8", "field 1", "string x"]
    );
}

#[derive(Encode)]
struct Inner {
    flag: bool,
}

#[derive(Encode)]
struct Outer {
    id: u32,
    inner: Inner,
    #[encode(skip)]
    #[allow(dead_code)]
    cache: Vec<u8>,
    tags: Option<Vec<String>>,
}

#[derive(Encode)]
struct Pair(u8, Inner);

#[derive(Encode)]
struct Marker;

#[derive(Encode)]
struct Wrapper<T> {
    value: T,
}

#[test]
fn derived_objects_encode_fields_in_declaration_order() {
    let outer = Outer {
        id: 1,
        inner: Inner { flag: true },
        cache: vec![1, 2, 3],
        tags: None,
    };

    assert_eq!(
        rules_of(&outer),
        [
            "object",
            "field id",
            "number u32",
            "field inner",
            "object",
            "field flag",
            "bool true",
            "field tags",
            "null",
        ]
    );
}

#[test]
fn derived_tuple_unit_and_generic_structs() {
    assert_eq!(
        rules_of(&Pair(2, Inner { flag: false })),
        [
            "object",
            "field 0",
            "number u8",
            "field 1",
            "object",
            "field flag",
            "bool false"
        ]
    );
    assert_eq!(rules_of(&Marker), ["object"]);
    assert_eq!(
        rules_of(&Wrapper { value: 1.5f64 }),
        ["object", "field value", "number f64"]
    );
    assert_eq!(<Wrapper<String> as Encode>::SHAPE, Shape::Object);
}

struct Rejecting;

impl EncodeObject for Rejecting {
    fn encode_fields<E: Encoder>(&self, _encoder: &mut E) -> EncodeResult<()> {
        Err(EncodeError::custom("not encodable yet"))
    }
}

impl Encode for Rejecting {
    const SHAPE: Shape = Shape::Object;

    fn encode<E: Encoder>(&self, encoder: &mut E) -> EncodeResult<()> {
        encoder.encode_object(self)
    }
}

#[test]
fn object_errors_propagate() {
    let mut recorder = RuleRecorder::default();
    let err = recorder.encode(&vec![Rejecting]).unwrap_err();
    assert_eq!(err, EncodeError::Custom("not encodable yet".into()));
    assert_eq!(err.to_string(), "not encodable yet");
}
