//! Streaming scan of the top-level array elements
//!
//! The array is driven through serde's visitor interface on top of
//! `serde_json::Deserializer::from_reader`. Each element is classified by
//! kind and its contents are skipped with [`IgnoredAny`], so nothing beyond
//! the parser's own buffer is held in memory.

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::io::Read;
use tracing::{debug, trace};

use crate::error::{ItemKind, ValidationError};

/// Progress of a scan, kept outside the deserializer so it survives an aborted parse.
#[derive(Debug, Default)]
struct ScanState {
    count: usize,
    rejected: Option<(usize, ItemKind)>,
    in_element: bool,
}

/// Stream every element of the top-level array in `reader`.
///
/// Returns the number of elements when all of them are objects. Stops at the
/// first element of any other kind and reports its zero-based index.
pub(crate) fn scan_array<R: Read>(reader: R) -> Result<usize, ValidationError> {
    let mut state = ScanState::default();
    let mut deserializer = serde_json::Deserializer::from_reader(reader);

    let parsed = deserializer
        .deserialize_seq(ArrayVisitor { state: &mut state })
        .and_then(|()| deserializer.end());

    // A rejected element aborts the parse through a custom error; the
    // recorded rejection takes precedence over whatever error came back.
    if let Some((index, kind)) = state.rejected {
        return Err(ValidationError::InvalidItem { index, kind });
    }
    if let Err(err) = parsed {
        // Overflowing numbers are still numbers. serde_json refuses them in
        // `deserialize_any` before any visitor runs; nested ones are skipped
        // without a range check, so this can only be the element itself.
        if state.in_element && is_number_out_of_range(&err) {
            return Err(ValidationError::InvalidItem {
                index: state.count,
                kind: ItemKind::Number,
            });
        }
        return Err(err.into());
    }

    debug!(items = state.count, "array scan finished");
    Ok(state.count)
}

fn is_number_out_of_range(err: &serde_json::Error) -> bool {
    err.is_syntax() && err.to_string().starts_with("number out of range")
}

struct ArrayVisitor<'s> {
    state: &'s mut ScanState,
}

impl<'de> Visitor<'de> for ArrayVisitor<'_> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON array of objects")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        loop {
            self.state.in_element = true;
            let Some(kind) = seq.next_element_seed(KindSeed)? else {
                self.state.in_element = false;
                break;
            };
            self.state.in_element = false;

            let index = self.state.count;
            trace!(index, %kind, "element parsed");

            if kind != ItemKind::Object {
                self.state.rejected = Some((index, kind));
                return Err(de::Error::custom(format!(
                    "element at index {index} is not a JSON object"
                )));
            }
            self.state.count += 1;
        }
        Ok(())
    }
}

/// Deserializes one value, discarding it and keeping only its kind.
struct KindSeed;

impl<'de> DeserializeSeed<'de> for KindSeed {
    type Value = ItemKind;

    fn deserialize<D>(self, deserializer: D) -> Result<ItemKind, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(KindVisitor)
    }
}

struct KindVisitor;

impl<'de> Visitor<'de> for KindVisitor {
    type Value = ItemKind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<ItemKind, E> {
        Ok(ItemKind::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<ItemKind, E> {
        Ok(ItemKind::Null)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ItemKind, E> {
        Ok(ItemKind::Boolean)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<ItemKind, E> {
        Ok(ItemKind::Number)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<ItemKind, E> {
        Ok(ItemKind::Number)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<ItemKind, E> {
        Ok(ItemKind::Number)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<ItemKind, E> {
        Ok(ItemKind::String)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<ItemKind, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ItemKind::Array)
    }

    fn visit_map<A>(self, mut map: A) -> Result<ItemKind, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(ItemKind::Object)
    }
}
