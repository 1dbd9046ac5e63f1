//! Recursive random value generation.
//!
//! A value is built top-down. Above the depth limit each node picks one of
//! three shapes (primitive, object, array); collections recurse one level
//! deeper for every child. At the limit only primitives are produced, so a
//! tree started at depth 0 never nests deeper than `max_depth`.

use indexmap::IndexMap;
use jumble_types::Value;
use tracing::{debug, instrument};

use crate::config::GenerationConfig;
use crate::constants::{keys, primitives};
use crate::random::{RandomSource, choose};

/// Shape chosen for a node above the depth limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Primitive,
    Object,
    Array,
}

const SHAPES: [Shape; 3] = [Shape::Primitive, Shape::Object, Shape::Array];

/// Builds random value trees within the limits of a [`GenerationConfig`].
///
/// Holds no state of its own; every call works on fresh containers, so one
/// generator can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Generate one value at `current_depth`. External callers start at 0.
    ///
    /// A `max_depth` of zero or below yields a primitive straight away.
    pub fn generate<R>(&self, rng: &mut R, current_depth: i64, max_depth: i64) -> Value
    where
        R: RandomSource + ?Sized,
    {
        if current_depth >= max_depth {
            return leaf(rng);
        }

        // SHAPES is non-empty, so `choose` always returns a shape.
        let shape = choose(rng, &SHAPES).copied().unwrap_or(Shape::Primitive);
        match shape {
            Shape::Primitive => primitive(rng),
            Shape::Object => self.object(rng, current_depth, max_depth),
            Shape::Array => self.array(rng, current_depth, max_depth),
        }
    }

    /// Generate `size` independent top-level values.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn generate_batch<R>(&self, rng: &mut R, size: usize, max_depth: i64) -> Vec<Value>
    where
        R: RandomSource + ?Sized,
    {
        let batch: Vec<Value> = (0..size).map(|_| self.generate(rng, 0, max_depth)).collect();
        debug!(
            elements = batch.len(),
            nodes = batch.iter().map(jumble_types::Value::node_count).sum::<usize>(),
            "Generated batch"
        );
        batch
    }

    fn collection_len<R>(&self, rng: &mut R) -> usize
    where
        R: RandomSource + ?Sized,
    {
        let max = i64::try_from(self.config.max_collection_size()).unwrap_or(i64::MAX);
        usize::try_from(rng.int_in_range(1, max)).unwrap_or(1)
    }

    fn object<R>(&self, rng: &mut R, current_depth: i64, max_depth: i64) -> Value
    where
        R: RandomSource + ?Sized,
    {
        let len = self.collection_len(rng);
        let mut map = IndexMap::with_capacity(len);
        for i in 0..len {
            let key = object_key(rng, i);
            // Repeated keys overwrite the earlier value in place.
            map.insert(key, self.generate(rng, current_depth + 1, max_depth));
        }
        Value::Object(map)
    }

    fn array<R>(&self, rng: &mut R, current_depth: i64, max_depth: i64) -> Value
    where
        R: RandomSource + ?Sized,
    {
        let len = self.collection_len(rng);
        Value::Array((0..len).map(|_| self.generate(rng, current_depth + 1, max_depth)).collect())
    }
}

/// Primitive produced at the depth limit: integer, string or boolean with
/// equal odds.
fn leaf<R>(rng: &mut R) -> Value
where
    R: RandomSource + ?Sized,
{
    let (int_min, int_max) = primitives::LEAF_INT_RANGE;
    let (len_min, len_max) = primitives::LEAF_TEXT_LEN;
    match rng.index(3) {
        0 => Value::Integer(rng.int_in_range(int_min, int_max)),
        1 => Value::Text(text(rng, len_min, len_max)),
        _ => Value::Boolean(rng.coin()),
    }
}

/// Primitive chosen above the depth limit, weighted 50/30/20 toward integers.
fn primitive<R>(rng: &mut R) -> Value
where
    R: RandomSource + ?Sized,
{
    let draw = rng.unit();
    if draw < primitives::INTEGER_THRESHOLD {
        let (min, max) = primitives::INNER_INT_RANGE;
        Value::Integer(rng.int_in_range(min, max))
    } else if draw < primitives::TEXT_THRESHOLD {
        let (min, max) = primitives::INNER_TEXT_LEN;
        Value::Text(text(rng, min, max))
    } else {
        Value::Boolean(rng.coin())
    }
}

fn text<R>(rng: &mut R, min_len: i64, max_len: i64) -> String
where
    R: RandomSource + ?Sized,
{
    let len = usize::try_from(rng.int_in_range(min_len, max_len)).unwrap_or(0);
    rng.short_string(len)
}

/// Key for the property at `position`: one of the fixed names or `prop_<position>`.
fn object_key<R>(rng: &mut R, position: usize) -> String
where
    R: RandomSource + ?Sized,
{
    let candidates = keys::FIXED_KEYS.len() + 1;
    match keys::FIXED_KEYS.get(rng.index(candidates)) {
        Some(name) => (*name).to_string(),
        None => format!("{}{position}", keys::POSITIONAL_PREFIX),
    }
}
