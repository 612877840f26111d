//! Nested coordinate arrays and the pure transforms applied to them.
//!
//! GeoJSON stores coordinates as arrays nested to a depth that depends on the
//! geometry type (a `Point` is one level deep, a `MultiPolygon` four). The
//! transforms here do not care about the geometry type: they operate on the
//! raw numeric tree.

use crate::error::{PoiError, Result};
use serde::{Deserialize, Serialize};

/// An `[x, y]` pair. Which axis comes first depends on the producer.
pub type Position = [f64; 2];

/// A number or an arbitrarily nested list of numbers.
///
/// Leaves keep their JSON representation so integers are written back as
/// integers; conversion to `f64` happens only in [`flatten`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Number(serde_json::Number),
    List(Vec<Coordinates>),
}

impl Coordinates {
    /// Nesting depth. A bare number has depth 0, `[1, 2]` has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Coordinates::Number(_) => 0,
            Coordinates::List(items) => 1 + items.iter().map(Coordinates::depth).max().unwrap_or(0),
        }
    }

    /// Number of leaf values in the tree.
    pub fn len(&self) -> usize {
        match self {
            Coordinates::Number(_) => 1,
            Coordinates::List(items) => items.iter().map(Coordinates::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Collapse a coordinate tree into one ordered sequence, depth-first and
/// left to right.
pub fn flatten(coords: &Coordinates) -> Vec<f64> {
    let mut out = Vec::with_capacity(coords.len());
    flatten_into(coords, &mut out);
    out
}

fn flatten_into(coords: &Coordinates, out: &mut Vec<f64>) {
    match coords {
        // `as_f64` is only `None` with serde_json's arbitrary_precision feature
        Coordinates::Number(n) => out.push(n.as_f64().unwrap_or(f64::NAN)),
        Coordinates::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}

/// Regroup a flat sequence into consecutive pairs.
///
/// Odd-length input is rejected; the trailing value is never dropped.
pub fn pairs(flat: &[f64]) -> Result<Vec<Position>> {
    if flat.len() % 2 != 0 {
        return Err(PoiError::OddCoordinateCount { count: flat.len() });
    }
    Ok(flat.chunks_exact(2).map(|c| [c[0], c[1]]).collect())
}

/// Swap the two values of every pair.
pub fn swap_pairs(pairs: &[Position]) -> Vec<Position> {
    pairs.iter().map(|[x, y]| [*y, *x]).collect()
}

/// Regroup a flat sequence into pairs and swap each pair's order.
pub fn invert(flat: &[f64]) -> Result<Vec<Position>> {
    pairs(flat).map(|p| swap_pairs(&p))
}

/// Swap every `[x, y]` element of a pair list, rejecting elements that are
/// not exactly two values.
pub fn reverse(values: &[Vec<f64>]) -> Result<Vec<Position>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| match v.as_slice() {
            [x, y] => Ok([*y, *x]),
            _ => Err(PoiError::NotAPair {
                index,
                len: v.len(),
            }),
        })
        .collect()
}
