//! Edges, neighbour records and the parameters that select how a graph is built.
//!
//! An [`Edge`] is an unordered pair of sample indices annotated with the distance
//! between the two samples. Equality, hashing and ordering only look at the
//! index pair, so two edges connecting the same samples compare equal whatever
//! their distance is. This is what lets the edge builders collapse duplicates by
//! sorting and scanning adjacent entries.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::operators::WeightKernel;

/// Unordered pair of sample indices plus the distance between the two samples.
///
/// Indices are stored normalised so that `index1() < index2()`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    index1: usize,
    index2: usize,
    distance: f32,
}

impl Edge {
    pub fn new(a: usize, b: usize, distance: f32) -> Self {
        debug_assert!(a != b, "an edge cannot connect sample {} to itself", a);
        Self { index1: a.min(b), index2: a.max(b), distance }
    }

    #[inline]
    pub fn index1(&self) -> usize {
        self.index1
    }

    #[inline]
    pub fn index2(&self) -> usize {
        self.index2
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The `(min, max)` index pair identifying this edge.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        (self.index1, self.index2)
    }

    /// Returns the endpoint opposite to `idx`, or `None` if `idx` is not on this edge.
    pub fn other(&self, idx: usize) -> Option<usize> {
        if idx == self.index1 {
            Some(self.index2)
        } else if idx == self.index2 {
            Some(self.index1)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        order_by_index(self, other)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}; {:.6})", self.index1, self.index2, self.distance)
    }
}

/// Lexicographic order on the `(index1, index2)` pair.
pub fn order_by_index(a: &Edge, b: &Edge) -> Ordering {
    a.key().cmp(&b.key())
}

/// Ascending distance; NaN distances sort last.
pub fn order_by_distance(a: &Edge, b: &Edge) -> Ordering {
    a.distance.total_cmp(&b.distance)
}

/// One directed view of an edge as stored in the adjacency list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub weight: f32,
}

impl Neighbor {
    pub fn new(index: usize, weight: f32) -> Self {
        Self { index, weight }
    }
}

/// Which builder produces the edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EdgeSelection {
    /// Exact brute-force k-nearest neighbours.
    KNearest { k: usize },
    /// Shortest `percent` of `num` randomly drawn pairs.
    RandomPercentile { percent: f64, num: usize, seed: String },
}

impl Default for EdgeSelection {
    fn default() -> Self {
        EdgeSelection::KNearest { k: 6 }
    }
}

// Floats are compared approximately, integers and seeds exactly
impl PartialEq for EdgeSelection {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EdgeSelection::KNearest { k: a }, EdgeSelection::KNearest { k: b }) => a == b,
            (
                EdgeSelection::RandomPercentile { percent: pa, num: na, seed: sa },
                EdgeSelection::RandomPercentile { percent: pb, num: nb, seed: sb },
            ) => na == nb && sa == sb && approx::relative_eq!(*pa, *pb),
            _ => false,
        }
    }
}

/// Graph construction parameters: how edges are selected and how they are weighted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphParams {
    pub selection: EdgeSelection,
    pub kernel: WeightKernel,
}

impl GraphParams {
    pub fn k_nearest(k: usize, kernel: WeightKernel) -> Self {
        Self { selection: EdgeSelection::KNearest { k }, kernel }
    }

    pub fn random_percentile(
        percent: f64,
        num: usize,
        seed: impl fmt::Display,
        kernel: WeightKernel,
    ) -> Self {
        Self {
            selection: EdgeSelection::RandomPercentile { percent, num, seed: seed.to_string() },
            kernel,
        }
    }
}
