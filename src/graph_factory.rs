//! # Edge-set builders
//!
//! Two independent ways of turning a set of samples into a deduplicated,
//! distance-annotated edge list:
//!
//! 1. **Randomized percentile sampling**: draw `num` random sample pairs, drop
//!    duplicates, keep the `percent` shortest. Reproducible from the seed.
//! 2. **Exact k-nearest neighbours**: brute force over every unordered pair,
//!    keeping a window of the `k` best candidates per node.
//!
//! ## k-NN complexity
//! - `n(n-1)/2` distance evaluations: each pair is visited once and offered to
//!   both endpoints' windows
//! - `O(k)` worst-candidate scan per accepted improvement
//! - `O(n × k)` auxiliary memory for the windows
//!
//! Both builders return edges with pairwise-unique index pairs, which is what
//! [`crate::adjacency::UndirectedAdjacencyList::build`] requires.

use log::{debug, info, trace, warn};

use crate::graph::{order_by_distance, order_by_index, Edge, EdgeSelection, GraphParams};
use crate::sampling::{PairSampler, SeededPairSampler};

/// Shortest `percent` of `num` randomly drawn candidate pairs, deduplicated.
///
/// Requires `samples.len() > 1`, `0 < percent <= 1` and `num > 0`; these are
/// checked in debug builds only. The output is sorted by ascending distance.
pub fn find_percent_shortest_edges_randomly<S, D>(
    samples: &[S],
    dist: D,
    percent: f64,
    num: usize,
    seed: impl std::fmt::Display,
) -> Vec<Edge>
where
    D: Fn(&S, &S) -> f32,
{
    let mut sampler = SeededPairSampler::new(seed);
    find_percent_shortest_edges_with_sampler(samples, dist, percent, num, &mut sampler)
}

/// Same as [`find_percent_shortest_edges_randomly`] with a caller-owned sampler.
pub fn find_percent_shortest_edges_with_sampler<S, D, P>(
    samples: &[S],
    dist: D,
    percent: f64,
    num: usize,
    sampler: &mut P,
) -> Vec<Edge>
where
    D: Fn(&S, &S) -> f32,
    P: PairSampler,
{
    debug_assert!(samples.len() > 1, "need more than one sample, got {}", samples.len());
    debug_assert!(percent > 0.0 && percent <= 1.0, "percent must be in (0, 1], got {}", percent);
    debug_assert!(num > 0, "num must be positive");

    info!(
        "Sampling {} random pairs over {} samples, keeping shortest {:.2}%",
        num,
        samples.len(),
        percent * 100.0
    );

    let mut edges: Vec<Edge> = Vec::with_capacity(num);
    while edges.len() < num {
        let (idx1, idx2) = sampler.next_pair(samples.len());
        edges.push(Edge::new(idx1, idx2, dist(&samples[idx1], &samples[idx2])));
    }

    remove_duplicate_edges(&mut edges);
    debug!("{} unique pairs out of {} draws", edges.len(), num);

    edges.sort_by(order_by_distance);
    let keep = (edges.len() as f64 * percent) as usize;
    if keep == 0 {
        warn!(
            "Keeping {:.2}% of {} unique pairs leaves no edges",
            percent * 100.0,
            edges.len()
        );
    }
    edges.truncate(keep);

    info!("Selected {} shortest edges", edges.len());
    edges
}

/// Fixed-capacity window holding a node's current best `k` candidates.
///
/// Empty slots act as infinitely distant candidates, so they are replaced first.
pub(crate) struct NeighborWindow {
    slots: Vec<Option<Edge>>,
    worst_distance: f32,
}

impl NeighborWindow {
    fn new(k: usize) -> Self {
        Self { slots: vec![None; k], worst_distance: f32::INFINITY }
    }

    #[inline]
    fn slot_distance(slot: &Option<Edge>) -> f32 {
        slot.map_or(f32::INFINITY, |e| e.distance())
    }

    /// Position of the largest distance in the window, first occurrence on ties.
    fn worst_position(&self) -> usize {
        let mut worst = 0;
        let mut worst_dist = Self::slot_distance(&self.slots[0]);
        for (pos, slot) in self.slots.iter().enumerate().skip(1) {
            let d = Self::slot_distance(slot);
            if d > worst_dist {
                worst_dist = d;
                worst = pos;
            }
        }
        worst
    }

    /// Replace the worst candidate with `edge` if it is strictly closer.
    fn offer(&mut self, edge: Edge) -> bool {
        if edge.distance() < self.worst_distance {
            let pos = self.worst_position();
            self.slots[pos] = Some(edge);
            self.worst_distance = Self::slot_distance(&self.slots[self.worst_position()]);
            true
        } else {
            false
        }
    }

    pub(crate) fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Exact k-nearest-neighbour edges by brute force.
///
/// Every node keeps its `k` closest samples; the union of all windows is
/// returned deduplicated and ordered by index pair. A node's degree in the
/// result can exceed `k` when other nodes select it.
///
/// Requires `samples.len() > k` and `k > 0` (debug-checked). Windows that
/// remain partly empty contribute only their filled slots.
pub fn find_k_nearest_neighbors<S, D>(samples: &[S], dist: D, k: usize) -> Vec<Edge>
where
    D: Fn(&S, &S) -> f32,
{
    let n = samples.len();
    debug_assert!(k > 0, "k must be positive");
    debug_assert!(n > k, "need more than k={} samples, got {}", k, n);

    info!("Computing exact {}-NN over {} samples", k, n);

    let windows = fill_neighbor_windows(samples, &dist, k);

    let underfilled = windows.iter().filter(|w| w.filled() < k).count();
    if underfilled > 0 {
        warn!("{} nodes found fewer than {} neighbours", underfilled, k);
    }

    let mut edges: Vec<Edge> = windows
        .into_iter()
        .flat_map(|w| w.slots.into_iter().flatten())
        .collect();
    remove_duplicate_edges(&mut edges);

    info!("k-NN graph has {} unique edges", edges.len());
    edges
}

/// One window per node after offering every unordered pair to both endpoints.
pub(crate) fn fill_neighbor_windows<S, D>(samples: &[S], dist: &D, k: usize) -> Vec<NeighborWindow>
where
    D: Fn(&S, &S) -> f32,
{
    let n = samples.len();
    let mut windows: Vec<NeighborWindow> = (0..n).map(|_| NeighborWindow::new(k)).collect();
    let mut replacements = 0usize;

    for i in 0..n {
        for j in (i + 1)..n {
            let d = dist(&samples[i], &samples[j]);
            let edge = Edge::new(i, j, d);
            if windows[i].offer(edge) {
                replacements += 1;
            }
            if windows[j].offer(edge) {
                replacements += 1;
            }
        }
        if i % 100 == 0 {
            trace!("Node {}: worst kept distance {}", i, windows[i].worst_distance);
        }
    }
    debug!("{} window replacements over {} pairs", replacements, n * n.saturating_sub(1) / 2);
    windows
}

/// Sort by index pair and collapse entries connecting the same two samples.
pub fn remove_duplicate_edges(edges: &mut Vec<Edge>) {
    edges.sort_unstable_by(order_by_index);
    edges.dedup();
}

/// `true` if two entries connect the same unordered pair.
pub fn contains_duplicate_pairs(edges: &[Edge]) -> bool {
    let mut keys: Vec<(usize, usize)> = edges.iter().map(Edge::key).collect();
    keys.sort_unstable();
    keys.windows(2).any(|w| w[0] == w[1])
}

pub fn is_ordered_by_index(edges: &[Edge]) -> bool {
    edges.windows(2).all(|w| order_by_index(&w[0], &w[1]).is_le())
}

/// One plus the largest index referenced by any edge; zero for an empty list.
pub fn max_index_plus_one(edges: &[Edge]) -> usize {
    edges.iter().map(|e| e.index2() + 1).max().unwrap_or(0)
}

/// Drop edges longer than `max_distance`.
pub fn remove_long_edges(edges: &mut Vec<Edge>, max_distance: f32) {
    edges.retain(|e| e.distance() <= max_distance);
}

/// Drop edges shorter than `min_distance`.
pub fn remove_short_edges(edges: &mut Vec<Edge>, min_distance: f32) {
    edges.retain(|e| e.distance() >= min_distance);
}

/// Drop the longest `percent` of the edges; the survivors end up sorted by distance.
pub fn remove_percent_longest_edges(edges: &mut Vec<Edge>, percent: f64) {
    debug_assert!((0.0..=1.0).contains(&percent), "percent must be in [0, 1], got {}", percent);
    edges.sort_by(order_by_distance);
    let keep = (edges.len() as f64 * (1.0 - percent)) as usize;
    edges.truncate(keep);
}

/// Dispatches edge construction according to [`GraphParams`].
pub struct GraphFactory;

impl GraphFactory {
    pub fn build_edges<S, D>(samples: &[S], dist: D, params: &GraphParams) -> Vec<Edge>
    where
        D: Fn(&S, &S) -> f32,
    {
        debug!("Building edges with {:?}", params.selection);
        match &params.selection {
            EdgeSelection::KNearest { k } => find_k_nearest_neighbors(samples, dist, *k),
            EdgeSelection::RandomPercentile { percent, num, seed } => {
                find_percent_shortest_edges_randomly(samples, dist, *percent, *num, seed)
            }
        }
    }
}
