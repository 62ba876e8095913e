//! Compressed undirected adjacency list built from a unique edge list.
//!
//! Layout is CSR: `offsets` has `size + 1` entries and the neighbours of node `i`
//! live in `data[offsets[i]..offsets[i + 1]]`. Each edge is stored twice, once
//! at each endpoint, with the same weight.

use log::{debug, info, trace};

use crate::graph::{Edge, Neighbor};

#[derive(Debug, Clone, Default)]
pub struct UndirectedAdjacencyList {
    offsets: Vec<usize>,
    data: Vec<Neighbor>,
}

impl UndirectedAdjacencyList {
    /// Build the list in two passes over `edges`.
    ///
    /// `edges` must be non-empty and free of duplicate index pairs; duplicates are
    /// not detected and would be counted twice. Neighbour records keep the order in
    /// which their edges appear in `edges`.
    pub fn build<W>(edges: &[Edge], weight_fn: W) -> Self
    where
        W: Fn(&Edge) -> f32,
    {
        debug_assert!(!edges.is_empty(), "cannot build an adjacency list from no edges");
        debug_assert!(
            !crate::graph_factory::contains_duplicate_pairs(edges),
            "edges must be pairwise unique"
        );

        info!("Building adjacency list from {} edges", edges.len());

        // Degrees
        let mut num_neighbors: Vec<usize> = Vec::new();
        for edge in edges {
            let min_size = edge.index2() + 1;
            if num_neighbors.len() < min_size {
                num_neighbors.resize(min_size, 0);
            }
            num_neighbors[edge.index1()] += 1;
            num_neighbors[edge.index2()] += 1;
        }
        let size = num_neighbors.len();

        // Prefix sums
        let mut offsets = Vec::with_capacity(size + 1);
        offsets.push(0);
        for count in &num_neighbors {
            let last = offsets[offsets.len() - 1];
            offsets.push(last + count);
        }

        // Scatter with per-node write cursors
        let mut cursors: Vec<usize> = offsets[..size].to_vec();
        let mut data = vec![Neighbor::default(); edges.len() * 2];
        for edge in edges {
            let weight = weight_fn(edge);
            let (a, b) = (edge.index1(), edge.index2());
            data[cursors[a]] = Neighbor::new(b, weight);
            cursors[a] += 1;
            data[cursors[b]] = Neighbor::new(a, weight);
            cursors[b] += 1;
        }

        let isolated = num_neighbors.iter().filter(|&&c| c == 0).count();
        debug!(
            "Adjacency list: {} nodes, {} neighbour records, {} isolated nodes",
            size,
            data.len(),
            isolated
        );
        trace!("Offsets: {:?}", offsets);

        Self { offsets, data }
    }

    /// Number of nodes: one plus the largest index referenced by an edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Start of node `idx`'s block in the flat neighbour array.
    #[inline]
    pub fn begin(&self, idx: usize) -> usize {
        self.offsets[idx]
    }

    /// One past the end of node `idx`'s block.
    #[inline]
    pub fn end(&self, idx: usize) -> usize {
        self.offsets[idx + 1]
    }

    #[inline]
    pub fn neighbors(&self, idx: usize) -> &[Neighbor] {
        &self.data[self.begin(idx)..self.end(idx)]
    }

    #[inline]
    pub fn degree(&self, idx: usize) -> usize {
        self.end(idx) - self.begin(idx)
    }

    /// Σ of the weights incident to `idx`, accumulated in `f64`.
    pub fn weight_sum(&self, idx: usize) -> f64 {
        self.neighbors(idx).iter().map(|nb| nb.weight as f64).sum()
    }

    /// Total number of neighbour records (twice the number of edges).
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Neighbor])> + '_ {
        (0..self.size()).map(move |i| (i, self.neighbors(i)))
    }
}
