//! # Laplacian quadratic form `Xᵗ·L·X`
//!
//! `X` stacks the samples as rows and `L` is the unnormalised graph Laplacian of
//! the adjacency list: `L_ii = Σ_j w_ij`, `L_ij = -w_ij`. The product is never
//! formed through `L` explicitly. For every feature column `d` and every node
//! `i` with neighbours:
//!
//! ```text
//! val          = (Σ_j w_ij) · x_i[d] − Σ_j w_ij · x_j[d]      // (L·X)[i][d]
//! out[d][j']  += val · x_i[j']                                  for all j'
//! ```
//!
//! Isolated nodes have a zero Laplacian row and are skipped.
//!
//! ## Complexity
//! `O(dims² · n + dims · nnz)` time; rows of the output are computed in parallel
//! with rayon, one feature column per task.

use log::{debug, info, trace, warn};
use rayon::prelude::*;
use smartcore::linalg::basic::matrix::DenseMatrix;
use sprs::{CsMat, TriMat};

use crate::adjacency::UndirectedAdjacencyList;
use crate::linalg::from_rows;

/// Accumulates `Xᵗ·L·X` as a `dims × dims` dense matrix.
///
/// `dims` is the width of `samples[0]`. Every node index in `graph` must be a
/// valid index into `samples`.
pub fn laplacian_quadratic_form<S>(
    samples: &[S],
    graph: &UndirectedAdjacencyList,
) -> DenseMatrix<f64>
where
    S: AsRef<[f64]> + Sync,
{
    debug_assert!(!samples.is_empty(), "need at least one sample");
    debug_assert!(
        graph.size() <= samples.len(),
        "graph has {} nodes but only {} samples",
        graph.size(),
        samples.len()
    );

    let dims = samples[0].as_ref().len();
    info!(
        "Accumulating {}×{} Laplacian quadratic form over {} nodes",
        dims,
        dims,
        graph.size()
    );

    let connected: Vec<usize> = (0..graph.size()).filter(|&i| graph.degree(i) > 0).collect();
    if connected.len() < graph.size() {
        warn!(
            "{} of {} nodes are isolated and do not contribute",
            graph.size() - connected.len(),
            graph.size()
        );
    }
    let weight_sums: Vec<f64> = connected.iter().map(|&i| graph.weight_sum(i)).collect();

    let rows: Vec<Vec<f64>> = (0..dims)
        .into_par_iter()
        .map(|d| {
            let mut row = vec![0.0; dims];
            for (&i, &weight_sum) in connected.iter().zip(weight_sums.iter()) {
                let xi = samples[i].as_ref();
                let mut val = weight_sum * xi[d];
                for nb in graph.neighbors(i) {
                    val -= nb.weight as f64 * samples[nb.index].as_ref()[d];
                }
                for (acc, &x) in row.iter_mut().zip(xi.iter()) {
                    *acc += val * x;
                }
            }
            trace!("Row {} accumulated", d);
            row
        })
        .collect();

    debug!("Quadratic form accumulated over {} connected nodes", connected.len());
    from_rows(&rows, dims)
}

/// Sparse `n × n` unnormalised Laplacian `L = D − A` of the adjacency list.
pub fn laplacian_matrix(graph: &UndirectedAdjacencyList) -> CsMat<f64> {
    let n = graph.size();
    let mut triplets = TriMat::new((n, n));
    for (i, neighbors) in graph.iter() {
        if neighbors.is_empty() {
            continue;
        }
        triplets.add_triplet(i, i, graph.weight_sum(i));
        for nb in neighbors {
            triplets.add_triplet(i, nb.index, -(nb.weight as f64));
        }
    }
    let laplacian: CsMat<f64> = triplets.to_csr();
    debug!("Sparse Laplacian {}×{} with {} non-zeros", n, n, laplacian.nnz());
    laplacian
}
