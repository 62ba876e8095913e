//! Linear manifold regularization.
//!
//! Builds `reg_mat = Xᵗ·L·X` from samples and a neighbour graph, then exposes the
//! transformation `T = inv(chol(I + γ·reg_mat))` where `chol` is the lower
//! Cholesky factor. Training a linear model on `T`-transformed samples is
//! equivalent to adding the intrinsic penalty `γ·wᵗ·Xᵗ·L·X·w`, as in Sindhwani,
//! Niyogi and Belkin, "Linear Manifold Regularization for Large Scale
//! Semi-supervised Learning".

use log::{debug, info, warn};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::adjacency::UndirectedAdjacencyList;
use crate::errors::{ManifoldError, Result};
use crate::graph::Edge;
use crate::graph_factory::max_index_plus_one;
use crate::laplacian::laplacian_quadratic_form;
use crate::linalg::{cholesky_lower, inv_lower_triangular, shifted_identity, symmetrize};

#[derive(Debug, Clone)]
pub struct LinearManifoldRegularizer {
    reg_mat: Option<DenseMatrix<f64>>,
    symmetrize: bool,
}

impl Default for LinearManifoldRegularizer {
    fn default() -> Self {
        Self { reg_mat: None, symmetrize: true }
    }
}

impl LinearManifoldRegularizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `reg_mat` is replaced by `(reg_mat + reg_matᵗ)/2` after accumulation.
    pub fn with_symmetrization(mut self, symmetrize: bool) -> Self {
        self.symmetrize = symmetrize;
        self
    }

    /// Accumulate `reg_mat` from `samples` and a pairwise-unique edge list.
    ///
    /// Any previous state is discarded. `dims` is taken from `samples[0]`.
    pub fn build<S, W>(&mut self, samples: &[S], edges: &[Edge], weight_fn: W) -> Result<()>
    where
        S: AsRef<[f64]> + Sync,
        W: Fn(&Edge) -> f32,
    {
        self.reg_mat = None;

        let Some(first) = samples.first() else {
            return Err(ManifoldError::InvalidParameter("no samples given".to_string()));
        };
        let dims = first.as_ref().len();
        if let Some((index, s)) =
            samples.iter().enumerate().find(|(_, s)| s.as_ref().len() != dims)
        {
            return Err(ManifoldError::DimensionMismatch {
                expected: dims,
                found: s.as_ref().len(),
                index,
            });
        }
        let nodes = max_index_plus_one(edges);
        if nodes > samples.len() {
            return Err(ManifoldError::SampleCountMismatch { samples: samples.len(), nodes });
        }

        info!(
            "Building manifold regularizer: {} samples, {} dims, {} edges",
            samples.len(),
            dims,
            edges.len()
        );

        let mut reg_mat = if edges.is_empty() {
            warn!("Empty edge list: regularization matrix is zero");
            DenseMatrix::<f64>::zeros(dims, dims)
        } else {
            let graph = UndirectedAdjacencyList::build(edges, weight_fn);
            laplacian_quadratic_form(samples, &graph)
        };

        if self.symmetrize {
            let removed = symmetrize(&mut reg_mat);
            debug!("Removed asymmetry of {:.3e} from regularization matrix", removed);
        }

        self.reg_mat = Some(reg_mat);
        Ok(())
    }

    /// `inv(chol(I + strength · reg_mat))`
    ///
    /// Fails with [`ManifoldError::FactorizationFailed`] when the shifted matrix is
    /// not positive-definite.
    pub fn get_transformation_matrix(
        &self,
        intrinsic_regularization_strength: f64,
    ) -> Result<DenseMatrix<f64>> {
        let reg_mat = self.reg_mat.as_ref().ok_or(ManifoldError::NotBuilt)?;
        if !(intrinsic_regularization_strength >= 0.0) {
            return Err(ManifoldError::InvalidParameter(format!(
                "intrinsic regularization strength must be non-negative, got {}",
                intrinsic_regularization_strength
            )));
        }

        debug!(
            "Transformation matrix with strength {}",
            intrinsic_regularization_strength
        );
        let shifted = shifted_identity(reg_mat, intrinsic_regularization_strength);
        let lower = cholesky_lower(&shifted)?;
        Ok(inv_lower_triangular(&lower))
    }

    /// Feature dimensionality fixed at build time; zero before the first build.
    pub fn dimensionality(&self) -> usize {
        self.reg_mat.as_ref().map_or(0, |m| m.shape().0)
    }

    pub fn reg_mat(&self) -> Option<&DenseMatrix<f64>> {
        self.reg_mat.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.reg_mat.is_some()
    }
}
