use log::{debug, info, trace};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::errors::{ManifoldError, Result};
use crate::graph::{Edge, EdgeSelection, GraphParams};
use crate::graph_factory::GraphFactory;
use crate::operators::{squared_euclidean_distance, WeightKernel};
use crate::regularizer::LinearManifoldRegularizer;

/// Distance between two samples.
pub type DistanceFn = fn(&[f64], &[f64]) -> f32;

/// End-to-end pipeline: samples → edges → regularizer → transformation matrix.
#[derive(Clone, Debug)]
pub struct ManifoldRegularizerBuilder {
    graph_params: GraphParams,
    distance: DistanceFn,
    // γ in `I + γ·reg_mat`
    strength: f64,
    symmetrize: bool,
}

impl Default for ManifoldRegularizerBuilder {
    fn default() -> Self {
        debug!("Creating ManifoldRegularizerBuilder with default parameters");
        Self {
            graph_params: GraphParams::default(),
            distance: squared_euclidean_distance,
            strength: 1.0,
            symmetrize: true,
        }
    }
}

impl ManifoldRegularizerBuilder {
    pub fn new() -> Self {
        info!("Initializing new ManifoldRegularizerBuilder");
        Self::default()
    }

    // -------------------- Graph configuration --------------------

    /// Exact k-nearest-neighbour edges.
    pub fn with_k_nearest(mut self, k: usize) -> Self {
        info!("Configuring exact k-NN graph: k={}", k);
        self.graph_params.selection = EdgeSelection::KNearest { k };
        self
    }

    /// Shortest `percent` of `num` random pairs, reproducible from `seed`.
    pub fn with_random_percentile(
        mut self,
        percent: f64,
        num: usize,
        seed: impl std::fmt::Display,
    ) -> Self {
        let seed = seed.to_string();
        info!(
            "Configuring random percentile graph: percent={}, num={}, seed={:?}",
            percent, num, seed
        );
        self.graph_params.selection = EdgeSelection::RandomPercentile { percent, num, seed };
        self
    }

    pub fn with_kernel(mut self, kernel: WeightKernel) -> Self {
        info!("Setting weight kernel: {:?}", kernel);
        self.graph_params.kernel = kernel;
        self
    }

    pub fn with_graph_params(mut self, params: GraphParams) -> Self {
        info!("Setting graph parameters: {:?}", params);
        self.graph_params = params;
        self
    }

    pub fn with_distance(mut self, distance: DistanceFn) -> Self {
        self.distance = distance;
        self
    }

    // -------------------- Regularizer configuration --------------------

    pub fn with_regularization_strength(mut self, strength: f64) -> Self {
        info!("Setting intrinsic regularization strength: {}", strength);
        self.strength = strength;
        self
    }

    pub fn with_symmetrization(mut self, symmetrize: bool) -> Self {
        info!("Setting explicit symmetrization: {}", symmetrize);
        self.symmetrize = symmetrize;
        self
    }

    pub fn graph_params(&self) -> &GraphParams {
        &self.graph_params
    }

    /// Check the parameters against the data before any graph is built.
    pub fn validate<S: AsRef<[f64]>>(&self, samples: &[S]) -> Result<()> {
        let n = samples.len();
        if n < 2 {
            return Err(ManifoldError::InvalidParameter(format!(
                "need at least two samples, got {}",
                n
            )));
        }
        let dims = samples[0].as_ref().len();
        if let Some((index, s)) =
            samples.iter().enumerate().find(|(_, s)| s.as_ref().len() != dims)
        {
            return Err(ManifoldError::DimensionMismatch {
                expected: dims,
                found: s.as_ref().len(),
                index,
            });
        }

        match &self.graph_params.selection {
            EdgeSelection::KNearest { k } => {
                if *k == 0 || *k >= n {
                    return Err(ManifoldError::InvalidParameter(format!(
                        "k must be in 1..{}, got {}",
                        n, k
                    )));
                }
            }
            EdgeSelection::RandomPercentile { percent, num, .. } => {
                if !(*percent > 0.0 && *percent <= 1.0) {
                    return Err(ManifoldError::InvalidParameter(format!(
                        "percent must be in (0, 1], got {}",
                        percent
                    )));
                }
                if *num == 0 {
                    return Err(ManifoldError::InvalidParameter(
                        "num must be positive".to_string(),
                    ));
                }
            }
        }

        if !(self.strength >= 0.0) {
            return Err(ManifoldError::InvalidParameter(format!(
                "intrinsic regularization strength must be non-negative, got {}",
                self.strength
            )));
        }
        trace!("Parameters validated for {} samples of {} dims", n, dims);
        Ok(())
    }

    // -------------------- Build --------------------

    /// Build the edge list and the regularizer over `samples`.
    pub fn build<S>(&self, samples: &[S]) -> Result<(Vec<Edge>, LinearManifoldRegularizer)>
    where
        S: AsRef<[f64]> + Sync,
    {
        self.validate(samples)?;
        info!(
            "Building manifold regularizer from {} samples with {:?}",
            samples.len(),
            self.graph_params
        );

        let distance = self.distance;
        let edges = GraphFactory::build_edges(
            samples,
            |a: &S, b: &S| distance(a.as_ref(), b.as_ref()),
            &self.graph_params,
        );
        debug!("Edge list built: {} edges", edges.len());

        let kernel = self.graph_params.kernel;
        let mut regularizer = LinearManifoldRegularizer::new().with_symmetrization(self.symmetrize);
        regularizer.build(samples, &edges, |e: &Edge| kernel.edge_weight(e))?;

        info!("Manifold regularizer built ({} dims)", regularizer.dimensionality());
        Ok((edges, regularizer))
    }

    /// Build everything and return the transformation matrix at the configured strength.
    pub fn build_transformation<S>(&self, samples: &[S]) -> Result<DenseMatrix<f64>>
    where
        S: AsRef<[f64]> + Sync,
    {
        let (_, regularizer) = self.build(samples)?;
        regularizer.get_transformation_matrix(self.strength)
    }
}
