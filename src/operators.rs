//! Distance functions over samples and weight kernels over edges
//!
//! - Distances take two samples and return an `f32`, the precision edges carry
//! - Weights map an [`Edge`] to the scalar stored in the adjacency list
//! - Kernels are monotone decreasing in distance, so short edges weigh more

use serde::{Deserialize, Serialize};

use crate::graph::Edge;

/// Computes the Euclidean norm (L2) without allocating.
#[inline]
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Σ (a_d - b_d)²
#[inline]
pub fn squared_euclidean_distance(a: &[f64], b: &[f64]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "samples must share dimensionality");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>() as f32
}

#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f32 {
    squared_euclidean_distance(a, b).sqrt()
}

/// `1 - cos(a, b)`; zero vectors are treated as orthogonal to everything.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "samples must share dimensionality");
    let denom = norm(a) * norm(b);
    let cosine = if denom > 1e-15 {
        let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        (dot / denom).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    (1.0 - cosine) as f32
}

/// Every edge weighs 1.
#[inline]
pub fn use_weights_of_one(_edge: &Edge) -> f32 {
    1.0
}

/// Returns a weight function computing `exp(-gamma * distance)`.
pub fn use_gaussian_weights(gamma: f64) -> impl Fn(&Edge) -> f32 + Copy {
    debug_assert!(gamma > 0.0, "gamma must be positive, got {}", gamma);
    move |edge: &Edge| (-gamma * edge.distance() as f64).exp() as f32
}

/// Edge weight kernel selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeightKernel {
    /// Unit weights.
    Ones,
    /// `exp(-gamma * d)`
    Gaussian { gamma: f64 },
    /// `1 / (1 + (d/sigma)^p)`
    Rational { sigma: f64, p: f64 },
}

impl Default for WeightKernel {
    fn default() -> Self {
        WeightKernel::Gaussian { gamma: 0.1 }
    }
}

impl WeightKernel {
    /// Weight for a raw distance value.
    pub fn weight(&self, distance: f32) -> f32 {
        let d = distance as f64;
        match *self {
            WeightKernel::Ones => 1.0,
            WeightKernel::Gaussian { gamma } => (-gamma * d).exp() as f32,
            WeightKernel::Rational { sigma, p } => {
                (1.0 / (1.0 + (d / sigma.max(1e-12)).powf(p))) as f32
            }
        }
    }

    /// Weight of an edge, usable wherever a `Fn(&Edge) -> f32` is expected.
    #[inline]
    pub fn edge_weight(&self, edge: &Edge) -> f32 {
        self.weight(edge.distance())
    }
}
