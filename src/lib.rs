//! # manifold-regularizer
//!
//! Sparse neighbour graphs over feature vectors, and the linear manifold
//! regularizer built from them.
//!
//! Pipeline:
//!
//! ```text
//! samples + distance ─► edge builder ─► Vec<Edge> ─► adjacency list (CSR)
//!                                                        │
//!                                  Xᵗ·L·X ◄──────────────┘
//!                                     │
//!                 inv(chol(I + γ·Xᵗ·L·X)) ─► transformation matrix
//! ```
//!
//! ```
//! use manifold_regularizer::builder::ManifoldRegularizerBuilder;
//! use manifold_regularizer::operators::WeightKernel;
//! use smartcore::linalg::basic::arrays::Array;
//!
//! let samples = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.0],
//!     vec![1.0, 1.0],
//!     vec![1.1, 1.0],
//! ];
//!
//! let transform = ManifoldRegularizerBuilder::new()
//!     .with_k_nearest(1)
//!     .with_kernel(WeightKernel::Ones)
//!     .with_regularization_strength(0.5)
//!     .build_transformation(&samples)
//!     .unwrap();
//! assert_eq!(transform.shape(), (2, 2));
//! ```

pub mod adjacency;
pub mod builder;
pub mod errors;
pub mod graph;
pub mod graph_factory;
pub mod laplacian;
pub mod linalg;
pub mod operators;
pub mod regularizer;
pub mod sampling;

#[cfg(test)]
mod tests;
